//! List classes: key constructors and parent-side collection methods.

use super::{MethodFamily, MethodGenerator, access_methods_comment, child_iterator};
use crate::java::{JavaMethod, Member};
use crate::types::{TypePair, TypeResolver};
use crate::warnings::WarningLog;
use jncgen_schema::{Keyword, NodeId, Schema};

pub(super) fn family(
    schema: &Schema,
    list: NodeId,
    resolver: &TypeResolver<'_>,
    warnings: &mut WarningLog,
) -> MethodFamily {
    let mut keys = Vec::new();
    if let Some(key) = schema.search_arg(list, &Keyword::Key) {
        for name in key.split_whitespace() {
            let pair = match key_leaf(schema, list, name) {
                Some(leaf) => resolver.resolve(leaf, warnings),
                None => {
                    warnings.warn(
                        format!("{}/{name}", schema.arg(list)),
                        format!(
                            "Key leaf \"{name}\" missing from list \"{}\", defaulting to string.",
                            schema.arg(list)
                        ),
                    );
                    TypePair::string()
                }
            };
            keys.push((name.to_string(), pair));
        }
    }
    MethodFamily::List {
        is_config: schema.is_config(list),
        keys,
    }
}

fn key_leaf(schema: &Schema, list: NodeId, name: &str) -> Option<NodeId> {
    let effective = schema.i_children(list).unwrap_or_default();
    schema
        .substmts(list)
        .iter()
        .chain(effective)
        .copied()
        .find(|&child| schema.keyword(child) == &Keyword::Leaf && schema.arg(child) == name)
}

fn keys<'g>(generator: &'g MethodGenerator<'_>) -> &'g [(String, TypePair)] {
    match &generator.family {
        MethodFamily::List { keys, .. } => keys,
        _ => &[],
    }
}

/// Empty constructor plus, for keyed or config lists, the key constructors.
pub(super) fn constructors(generator: &MethodGenerator<'_>) -> Vec<JavaMethod> {
    let mut constructors = vec![generator.empty_constructor()];
    let MethodFamily::List { is_config, keys } = &generator.family else {
        return constructors;
    };
    if *is_config || !keys.is_empty() {
        constructors.extend(value_constructors(generator, keys));
    }
    constructors
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum KeyForm {
    Library,
    Text,
    Primitive,
}

fn value_constructors(
    generator: &MethodGenerator<'_>,
    keys: &[(String, TypePair)],
) -> Vec<JavaMethod> {
    if keys.is_empty() {
        return Vec::new();
    }
    let mut forms = vec![KeyForm::Library, KeyForm::Text];
    if keys.iter().any(|(_, pair)| !pair.is_text()) {
        forms.push(KeyForm::Primitive);
    }

    forms
        .into_iter()
        .map(|form| {
            let mut constructor = generator.constructor_template();
            constructor.add_javadoc(format!(
                "Constructor for an initialized {} object,",
                generator.name
            ));
            constructor.add_javadoc(match form {
                KeyForm::Library => "",
                KeyForm::Text => "with Strings for the keys.",
                KeyForm::Primitive => "with primitive Java types.",
            });
            constructor.add_exception("JNCException");
            let leaf = constructor.add_dependency("Leaf");

            for (key, pair) in keys {
                let param = format!("{key}Value");
                let library = constructor.add_dependency(&pair.library);
                let (param_type, value) = match form {
                    KeyForm::Library => (pair.library.as_str(), param.clone()),
                    KeyForm::Text => ("String", format!("new {library}({param})")),
                    KeyForm::Primitive => (pair.primitive.as_str(), format!("new {library}({param})")),
                };
                constructor.add_javadoc(format!("@param {param} Key argument of child."));
                constructor.add_parameter(param_type, &param);
                constructor.add_line(format!(
                    "{leaf} {key} = new {leaf}{}",
                    generator.root_namespace(key)
                ));
                constructor.add_line(format!("{key}.setValue({value});"));
                constructor.add_line(format!("insertChild({key}, childrenNames());"));
            }
            constructor
        })
        .collect()
}

/// Key parameter list, library-typed or as Strings.
fn key_params(method: &mut JavaMethod, keys: &[(String, TypePair)], text: bool) {
    for (key, pair) in keys {
        let param_type = if text { "String" } else { pair.library.as_str() };
        method.add_parameter(param_type, key);
    }
}

/// `items[k1='" + k1 + "'][k2='" + k2 + "']`
fn key_path(arg: &str, keys: &[(String, TypePair)]) -> String {
    let mut path = arg.to_string();
    for (key, _) in keys {
        path.push_str(&format!("[{key}='\" + {key} + \"']"));
    }
    path
}

fn key_javadocs(method: &mut JavaMethod, keys: &[(String, TypePair)], text: bool) {
    if text {
        method.add_javadoc("The keys are specified as Strings.");
    }
    for (key, _) in keys {
        method.add_javadoc(format!("@param {key} Key argument of child."));
    }
}

fn getter(generator: &MethodGenerator<'_>, keys: &[(String, TypePair)], text: bool) -> JavaMethod {
    let (arg, name) = (generator.arg, &generator.name);
    let mut method = JavaMethod::public(format!("get{name}"), &generator.qualified)
        .javadoc(format!("Get method for list entry: \"{arg}\"."))
        .javadoc("Return the child with the specified keys (if any).");
    key_javadocs(&mut method, keys, text);
    method.add_javadoc("@return The list entry with the specified keys.");
    key_params(&mut method, keys, text);
    method.add_exception("JNCException");
    method.add_line(format!("String path = \"{}\";", key_path(arg, keys)));
    method.add_line(format!("return ({name})searchOne(path);"));
    method
}

fn keyed_adder(
    generator: &MethodGenerator<'_>,
    keys: &[(String, TypePair)],
    text: bool,
) -> JavaMethod {
    let (arg, name) = (generator.arg, &generator.name);
    let mut method = JavaMethod::public(format!("add{name}"), &generator.qualified)
        .javadoc(format!("Adds list entry \"{arg}\", with given key arguments."));
    key_javadocs(&mut method, keys, text);
    method.add_javadoc("@return The added child.");
    key_params(&mut method, keys, text);
    method.add_exception("JNCException");
    let args: Vec<&str> = keys.iter().map(|(key, _)| key.as_str()).collect();
    method.add_line(format!("{name} {arg} = new {name}({});", args.join(", ")));
    method.add_line(format!("insertChild({arg}, childrenNames());"));
    method.add_line(format!("return {arg};"));
    method
}

fn deleter(generator: &MethodGenerator<'_>, keys: &[(String, TypePair)], text: bool) -> JavaMethod {
    let (arg, name) = (generator.arg, &generator.name);
    let mut method = JavaMethod::public(format!("delete{name}"), "void")
        .javadoc(format!("Deletes list entry \"{arg}\", with specified keys."));
    key_javadocs(&mut method, keys, text);
    key_params(&mut method, keys, text);
    method.add_exception("JNCException");
    method.add_line(format!("String path = \"{}\";", key_path(arg, keys)));
    method.add_line("delete(path);");
    method
}

/// Keyed lists get getters, adders and deleters by library and `String`
/// keys; keyless lists only the iterator, instance adder and filter adder.
pub(super) fn parent_access_methods(generator: &MethodGenerator<'_>) -> Vec<Member> {
    let (arg, name) = (generator.arg, &generator.name);
    let class = generator.qualified.as_str();
    let keys = keys(generator);

    let add_instance = JavaMethod::public(format!("add{name}"), class)
        .javadoc(format!("Adds list entry \"{arg}\"."))
        .javadoc(format!("@param {arg} Child to be added to children"))
        .javadoc("@return The added child.")
        .param(class, arg)
        .throws("JNCException")
        .line(format!("insertChild({arg}, childrenNames());"))
        .line(format!("return {arg};"));

    let add_filter = JavaMethod::public(format!("add{name}"), class)
        .javadoc(format!("Adds list entry \"{arg}\"."))
        .javadoc("This method is used for creating subtree filters.")
        .javadoc("@return The added child.")
        .throws("JNCException")
        .line(format!("{name} {arg} = new {name}();"))
        .line(format!("insertChild({arg}, childrenNames());"))
        .line(format!("return {arg};"));

    let mut members = vec![access_methods_comment("list", arg, false)];
    if keys.is_empty() {
        members.push(child_iterator("list", arg).into());
        members.push(add_instance.into());
        members.push(add_filter.into());
        return members;
    }

    members.push(getter(generator, keys, false).into());
    members.push(getter(generator, keys, true).into());
    members.push(child_iterator("list", arg).into());
    members.push(add_instance.into());
    members.push(keyed_adder(generator, keys, false).into());
    members.push(keyed_adder(generator, keys, true).into());
    members.push(add_filter.into());
    members.push(deleter(generator, keys, false).into());
    members.push(deleter(generator, keys, true).into());
    members
}
