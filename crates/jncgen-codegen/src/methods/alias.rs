//! Typedef classes: value constructors, setters and the restriction checker.

use super::{MethodFamily, MethodGenerator, escape_java};
use crate::java::JavaMethod;
use crate::types::TypeResolver;
use crate::warnings::WarningLog;
use jncgen_schema::{Keyword, NodeId, Schema};

const RESTRICTIONS: [&str; 5] = ["pattern", "enum", "range", "length", "bit"];

pub(super) fn family(
    schema: &Schema,
    typedef: NodeId,
    resolver: &TypeResolver<'_>,
    warnings: &mut WarningLog,
) -> MethodFamily {
    let pair = resolver.resolve(typedef, warnings);
    let Some(type_stmt) = schema.search_one(typedef, &Keyword::Type) else {
        return MethodFamily::Alias {
            pair,
            needs_check: false,
            enums: Vec::new(),
            patterns: Vec::new(),
        };
    };
    let args = |keyword: Keyword| -> Vec<String> {
        schema
            .search(type_stmt, &keyword)
            .into_iter()
            .map(|id| schema.arg(id).to_string())
            .collect()
    };
    let needs_check = schema
        .substmts(type_stmt)
        .iter()
        .any(|&sub| RESTRICTIONS.contains(&schema.keyword(sub).as_str()));
    MethodFamily::Alias {
        pair,
        needs_check,
        enums: args(Keyword::Enum),
        patterns: args(Keyword::Pattern),
    }
}

pub(super) fn constructors(generator: &MethodGenerator<'_>) -> Vec<JavaMethod> {
    let MethodFamily::Alias {
        pair, needs_check, ..
    } = &generator.family
    else {
        return Vec::new();
    };
    let name = &generator.name;
    let mut variants = vec![("String".to_string(), "a string".to_string())];
    if !pair.is_text() {
        variants.push((pair.primitive.clone(), format!("a {}", pair.primitive)));
    }

    variants
        .into_iter()
        .map(|(param_type, from)| {
            let mut constructor = generator.constructor_template();
            constructor.add_javadoc(format!("Constructor for {name} object from {from}."));
            constructor.add_javadoc(format!("@param value Value to construct the {name} from."));
            constructor.add_parameter(&param_type, "value");
            constructor.add_exception("YangException");
            if *needs_check {
                constructor.add_line("check();");
            }
            constructor
        })
        .collect()
}

pub(super) fn setters(generator: &MethodGenerator<'_>) -> Vec<JavaMethod> {
    let MethodFamily::Alias {
        pair, needs_check, ..
    } = &generator.family
    else {
        return Vec::new();
    };
    let mut variants = vec![("String".to_string(), "string value.".to_string())];
    if !pair.is_text() {
        variants.push((
            pair.primitive.clone(),
            format!("value of type {}.", pair.primitive),
        ));
    }

    variants
        .into_iter()
        .map(|(param_type, kind)| {
            let mut setter = JavaMethod::public("setValue", "void")
                .javadoc(format!("Sets the value using a {kind}"))
                .javadoc("@param value The value to set.")
                .param(&param_type, "value")
                .throws("YangException")
                .line("super.setValue(value);");
            if *needs_check {
                setter.add_line("check();");
            }
            setter
        })
        .collect()
}

pub(super) fn checker(generator: &MethodGenerator<'_>) -> Option<JavaMethod> {
    let MethodFamily::Alias {
        enums, patterns, ..
    } = &generator.family
    else {
        return None;
    };
    if enums.is_empty() && patterns.is_empty() {
        return None;
    }

    let mut checker = JavaMethod::public("check", "void")
        .javadoc("Checks all restrictions (if any).")
        .throws("YangException");
    if !enums.is_empty() {
        checker.add_line("boolean e = false;");
        for value in enums {
            checker.add_line(format!("e |= enumeration(\"{}\");", escape_java(value)));
        }
        checker.add_line("throwException( !e );");
    }
    match patterns.as_slice() {
        [] => {}
        [pattern] => checker.add_line(format!("pattern(\"{}\");", escape_java(pattern))),
        many => {
            checker.add_line("java.lang.String[] regexs = {");
            for pattern in many {
                checker.add_line(format!("    \"{}\",", escape_java(pattern)));
            }
            checker.add_line("};");
            checker.add_line("pattern(regexs);");
        }
    }
    Some(checker)
}
