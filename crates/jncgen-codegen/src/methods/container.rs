//! Parent-side access methods for container children.

use super::{MethodGenerator, access_methods_comment};
use crate::java::{JavaMethod, Member};

/// Comment, `addX(X)`, `addX()` and `deleteX()`, all bound to the parent's
/// field for the container.
pub(super) fn parent_access_methods(generator: &MethodGenerator<'_>) -> Vec<Member> {
    let arg = generator.arg;
    let name = &generator.name;
    let class = generator.qualified.as_str();

    let add_existing = JavaMethod::public(format!("add{name}"), class)
        .javadoc(format!("Adds container entry \"{arg}\"."))
        .javadoc(format!("@param {arg} Child to be added to children"))
        .javadoc("@return The added child.")
        .param(class, arg)
        .throws("JNCException")
        .line(format!("this.{arg} = {arg};"))
        .line(format!("insertChild({arg}, childrenNames());"))
        .line(format!("return {arg};"));

    let add_new = JavaMethod::public(format!("add{name}"), class)
        .javadoc(format!("Adds container entry \"{arg}\"."))
        .javadoc("This method is used for creating subtree filters.")
        .javadoc("@return The added child.")
        .throws("JNCException")
        .line(format!("{name} {arg} = new {name}();"))
        .line(format!("this.{arg} = {arg};"))
        .line(format!("insertChild({arg}, childrenNames());"))
        .line(format!("return {arg};"));

    let delete = JavaMethod::public(format!("delete{name}"), "void")
        .javadoc(format!("Deletes container entry \"{arg}\"."))
        .throws("JNCException")
        .line(format!("this.{arg} = null;"))
        .line(format!("String path = \"{arg}\";"))
        .line("delete(path);");

    vec![
        access_methods_comment("container", arg, false),
        add_existing.into(),
        add_new.into(),
        delete.into(),
    ]
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::super::tests::{module, root_class};
    use super::super::MethodGenerator;
    use crate::java::Member;
    use crate::types::TypeResolver;
    use crate::warnings::WarningLog;
    use jncgen_schema::{Keyword, Schema};

    #[test]
    fn parent_access_methods___container___comment_two_adders_and_delete() {
        let mut schema = Schema::new();
        let root = module(&mut schema);
        let top = schema.add_child(root, Keyword::Container, Some("top"));
        let inner = schema.add_child(top, Keyword::Container, Some("inner-box"));
        schema.set_arg(inner, "innerBox".to_string());
        let root_class = root_class();
        let resolver = TypeResolver::new(&schema, "gen");
        let generator =
            MethodGenerator::new(&schema, inner, "gen.top", &root_class, &resolver, &mut WarningLog::new())
                .unwrap();

        let members = generator.parent_access_methods();

        assert_eq!(members.len(), 4);
        assert!(matches!(members[0], Member::Comment(_)));
        let methods: Vec<_> = members.iter().filter_map(Member::as_method).collect();
        assert_eq!(methods[0].parameters(), ["InnerBox innerBox"]);
        assert!(methods[0].imports().contains("gen.top.InnerBox"));
        assert_eq!(methods[1].body()[0], "InnerBox innerBox = new InnerBox();");
        assert_eq!(
            methods[2].body(),
            ["this.innerBox = null;", "String path = \"innerBox\";", "delete(path);"]
        );
    }
}
