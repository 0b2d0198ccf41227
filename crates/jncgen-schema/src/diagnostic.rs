//! Diagnostics produced while loading and annotating modules.

use std::fmt;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// Named diagnostic categories the generator knows how to react to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    ModuleNotFound,
    ModuleNotFoundRev,
    TypeNotFound,
    FeatureNotFound,
    IdentityNotFound,
    GroupingNotFound,
    Other(String),
}

impl DiagnosticCategory {
    /// Upper-case tag, e.g. `TYPE_NOT_FOUND`.
    pub fn tag(&self) -> &str {
        match self {
            Self::ModuleNotFound => "MODULE_NOT_FOUND",
            Self::ModuleNotFoundRev => "MODULE_NOT_FOUND_REV",
            Self::TypeNotFound => "TYPE_NOT_FOUND",
            Self::FeatureNotFound => "FEATURE_NOT_FOUND",
            Self::IdentityNotFound => "IDENTITY_NOT_FOUND",
            Self::GroupingNotFound => "GROUPING_NOT_FOUND",
            Self::Other(tag) => tag,
        }
    }

    /// Parse a tag back into a category.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "MODULE_NOT_FOUND" => Self::ModuleNotFound,
            "MODULE_NOT_FOUND_REV" => Self::ModuleNotFoundRev,
            "TYPE_NOT_FOUND" => Self::TypeNotFound,
            "FEATURE_NOT_FOUND" => Self::FeatureNotFound,
            "IDENTITY_NOT_FOUND" => Self::IdentityNotFound,
            "GROUPING_NOT_FOUND" => Self::GroupingNotFound,
            other => Self::Other(other.to_string()),
        }
    }

    /// Unresolved references that leave the generated hierarchy incomplete
    /// but still usable.
    pub fn is_degradable(&self) -> bool {
        matches!(
            self,
            Self::TypeNotFound
                | Self::FeatureNotFound
                | Self::IdentityNotFound
                | Self::GroupingNotFound
        )
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single diagnostic record, located by the module it was raised in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub category: DiagnosticCategory,
    pub module: String,
    pub message: String,
}

impl Diagnostic {
    pub fn error(
        category: DiagnosticCategory,
        module: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            category,
            module: module.into(),
            message: message.into(),
        }
    }

    pub fn warning(
        category: DiagnosticCategory,
        module: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            category,
            module: module.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(
            f,
            "{}: {} [{}]: {}",
            self.module, level, self.category, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    #[test_case(DiagnosticCategory::TypeNotFound, true)]
    #[test_case(DiagnosticCategory::GroupingNotFound, true)]
    #[test_case(DiagnosticCategory::ModuleNotFound, false)]
    #[test_case(DiagnosticCategory::Other("BAD_VALUE".into()), false)]
    fn DiagnosticCategory___is_degradable___matches_unresolved_references(
        category: DiagnosticCategory,
        expected: bool,
    ) {
        assert_eq!(category.is_degradable(), expected);
    }

    #[test]
    fn DiagnosticCategory___from_tag___round_trips() {
        for tag in ["MODULE_NOT_FOUND_REV", "IDENTITY_NOT_FOUND", "SYNTAX_ERROR"] {
            assert_eq!(DiagnosticCategory::from_tag(tag).tag(), tag);
        }
    }

    #[test]
    fn Diagnostic___display___includes_module_and_tag() {
        let diag = Diagnostic::error(DiagnosticCategory::TypeNotFound, "acme", "type foo");

        assert_eq!(diag.to_string(), "acme: error [TYPE_NOT_FOUND]: type foo");
    }
}
