//! Query variables.

use serde::Serialize;

/// A `$`-prefixed variable.
///
/// Anonymous variables (`$_`, a bare `$`, or the implicit subject of a relation or
/// attribute statement written without one) never bind by name. Structurally they
/// all compare equal, which keeps `parse(print(ast)) == ast` intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    Named(String),
    Anonymous,
}

impl Variable {
    /// Creates a named variable. A leading `$` is stripped; `_` and the empty name
    /// denote the anonymous variable. Printable names use `[A-Za-z0-9_-]`; other
    /// characters are kept here and rejected by validation.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let name = name.strip_prefix('$').map(str::to_string).unwrap_or(name);
        if name.is_empty() || name == "_" {
            Self::Anonymous
        } else {
            Self::Named(name)
        }
    }

    pub fn anonymous() -> Self {
        Self::Anonymous
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Anonymous => None,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

impl From<&Variable> for Variable {
    fn from(var: &Variable) -> Self {
        var.clone()
    }
}
