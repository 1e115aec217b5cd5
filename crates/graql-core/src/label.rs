//! Type labels and type references.

use serde::Serialize;

use crate::variable::Variable;

/// A schema type label: `movie`, `has-title`, `@has-name`, `entity`.
///
/// Printable labels match `[A-Za-z_][A-Za-z0-9_-]*`, optionally prefixed with `@`,
/// and are not reserved keywords. `Label::new` does not check this; validation does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Implicit labels (`@has-name`) name schema-generated relation types.
    pub fn is_implicit(&self) -> bool {
        self.0.starts_with('@')
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&Label> for Label {
    fn from(label: &Label) -> Self {
        label.clone()
    }
}

/// The grammar's `type` rule: a label or a variable standing for a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    Label(Label),
    Var(Variable),
}

impl TypeRef {
    pub fn label(&self) -> Option<&Label> {
        match self {
            Self::Label(label) => Some(label),
            Self::Var(_) => None,
        }
    }

    pub fn var(&self) -> Option<&Variable> {
        match self {
            Self::Var(var) => Some(var),
            Self::Label(_) => None,
        }
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::Label(Label::new(name))
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self::Label(Label::from(name))
    }
}

impl From<Label> for TypeRef {
    fn from(label: Label) -> Self {
        Self::Label(label)
    }
}

impl From<Variable> for TypeRef {
    fn from(var: Variable) -> Self {
        Self::Var(var)
    }
}
