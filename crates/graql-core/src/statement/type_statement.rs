use serde::Serialize;

use super::InstanceStatement;
use crate::label::{Label, TypeRef};
use crate::pattern::Pattern;
use crate::value::ValueType;

/// `movie sub entity, has title, plays featured;`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeStatement {
    pub subject: TypeRef,
    pub properties: Vec<TypeProperty>,
}

impl TypeStatement {
    pub fn new(subject: impl Into<TypeRef>, properties: Vec<TypeProperty>) -> Self {
        Self {
            subject: subject.into(),
            properties,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeProperty {
    Abstract,
    /// `sub` / `sub!`; the explicit form excludes transitive supertypes.
    Sub {
        explicit: bool,
        supertype: TypeRef,
    },
    Key(TypeRef),
    Has(TypeRef),
    Plays(TypeRef),
    Relates {
        role: TypeRef,
        overridden: Option<TypeRef>,
    },
    Value(ValueType),
    Regex(String),
    When(Vec<Pattern>),
    Then(Vec<InstanceStatement>),
    Type(Label),
}

impl TypeProperty {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Sub { explicit: false, .. } => "sub",
            Self::Sub { explicit: true, .. } => "sub!",
            Self::Key(_) => "key",
            Self::Has(_) => "has",
            Self::Plays(_) => "plays",
            Self::Relates { .. } => "relates",
            Self::Value(_) => "value",
            Self::Regex(_) => "regex",
            Self::When(_) => "when",
            Self::Then(_) => "then",
            Self::Type(_) => "type",
        }
    }
}
