use serde::Serialize;

use super::Operation;
use crate::label::{Label, TypeRef};
use crate::variable::Variable;

/// `isa movie` / `isa! movie`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Isa {
    pub explicit: bool,
    #[serde(rename = "type")]
    pub type_: TypeRef,
}

impl Isa {
    pub fn new(type_: impl Into<TypeRef>) -> Self {
        Self {
            explicit: false,
            type_: type_.into(),
        }
    }

    pub fn explicit(type_: impl Into<TypeRef>) -> Self {
        Self {
            explicit: true,
            type_: type_.into(),
        }
    }
}

/// The leading constraint of a thing statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThingConstraint {
    Isa(Isa),
    Id(String),
    /// `$x != $y`
    Neq(Variable),
}

/// `$x isa movie, has title "Godfather";`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ThingStatement {
    pub var: Variable,
    pub constraint: Option<ThingConstraint>,
    pub attributes: Vec<HasAttribute>,
}

impl ThingStatement {
    pub fn new(var: impl Into<Variable>) -> Self {
        Self {
            var: var.into(),
            constraint: None,
            attributes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RolePlayer {
    pub role: Option<TypeRef>,
    pub player: Variable,
}

impl RolePlayer {
    pub fn new(player: impl Into<Variable>) -> Self {
        Self {
            role: None,
            player: player.into(),
        }
    }

    pub fn with_role(role: impl Into<TypeRef>, player: impl Into<Variable>) -> Self {
        Self {
            role: Some(role.into()),
            player: player.into(),
        }
    }
}

/// `$r (actor: $x, $y) isa casting;`
///
/// Players keep their written order, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RelationStatement {
    pub var: Variable,
    pub players: Vec<RolePlayer>,
    pub isa: Option<Isa>,
    pub attributes: Vec<HasAttribute>,
}

impl RelationStatement {
    pub fn new(var: impl Into<Variable>) -> Self {
        Self {
            var: var.into(),
            players: Vec::new(),
            isa: None,
            attributes: Vec::new(),
        }
    }
}

/// `$n "Bob" isa name;` or `$x > 10;`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AttributeStatement {
    pub var: Variable,
    pub operation: Operation,
    pub isa: Option<Isa>,
    pub attributes: Vec<HasAttribute>,
}

impl AttributeStatement {
    pub fn new(var: impl Into<Variable>, operation: Operation) -> Self {
        Self {
            var: var.into(),
            operation,
            isa: None,
            attributes: Vec::new(),
        }
    }
}

/// `has title $t` / `has title "Godfather"` / `has rating > 5`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HasAttribute {
    pub label: Label,
    pub value: HasValue,
}

impl HasAttribute {
    pub fn new(label: impl Into<Label>, value: impl Into<HasValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HasValue {
    Var(Variable),
    Operation(Operation),
}

impl From<Variable> for HasValue {
    fn from(var: Variable) -> Self {
        Self::Var(var)
    }
}

impl From<Operation> for HasValue {
    fn from(op: Operation) -> Self {
        Self::Operation(op)
    }
}

macro_rules! assignment_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for HasValue {
                fn from(value: $ty) -> Self {
                    Self::Operation(Operation::assign(value))
                }
            }
        )*
    };
}

assignment_conversions!(
    &str,
    String,
    i64,
    i32,
    f64,
    bool,
    chrono::NaiveDate,
    chrono::NaiveDateTime,
    crate::value::Value,
);
