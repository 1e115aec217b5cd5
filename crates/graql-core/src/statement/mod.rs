//! Statements: single assertions about a type or an instance.

mod instance;
mod operation;
mod type_statement;

use serde::Serialize;

pub use instance::{
    AttributeStatement, HasAttribute, HasValue, Isa, RelationStatement, RolePlayer,
    ThingConstraint, ThingStatement,
};
pub use operation::{Comparable, Comparator, Comparison, Containable, Operation};
pub use type_statement::{TypeProperty, TypeStatement};

use crate::variable::Variable;
use crate::visitor::Visitor;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    Type(TypeStatement),
    Instance(InstanceStatement),
}

/// Statements about data instances; the only statements `insert`, `delete` and
/// rule `then` bodies accept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceStatement {
    Thing(ThingStatement),
    Relation(RelationStatement),
    Attribute(AttributeStatement),
}

impl Statement {
    /// Variables referenced anywhere in the statement, in source order, duplicates kept.
    pub fn variables(&self) -> Vec<Variable> {
        let mut collector = VariableCollector::default();
        collector.visit_statement(self);
        collector.vars
    }

    /// The variable the statement is about, if its subject is a variable.
    pub fn subject(&self) -> Option<&Variable> {
        match self {
            Self::Type(stmt) => stmt.subject.var(),
            Self::Instance(stmt) => Some(stmt.var()),
        }
    }
}

impl InstanceStatement {
    pub fn var(&self) -> &Variable {
        match self {
            Self::Thing(stmt) => &stmt.var,
            Self::Relation(stmt) => &stmt.var,
            Self::Attribute(stmt) => &stmt.var,
        }
    }

    pub fn variables(&self) -> Vec<Variable> {
        let mut collector = VariableCollector::default();
        collector.visit_instance_statement(self);
        collector.vars
    }
}

#[derive(Default)]
pub(crate) struct VariableCollector {
    pub(crate) vars: Vec<Variable>,
}

impl Visitor for VariableCollector {
    fn visit_variable(&mut self, var: &Variable) {
        self.vars.push(var.clone());
    }
}

impl From<TypeStatement> for Statement {
    fn from(stmt: TypeStatement) -> Self {
        Self::Type(stmt)
    }
}

impl From<InstanceStatement> for Statement {
    fn from(stmt: InstanceStatement) -> Self {
        Self::Instance(stmt)
    }
}

macro_rules! instance_conversions {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for InstanceStatement {
                fn from(stmt: $ty) -> Self {
                    Self::$variant(stmt)
                }
            }

            impl From<$ty> for Statement {
                fn from(stmt: $ty) -> Self {
                    Self::Instance(InstanceStatement::$variant(stmt))
                }
            }
        )*
    };
}

instance_conversions! {
    ThingStatement => Thing,
    RelationStatement => Relation,
    AttributeStatement => Attribute,
}
