//! Fluent construction of queries and patterns without parsing.
//!
//! Every call consumes its receiver and returns a new node, so a builder
//! expression evaluates to exactly the AST the parser produces for its
//! printed text:
//!
//! ```
//! use graql_core::builder::{match_, var};
//!
//! let query = match_([var("x").isa("movie").has("title", "Godfather")]).get(["x"]);
//! assert_eq!(
//!     query.to_string(),
//!     "match\n$x isa movie, has title \"Godfather\";\nget $x;"
//! );
//! ```

mod query;
mod statement;

pub use query::ComputeBuilder;

use crate::label::{Label, TypeRef};
use crate::pattern::{Conjunction, Disjunction, Negation, Pattern};
use crate::query::{DefineQuery, InsertQuery, MatchClause, UndefineQuery};
use crate::statement::{
    AttributeStatement, Comparable, Containable, HasValue, InstanceStatement, Isa, Operation,
    RelationStatement, ThingConstraint, ThingStatement, TypeProperty, TypeStatement,
};
use crate::value::{Value, ValueType};
use crate::variable::Variable;

/// Starts a statement about a variable. The first call decides the statement
/// kind: `isa`/`id`/`neq`/`has` give a thing, `rel` a relation, `val` or a
/// comparison an attribute, and a type property a type statement.
#[derive(Debug, Clone)]
pub struct VarBuilder {
    var: Variable,
}

pub fn var(name: impl Into<Variable>) -> VarBuilder {
    VarBuilder { var: name.into() }
}

pub fn var_anon() -> VarBuilder {
    VarBuilder {
        var: Variable::Anonymous,
    }
}

/// A relation with an anonymous variable: `($x)`.
pub fn rel(player: impl Into<Variable>) -> RelationStatement {
    RelationStatement::new(Variable::Anonymous).rel(player)
}

/// `(role: $x)` with an anonymous relation variable.
pub fn rel_role(role: impl Into<TypeRef>, player: impl Into<Variable>) -> RelationStatement {
    RelationStatement::new(Variable::Anonymous).rel_role(role, player)
}

/// A type statement about a label; chain type properties onto it.
pub fn type_(label: impl Into<Label>) -> TypeStatement {
    let label: Label = label.into();
    TypeStatement::new(label, Vec::new())
}

/// `<label> sub rule`; chain `when`/`then` onto it.
pub fn rule(label: impl Into<Label>) -> TypeStatement {
    type_(label).sub("rule")
}

pub fn and<P: Into<Pattern>>(patterns: impl IntoIterator<Item = P>) -> Conjunction {
    Conjunction::new(patterns.into_iter().map(Into::into).collect())
}

/// Each branch that is not already a conjunction becomes a single-pattern one.
pub fn or<P: Into<Pattern>>(branches: impl IntoIterator<Item = P>) -> Disjunction {
    Disjunction::new(
        branches
            .into_iter()
            .map(|branch| match branch.into() {
                Pattern::Conjunction(conj) => conj,
                other => Conjunction::new(vec![other]),
            })
            .collect(),
    )
}

pub fn not<P: Into<Pattern>>(patterns: impl IntoIterator<Item = P>) -> Negation {
    Negation::new(patterns.into_iter().map(Into::into).collect())
}

pub fn match_<P: Into<Pattern>>(patterns: impl IntoIterator<Item = P>) -> MatchClause {
    MatchClause::new(patterns.into_iter().map(Into::into).collect())
}

/// An insert query without a match clause.
pub fn insert<S: Into<InstanceStatement>>(statements: impl IntoIterator<Item = S>) -> InsertQuery {
    InsertQuery {
        match_clause: None,
        statements: statements.into_iter().map(Into::into).collect(),
    }
}

pub fn define<S: Into<TypeStatement>>(statements: impl IntoIterator<Item = S>) -> DefineQuery {
    DefineQuery {
        statements: statements.into_iter().map(Into::into).collect(),
    }
}

pub fn undefine<S: Into<TypeStatement>>(statements: impl IntoIterator<Item = S>) -> UndefineQuery {
    UndefineQuery {
        statements: statements.into_iter().map(Into::into).collect(),
    }
}

pub fn compute() -> ComputeBuilder {
    ComputeBuilder
}

impl VarBuilder {
    pub fn variable(&self) -> &Variable {
        &self.var
    }

    fn thing(self, constraint: ThingConstraint) -> ThingStatement {
        ThingStatement {
            var: self.var,
            constraint: Some(constraint),
            attributes: Vec::new(),
        }
    }

    fn attribute(self, operation: Operation) -> AttributeStatement {
        AttributeStatement::new(self.var, operation)
    }

    fn type_statement(self, property: TypeProperty) -> TypeStatement {
        TypeStatement::new(self.var, vec![property])
    }

    pub fn isa(self, type_: impl Into<TypeRef>) -> ThingStatement {
        self.thing(ThingConstraint::Isa(Isa::new(type_)))
    }

    pub fn isa_x(self, type_: impl Into<TypeRef>) -> ThingStatement {
        self.thing(ThingConstraint::Isa(Isa::explicit(type_)))
    }

    pub fn id(self, id: impl Into<String>) -> ThingStatement {
        self.thing(ThingConstraint::Id(id.into()))
    }

    pub fn neq(self, other: impl Into<Variable>) -> ThingStatement {
        self.thing(ThingConstraint::Neq(other.into()))
    }

    /// `$x has <label> <value>`, a thing statement without a type constraint.
    pub fn has(self, label: impl Into<Label>, value: impl Into<HasValue>) -> ThingStatement {
        ThingStatement::new(self.var).has(label, value)
    }

    pub fn rel(self, player: impl Into<Variable>) -> RelationStatement {
        RelationStatement::new(self.var).rel(player)
    }

    pub fn rel_role(
        self,
        role: impl Into<TypeRef>,
        player: impl Into<Variable>,
    ) -> RelationStatement {
        RelationStatement::new(self.var).rel_role(role, player)
    }

    pub fn val(self, value: impl Into<Value>) -> AttributeStatement {
        self.attribute(Operation::assign(value))
    }

    pub fn eq(self, rhs: impl Into<Comparable>) -> AttributeStatement {
        self.attribute(Operation::eq(rhs))
    }

    pub fn not_eq(self, rhs: impl Into<Comparable>) -> AttributeStatement {
        self.attribute(Operation::not_eq(rhs))
    }

    pub fn gt(self, rhs: impl Into<Comparable>) -> AttributeStatement {
        self.attribute(Operation::gt(rhs))
    }

    pub fn gte(self, rhs: impl Into<Comparable>) -> AttributeStatement {
        self.attribute(Operation::gte(rhs))
    }

    pub fn lt(self, rhs: impl Into<Comparable>) -> AttributeStatement {
        self.attribute(Operation::lt(rhs))
    }

    pub fn lte(self, rhs: impl Into<Comparable>) -> AttributeStatement {
        self.attribute(Operation::lte(rhs))
    }

    pub fn contains(self, rhs: impl Into<Containable>) -> AttributeStatement {
        self.attribute(Operation::contains(rhs))
    }

    pub fn like(self, regex: impl Into<String>) -> AttributeStatement {
        self.attribute(Operation::like(regex))
    }

    pub fn sub(self, supertype: impl Into<TypeRef>) -> TypeStatement {
        self.type_statement(TypeProperty::Sub {
            explicit: false,
            supertype: supertype.into(),
        })
    }

    pub fn sub_x(self, supertype: impl Into<TypeRef>) -> TypeStatement {
        self.type_statement(TypeProperty::Sub {
            explicit: true,
            supertype: supertype.into(),
        })
    }

    pub fn abstract_(self) -> TypeStatement {
        self.type_statement(TypeProperty::Abstract)
    }

    pub fn key(self, attribute_type: impl Into<TypeRef>) -> TypeStatement {
        self.type_statement(TypeProperty::Key(attribute_type.into()))
    }

    pub fn has_type(self, attribute_type: impl Into<TypeRef>) -> TypeStatement {
        self.type_statement(TypeProperty::Has(attribute_type.into()))
    }

    pub fn plays(self, role: impl Into<TypeRef>) -> TypeStatement {
        self.type_statement(TypeProperty::Plays(role.into()))
    }

    pub fn relates(self, role: impl Into<TypeRef>) -> TypeStatement {
        TypeStatement::new(self.var, Vec::new()).relates(role)
    }

    pub fn relates_as(
        self,
        role: impl Into<TypeRef>,
        overridden: impl Into<TypeRef>,
    ) -> TypeStatement {
        TypeStatement::new(self.var, Vec::new()).relates_as(role, overridden)
    }

    pub fn value(self, value_type: ValueType) -> TypeStatement {
        self.type_statement(TypeProperty::Value(value_type))
    }

    pub fn regex(self, regex: impl Into<String>) -> TypeStatement {
        self.type_statement(TypeProperty::Regex(regex.into()))
    }

    pub fn type_label(self, label: impl Into<Label>) -> TypeStatement {
        self.type_statement(TypeProperty::Type(label.into()))
    }
}

impl From<VarBuilder> for Variable {
    fn from(builder: VarBuilder) -> Self {
        builder.var
    }
}

impl From<VarBuilder> for TypeRef {
    fn from(builder: VarBuilder) -> Self {
        Self::Var(builder.var)
    }
}

impl From<VarBuilder> for Comparable {
    fn from(builder: VarBuilder) -> Self {
        Self::Var(builder.var)
    }
}

impl From<VarBuilder> for Containable {
    fn from(builder: VarBuilder) -> Self {
        Self::Var(builder.var)
    }
}

impl From<VarBuilder> for HasValue {
    fn from(builder: VarBuilder) -> Self {
        Self::Var(builder.var)
    }
}
