//! Statements: type statements and the three instance statement forms.
//!
//! A statement is classified by lookahead before anything is consumed:
//!
//! - `$v` followed by a type-only property keyword is a type statement. `$v has L;`
//!   (or `$v has L,`) is too, while `$v has L <value>` is a thing statement.
//! - `$v (` starts a relation, `$v isa|isa!|id|!=|has` a thing, and `$v` followed by a
//!   literal, comparator, `contains` or `like` an attribute.
//! - Without a leading variable, `(` starts a relation and an operation starts an
//!   attribute; both get the anonymous variable as subject.
//! - Anything else starting with a label is a type statement.

use graql_core::{
    AttributeStatement, Comparable, Comparator, Comparison, Containable, HasAttribute, HasValue,
    InstanceStatement, Isa, Operation, RelationStatement, RolePlayer, Statement, ThingConstraint,
    ThingStatement, TypeProperty, TypeStatement, Variable,
};

use crate::Error;
use crate::parser::core::Parser;
use crate::parser::syntax_kind::SyntaxKind::*;
use crate::parser::syntax_kind::TokenSet;
use crate::parser::syntax_kind::token_sets::{
    COMPARATORS, INSTANCE_FIRST, ISA, LABEL_FIRST, OPERATION_FIRST, STATEMENT_FIRST,
    THING_CONSTRAINT_FIRST, TYPE_ONLY_PROPERTIES, TYPE_PROPERTY_FIRST, TYPE_REF_FIRST,
};

impl<'src> Parser<'src> {
    pub(super) fn statement(&mut self) -> Result<Statement, Error> {
        if !self.at_set(STATEMENT_FIRST) {
            return Err(self.unexpected(STATEMENT_FIRST));
        }
        if self.at_type_statement() {
            return Ok(Statement::Type(self.type_statement()?));
        }
        Ok(Statement::Instance(self.instance_statement()?))
    }

    fn at_type_statement(&self) -> bool {
        let first = self.current();
        if self.at_var() {
            let next = self.nth(1);
            if TYPE_ONLY_PROPERTIES.contains(next) {
                return true;
            }
            return next == KwHas
                && TYPE_REF_FIRST.contains(self.nth(2))
                && matches!(self.nth(3), Semicolon | Comma);
        }
        if first == KwContains && (self.nth(1) == StringLiteral || self.nth_is_var(1)) {
            return false;
        }
        LABEL_FIRST.contains(first)
    }

    pub(super) fn type_statement(&mut self) -> Result<TypeStatement, Error> {
        let subject = self.type_ref()?;
        let mut properties = vec![self.type_property()?];
        while self.eat(Comma)? {
            properties.push(self.type_property()?);
        }
        self.expect(Semicolon)?;
        Ok(TypeStatement::new(subject, properties))
    }

    fn type_property(&mut self) -> Result<TypeProperty, Error> {
        let token = self.expect_one_of(TYPE_PROPERTY_FIRST)?;
        let property = match token.kind {
            KwAbstract => TypeProperty::Abstract,
            KwSub | KwSubX => TypeProperty::Sub {
                explicit: token.kind == KwSubX,
                supertype: self.type_ref()?,
            },
            KwKey => TypeProperty::Key(self.type_ref()?),
            KwHas => TypeProperty::Has(self.type_ref()?),
            KwPlays => TypeProperty::Plays(self.type_ref()?),
            KwRelates => {
                let role = self.type_ref()?;
                let overridden = if self.eat(KwAs)? {
                    Some(self.type_ref()?)
                } else {
                    None
                };
                TypeProperty::Relates { role, overridden }
            }
            KwValue => TypeProperty::Value(self.value_type()?),
            KwRegex => TypeProperty::Regex(self.string()?),
            KwWhen => TypeProperty::When(self.pattern_block()?),
            KwThen => TypeProperty::Then(self.instance_block()?),
            _ => TypeProperty::Type(self.label()?),
        };
        Ok(property)
    }

    /// `{ stmt; ... }` with at least one instance statement.
    fn instance_block(&mut self) -> Result<Vec<InstanceStatement>, Error> {
        self.expect(BraceOpen)?;
        let statements = self.instance_statements()?;
        self.expect(BraceClose)?;
        Ok(statements)
    }

    /// One or more instance statements, as in `insert` and `delete` clauses.
    pub(super) fn instance_statements(&mut self) -> Result<Vec<InstanceStatement>, Error> {
        let mut statements = vec![self.instance_statement()?];
        while self.at_set(INSTANCE_FIRST) {
            statements.push(self.instance_statement()?);
        }
        Ok(statements)
    }

    pub(super) fn instance_statement(&mut self) -> Result<InstanceStatement, Error> {
        let has_var = self.at_var();
        let var = if has_var {
            self.variable()?
        } else {
            Variable::Anonymous
        };

        let kind = self.current();
        if kind == ParenOpen {
            return Ok(self.relation(var)?.into());
        }
        if has_var && THING_CONSTRAINT_FIRST.contains(kind) {
            return Ok(self.thing(var)?.into());
        }
        if OPERATION_FIRST.contains(kind) {
            return Ok(self.attribute(var)?.into());
        }

        let mut expected = OPERATION_FIRST.union(TokenSet::single(ParenOpen));
        expected = if has_var {
            expected.union(THING_CONSTRAINT_FIRST)
        } else {
            expected.union(INSTANCE_FIRST)
        };
        Err(self.unexpected(expected))
    }

    fn thing(&mut self, var: Variable) -> Result<ThingStatement, Error> {
        let constraint = match self.current() {
            KwIsa | KwIsaX => Some(ThingConstraint::Isa(self.isa()?)),
            KwId => {
                self.bump()?;
                Some(ThingConstraint::Id(self.id()?))
            }
            NotEq => {
                self.bump()?;
                Some(ThingConstraint::Neq(self.variable()?))
            }
            _ => None,
        };
        let attributes = match constraint {
            Some(ThingConstraint::Neq(_)) => Vec::new(),
            Some(_) => self.trailing_attributes()?,
            None => self.attributes()?,
        };
        self.expect(Semicolon)?;
        Ok(ThingStatement {
            var,
            constraint,
            attributes,
        })
    }

    fn relation(&mut self, var: Variable) -> Result<RelationStatement, Error> {
        self.expect(ParenOpen)?;
        let mut players = vec![self.role_player()?];
        while self.eat(Comma)? {
            players.push(self.role_player()?);
        }
        self.expect(ParenClose)?;

        let (isa, attributes) = self.isa_and_attributes()?;
        self.expect(Semicolon)?;
        Ok(RelationStatement {
            var,
            players,
            isa,
            attributes,
        })
    }

    /// `$x`, `role: $x` or `$role: $x`.
    fn role_player(&mut self) -> Result<RolePlayer, Error> {
        if self.at_var() && self.nth(1) != Colon {
            return Ok(RolePlayer::new(self.variable()?));
        }
        let role = self.type_ref()?;
        self.expect(Colon)?;
        let player = self.variable()?;
        Ok(RolePlayer::with_role(role, player))
    }

    fn attribute(&mut self, var: Variable) -> Result<AttributeStatement, Error> {
        let operation = self.operation()?;
        let (isa, attributes) = self.isa_and_attributes()?;
        self.expect(Semicolon)?;
        Ok(AttributeStatement {
            var,
            operation,
            isa,
            attributes,
        })
    }

    /// Optional `isa T` followed by `, has ...`, or a bare `has ...` list.
    fn isa_and_attributes(&mut self) -> Result<(Option<Isa>, Vec<HasAttribute>), Error> {
        if self.at_set(ISA) {
            let isa = self.isa()?;
            return Ok((Some(isa), self.trailing_attributes()?));
        }
        if self.at(KwHas) {
            return Ok((None, self.attributes()?));
        }
        Ok((None, Vec::new()))
    }

    fn isa(&mut self) -> Result<Isa, Error> {
        let token = self.expect_one_of(ISA)?;
        Ok(Isa {
            explicit: token.kind == KwIsaX,
            type_: self.type_ref()?,
        })
    }

    /// `, has a v, has b w` after a constraint; may be empty.
    fn trailing_attributes(&mut self) -> Result<Vec<HasAttribute>, Error> {
        if self.at(Comma) && self.nth(1) == KwHas {
            self.bump()?;
            return self.attributes();
        }
        Ok(Vec::new())
    }

    /// `has a v, has b w` with at least one attribute.
    fn attributes(&mut self) -> Result<Vec<HasAttribute>, Error> {
        let mut attributes = vec![self.has_attribute()?];
        while self.at(Comma) && self.nth(1) == KwHas {
            self.bump()?;
            attributes.push(self.has_attribute()?);
        }
        Ok(attributes)
    }

    fn has_attribute(&mut self) -> Result<HasAttribute, Error> {
        self.expect(KwHas)?;
        let label = self.label()?;
        let value = if self.at_var() {
            HasValue::Var(self.variable()?)
        } else {
            HasValue::Operation(self.operation()?)
        };
        Ok(HasAttribute { label, value })
    }

    pub(super) fn operation(&mut self) -> Result<Operation, Error> {
        if self.at_literal_start() {
            return Ok(Operation::Assignment(self.literal()?));
        }
        if self.at_set(COMPARATORS) {
            let token = self.bump()?;
            let comparator = match token.kind {
                EqEq => Comparator::Eq,
                NotEqEq => Comparator::NotEq,
                Gt => Comparator::Gt,
                Gte => Comparator::Gte,
                Lt => Comparator::Lt,
                _ => Comparator::Lte,
            };
            let rhs = if self.at_var() {
                Comparable::Var(self.variable()?)
            } else {
                Comparable::Value(self.literal()?)
            };
            return Ok(Operation::Comparison(Comparison::Compare(comparator, rhs)));
        }
        if self.eat(KwContains)? {
            let rhs = if self.at_var() {
                Containable::Var(self.variable()?)
            } else {
                Containable::String(self.string()?)
            };
            return Ok(Operation::Comparison(Comparison::Contains(rhs)));
        }
        if self.eat(KwLike)? {
            return Ok(Operation::Comparison(Comparison::Like(self.string()?)));
        }
        Err(self.unexpected(OPERATION_FIRST))
    }
}
