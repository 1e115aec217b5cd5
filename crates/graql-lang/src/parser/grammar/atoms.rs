//! Variables, labels, literals and identifiers.

use chrono::{NaiveDate, NaiveDateTime};
use graql_core::{Label, TypeRef, Value, ValueType, Variable};

use crate::Error;
use crate::parser::core::Parser;
use crate::parser::lexer::unescape;
use crate::parser::syntax_kind::SyntaxKind::*;
use crate::parser::syntax_kind::token_sets::{
    ID_FIRST, LABEL_FIRST, LITERALS, TYPE_REF_FIRST, VALUE_TYPES, VARIABLES,
};

impl<'src> Parser<'src> {
    pub(super) fn at_var(&self) -> bool {
        self.at_set(VARIABLES)
    }

    pub(super) fn variable(&mut self) -> Result<Variable, Error> {
        let token = self.expect_one_of(VARIABLES)?;
        Ok(match token.kind {
            VarNamed => Variable::named(token.text),
            _ => Variable::Anonymous,
        })
    }

    pub(super) fn label(&mut self) -> Result<Label, Error> {
        let token = self.expect_one_of(LABEL_FIRST)?;
        Ok(Label::new(token.text))
    }

    /// `[a, b]` or a single label. Empty brackets are accepted.
    pub(super) fn label_list(&mut self) -> Result<Vec<Label>, Error> {
        if !self.eat(BracketOpen)? {
            return Ok(vec![self.label()?]);
        }
        let mut labels = Vec::new();
        if !self.at(BracketClose) {
            labels.push(self.label()?);
            while self.eat(Comma)? {
                labels.push(self.label()?);
            }
        }
        self.expect(BracketClose)?;
        Ok(labels)
    }

    pub(super) fn type_ref(&mut self) -> Result<TypeRef, Error> {
        if !self.at_set(TYPE_REF_FIRST) {
            return Err(self.unexpected(TYPE_REF_FIRST));
        }
        if self.at_var() {
            return Ok(TypeRef::Var(self.variable()?));
        }
        Ok(TypeRef::Label(self.label()?))
    }

    pub(super) fn value_type(&mut self) -> Result<ValueType, Error> {
        let token = self.expect_one_of(VALUE_TYPES)?;
        Ok(match token.kind {
            KwLong => ValueType::Long,
            KwDouble => ValueType::Double,
            KwString => ValueType::String,
            KwBoolean => ValueType::Boolean,
            _ => ValueType::DateTime,
        })
    }

    pub(super) fn string(&mut self) -> Result<String, Error> {
        let token = self.expect(StringLiteral)?;
        Ok(unescape(token.text))
    }

    pub(super) fn literal(&mut self) -> Result<Value, Error> {
        let token = self.expect_one_of(LITERALS)?;
        let value = match token.kind {
            StringLiteral => Value::String(unescape(token.text)),
            Integer => {
                let n = token
                    .text
                    .parse::<i64>()
                    .map_err(|_| self.invalid_literal("integer", &token))?;
                Value::Integer(n)
            }
            Real => match token.text.parse::<f64>() {
                Ok(r) if r.is_finite() => Value::Real(r),
                _ => return Err(self.invalid_literal("real", &token)),
            },
            KwTrue => Value::Boolean(true),
            KwFalse => Value::Boolean(false),
            Date => {
                let date = NaiveDate::parse_from_str(token.text, "%Y-%m-%d")
                    .map_err(|_| self.invalid_literal("date", &token))?;
                Value::Date(date)
            }
            _ => {
                let datetime = parse_datetime(token.text)
                    .ok_or_else(|| self.invalid_literal("datetime", &token))?;
                Value::DateTime(datetime)
            }
        };
        Ok(value)
    }

    pub(super) fn unsigned(&mut self) -> Result<u64, Error> {
        let token = self.expect(Integer)?;
        token
            .text
            .parse::<u64>()
            .map_err(|_| self.invalid_literal("unsigned integer", &token))
    }

    /// Concept identifiers: any word (keywords included), a string or an integer.
    pub(super) fn id(&mut self) -> Result<String, Error> {
        let kind = self.current();
        if !(ID_FIRST.contains(kind) || kind.is_keyword()) {
            return Err(self.unexpected(ID_FIRST));
        }
        let token = self.bump()?;
        Ok(match token.kind {
            StringLiteral => unescape(token.text),
            _ => token.text.to_owned(),
        })
    }

    pub(super) fn at_literal_start(&self) -> bool {
        self.at_set(LITERALS)
    }

    pub(super) fn nth_is_var(&self, n: usize) -> bool {
        VARIABLES.contains(self.nth(n))
    }
}

/// Seconds are optional in the surface syntax.
fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
    if text.len() == "YYYY-MM-DDTHH:MM".len() {
        return NaiveDateTime::parse_from_str(&format!("{text}:00"), FORMAT).ok();
    }
    NaiveDateTime::parse_from_str(text, FORMAT).ok()
}
