use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::value::Value;
use crate::variable::Variable;

/// The value part of an attribute statement or `has` clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// `$x "Godfather"`
    Assignment(Value),
    Comparison(Comparison),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Compare(Comparator, Comparable),
    Contains(Containable),
    Like(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    Eq,
    NotEq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Comparator {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!==",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparable {
    Value(Value),
    Var(Variable),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Containable {
    String(String),
    Var(Variable),
}

impl Operation {
    pub fn assign(value: impl Into<Value>) -> Self {
        Self::Assignment(value.into())
    }

    pub fn compare(comparator: Comparator, rhs: impl Into<Comparable>) -> Self {
        Self::Comparison(Comparison::Compare(comparator, rhs.into()))
    }

    pub fn eq(rhs: impl Into<Comparable>) -> Self {
        Self::compare(Comparator::Eq, rhs)
    }

    pub fn not_eq(rhs: impl Into<Comparable>) -> Self {
        Self::compare(Comparator::NotEq, rhs)
    }

    pub fn gt(rhs: impl Into<Comparable>) -> Self {
        Self::compare(Comparator::Gt, rhs)
    }

    pub fn gte(rhs: impl Into<Comparable>) -> Self {
        Self::compare(Comparator::Gte, rhs)
    }

    pub fn lt(rhs: impl Into<Comparable>) -> Self {
        Self::compare(Comparator::Lt, rhs)
    }

    pub fn lte(rhs: impl Into<Comparable>) -> Self {
        Self::compare(Comparator::Lte, rhs)
    }

    pub fn contains(rhs: impl Into<Containable>) -> Self {
        Self::Comparison(Comparison::Contains(rhs.into()))
    }

    pub fn like(regex: impl Into<String>) -> Self {
        Self::Comparison(Comparison::Like(regex.into()))
    }
}

macro_rules! value_conversions {
    ($target:ident: $($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for $target {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

value_conversions!(Comparable: &str, String, i64, i32, f64, bool, NaiveDate, NaiveDateTime);

impl From<Value> for Comparable {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Variable> for Comparable {
    fn from(var: Variable) -> Self {
        Self::Var(var)
    }
}

impl From<&str> for Containable {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Containable {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Variable> for Containable {
    fn from(var: Variable) -> Self {
        Self::Var(var)
    }
}
