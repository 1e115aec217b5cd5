//! Canonical text form of the AST.
//!
//! Every node implements `Display`. The output re-parses to a structurally
//! equal node, and printing a re-parsed canonical text reproduces it exactly.
//!
//! Layout: clause keywords (`match`, `get`, `insert`, ...) start a line; each
//! pattern or statement in a clause sits on its own line and ends with `;`.
//! Compute queries print on a single line.

use std::fmt::{self, Display, Formatter, Write};

use crate::label::{Label, TypeRef};
use crate::pattern::{Conjunction, Disjunction, Negation, Pattern};
use crate::query::{
    Aggregate, ComputeArg, ComputeInput, ComputeQuery, DefineQuery, DeleteQuery, Filters,
    GetAggregateQuery, GetGroupAggregateQuery, GetGroupQuery, GetQuery, InsertQuery, MatchClause,
    Query, UndefineQuery,
};
use crate::statement::{
    AttributeStatement, Comparable, Comparison, Containable, HasAttribute, HasValue,
    InstanceStatement, Isa, Operation, RelationStatement, RolePlayer, Statement, ThingConstraint,
    ThingStatement, TypeProperty, TypeStatement,
};
use crate::value::{Value, ValueType};
use crate::variable::Variable;

/// Quotes `s` so the lexer reads back exactly `s`.
///
/// The lexer resolves only `\"` and `\\`; any other backslash sequence is kept
/// verbatim. A backslash is therefore doubled only where it would otherwise
/// pair with a following `"`, `\` or the closing quote.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => match chars.peek() {
                Some('"') | Some('\\') | None => out.push_str("\\\\"),
                Some(_) => out.push('\\'),
            },
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Plain decimal notation that always carries a `.`, so the text lexes as a real.
///
/// Infinities and NaN have no literal form and print as Rust formats them.
pub fn format_real(r: f64) -> String {
    let text = r.to_string();
    if r.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Whether an identifier can be printed without quotes.
pub fn is_bare_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn write_id(f: &mut Formatter<'_>, id: &str) -> fmt::Result {
    if is_bare_id(id) {
        f.write_str(id)
    } else {
        f.write_str(&escape_string(id))
    }
}

fn write_joined<T: Display>(f: &mut Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// `{ p; q; }` without the trailing `;`.
fn write_block<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("{ ")?;
    for item in items {
        write!(f, "{item} ")?;
    }
    f.write_char('}')
}

/// Either `label` or `[a, b]`.
fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    if let [single] = items {
        return write!(f, "{single}");
    }
    f.write_char('[')?;
    write_joined(f, items, ", ")?;
    f.write_char(']')
}

fn write_attributes(f: &mut Formatter<'_>, attributes: &[HasAttribute], first_sep: &str) -> fmt::Result {
    if attributes.is_empty() {
        return Ok(());
    }
    f.write_str(first_sep)?;
    write_joined(f, attributes, ", ")
}

fn write_clause<T: Display>(f: &mut Formatter<'_>, keyword: &str, items: &[T]) -> fmt::Result {
    f.write_str(keyword)?;
    for item in items {
        write!(f, "\n{item}")?;
    }
    Ok(())
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "${name}"),
            Self::Anonymous => f.write_str("$_"),
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => label.fmt(f),
            Self::Var(var) => var.fmt(f),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(&escape_string(s)),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => f.write_str(&format_real(*r)),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Statement(stmt) => stmt.fmt(f),
            Self::Conjunction(conj) => conj.fmt(f),
            Self::Disjunction(disj) => disj.fmt(f),
            Self::Negation(neg) => neg.fmt(f),
        }
    }
}

impl Display for Conjunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_block(f, &self.patterns)?;
        f.write_char(';')
    }
}

impl Display for Disjunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, branch) in self.branches.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            write_block(f, &branch.patterns)?;
        }
        f.write_char(';')
    }
}

impl Display for Negation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("not ")?;
        write_block(f, &self.patterns)?;
        f.write_char(';')
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(stmt) => stmt.fmt(f),
            Self::Instance(stmt) => stmt.fmt(f),
        }
    }
}

impl Display for InstanceStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thing(stmt) => stmt.fmt(f),
            Self::Relation(stmt) => stmt.fmt(f),
            Self::Attribute(stmt) => stmt.fmt(f),
        }
    }
}

impl Display for TypeStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.subject)?;
        if !self.properties.is_empty() {
            f.write_char(' ')?;
            write_joined(f, &self.properties, ", ")?;
        }
        f.write_char(';')
    }
}

impl Display for TypeProperty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())?;
        match self {
            Self::Abstract => Ok(()),
            Self::Sub { supertype, .. } => write!(f, " {supertype}"),
            Self::Key(t) | Self::Has(t) | Self::Plays(t) => write!(f, " {t}"),
            Self::Relates { role, overridden } => {
                write!(f, " {role}")?;
                match overridden {
                    Some(overridden) => write!(f, " as {overridden}"),
                    None => Ok(()),
                }
            }
            Self::Value(value_type) => write!(f, " {value_type}"),
            Self::Regex(regex) => write!(f, " {}", escape_string(regex)),
            Self::When(patterns) => {
                f.write_char(' ')?;
                write_block(f, patterns)
            }
            Self::Then(stmts) => {
                f.write_char(' ')?;
                write_block(f, stmts)
            }
            Self::Type(label) => write!(f, " {label}"),
        }
    }
}

impl Display for Isa {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let keyword = if self.explicit { "isa!" } else { "isa" };
        write!(f, "{keyword} {}", self.type_)
    }
}

impl Display for ThingStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.var)?;
        match &self.constraint {
            Some(ThingConstraint::Isa(isa)) => write!(f, " {isa}")?,
            Some(ThingConstraint::Id(id)) => {
                f.write_str(" id ")?;
                write_id(f, id)?;
            }
            Some(ThingConstraint::Neq(other)) => write!(f, " != {other}")?,
            None => {}
        }
        let sep = if self.constraint.is_some() { ", " } else { " " };
        write_attributes(f, &self.attributes, sep)?;
        f.write_char(';')
    }
}

impl Display for RolePlayer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(role) = &self.role {
            write!(f, "{role}: ")?;
        }
        write!(f, "{}", self.player)
    }
}

impl Display for RelationStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.var.is_named() {
            write!(f, "{} ", self.var)?;
        }
        f.write_char('(')?;
        write_joined(f, &self.players, ", ")?;
        f.write_char(')')?;
        if let Some(isa) = &self.isa {
            write!(f, " {isa}")?;
        }
        let sep = if self.isa.is_some() { ", " } else { " " };
        write_attributes(f, &self.attributes, sep)?;
        f.write_char(';')
    }
}

impl Display for AttributeStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.var.is_named() {
            write!(f, "{} ", self.var)?;
        }
        write!(f, "{}", self.operation)?;
        if let Some(isa) = &self.isa {
            write!(f, " {isa}")?;
        }
        let sep = if self.isa.is_some() { ", " } else { " " };
        write_attributes(f, &self.attributes, sep)?;
        f.write_char(';')
    }
}

impl Display for HasAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "has {} ", self.label)?;
        match &self.value {
            HasValue::Var(var) => var.fmt(f),
            HasValue::Operation(op) => op.fmt(f),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assignment(value) => value.fmt(f),
            Self::Comparison(comparison) => comparison.fmt(f),
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare(comparator, rhs) => write!(f, "{} {rhs}", comparator.symbol()),
            Self::Contains(rhs) => write!(f, "contains {rhs}"),
            Self::Like(regex) => write!(f, "like {}", escape_string(regex)),
        }
    }
}

impl Display for Comparable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => value.fmt(f),
            Self::Var(var) => var.fmt(f),
        }
    }
}

impl Display for Containable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(&escape_string(s)),
            Self::Var(var) => var.fmt(f),
        }
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Define(q) => q.fmt(f),
            Self::Undefine(q) => q.fmt(f),
            Self::Insert(q) => q.fmt(f),
            Self::Delete(q) => q.fmt(f),
            Self::Get(q) => q.fmt(f),
            Self::GetAggregate(q) => q.fmt(f),
            Self::GetGroup(q) => q.fmt(f),
            Self::GetGroupAggregate(q) => q.fmt(f),
            Self::Compute(q) => q.fmt(f),
        }
    }
}

impl Display for MatchClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_clause(f, "match", &self.patterns)
    }
}

impl Display for DefineQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_clause(f, "define", &self.statements)
    }
}

impl Display for UndefineQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_clause(f, "undefine", &self.statements)
    }
}

impl Display for InsertQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(clause) = &self.match_clause {
            writeln!(f, "{clause}")?;
        }
        write_clause(f, "insert", &self.statements)
    }
}

impl Display for DeleteQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.match_clause)?;
        write_clause(f, "delete", &self.statements)
    }
}

impl Display for GetQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.match_clause)?;
        if !self.vars.is_empty() {
            f.write_str("\nget ")?;
            write_joined(f, &self.vars, ", ")?;
            f.write_char(';')?;
        }
        self.filters.fmt(f)
    }
}

/// Each present filter on its own line, preceded by a newline.
impl Display for Filters {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(sort) = &self.sort {
            write!(f, "\nsort {}", sort.var)?;
            if let Some(order) = sort.order {
                write!(f, " {}", order.keyword())?;
            }
            f.write_char(';')?;
        }
        if let Some(offset) = self.offset {
            write!(f, "\noffset {offset};")?;
        }
        if let Some(limit) = self.limit {
            write!(f, "\nlimit {limit};")?;
        }
        Ok(())
    }
}

impl Display for Aggregate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.method.keyword())?;
        if let Some(var) = &self.var {
            write!(f, " {var}")?;
        }
        f.write_char(';')
    }
}

impl Display for GetAggregateQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.get, self.aggregate)
    }
}

impl Display for GetGroupQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\ngroup {};", self.get, self.var)
    }
}

impl Display for GetGroupAggregateQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.group, self.aggregate)
    }
}

impl Display for ComputeQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "compute {}", self.method.keyword())?;
        for (i, input) in self.inputs().iter().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            input.fmt(f)?;
        }
        f.write_char(';')
    }
}

impl Display for ComputeInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.kind().keyword())?;
        match self {
            Self::From(id) | Self::To(id) => write_id(f, id),
            Self::Of(labels) | Self::In(labels) => write_list(f, labels),
            Self::Using(algorithm) => f.write_str(algorithm.keyword()),
            Self::Where(args) => write_list(f, args),
        }
    }
}

impl Display for ComputeArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.keyword())?;
        match self {
            Self::MinK(n) | Self::K(n) | Self::Size(n) => write!(f, "{n}"),
            Self::Contains(id) => write_id(f, id),
        }
    }
}
