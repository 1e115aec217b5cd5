//! Token kinds for the Graql surface syntax.
//!
//! Logos is derived directly on this enum. The parser builds the AST straight from the
//! token stream, so there are no node kinds here: every variant except `Eof` and the
//! `__LAST` sentinel is produced by the lexer.
//!
//! `TokenSet` is a bitset over the kinds for FIRST-set membership tests in the parser.

use logos::Logos;

/// All token kinds.
///
/// ## Layout
///
/// Logos prefers the longest match, then the highest priority. A literal token outranks the
/// `Ident` and `VarNamed` regexes on the same text, except where the defaults tie (`k`, `$_`),
/// which carry an explicit priority.
/// The `#[repr(u16)]` ensures we can safely transmute from the discriminant.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    /// Compute argument binding: `min-k=3`
    #[token("=")]
    Equals,

    #[token("==")]
    EqEq,

    #[token("!==")]
    NotEqEq,

    /// Thing inequality: `$x != $y`
    #[token("!=")]
    NotEq,

    #[token(">")]
    Gt,

    #[token(">=")]
    Gte,

    #[token("<")]
    Lt,

    #[token("<=")]
    Lte,

    #[token("match")]
    KwMatch,

    #[token("get")]
    KwGet,

    #[token("define")]
    KwDefine,

    #[token("undefine")]
    KwUndefine,

    #[token("insert")]
    KwInsert,

    #[token("delete")]
    KwDelete,

    #[token("compute")]
    KwCompute,

    #[token("sort")]
    KwSort,

    #[token("offset")]
    KwOffset,

    #[token("limit")]
    KwLimit,

    #[token("group")]
    KwGroup,

    #[token("asc")]
    KwAsc,

    #[token("desc")]
    KwDesc,

    #[token("or")]
    KwOr,

    #[token("not")]
    KwNot,

    #[token("thing")]
    KwThing,

    #[token("entity")]
    KwEntity,

    #[token("attribute")]
    KwAttribute,

    #[token("relation")]
    KwRelation,

    #[token("role")]
    KwRole,

    #[token("rule")]
    KwRule,

    #[token("abstract")]
    KwAbstract,

    #[token("sub")]
    KwSub,

    #[token("sub!")]
    KwSubX,

    #[token("key")]
    KwKey,

    #[token("has")]
    KwHas,

    #[token("plays")]
    KwPlays,

    #[token("relates")]
    KwRelates,

    #[token("as")]
    KwAs,

    #[token("value")]
    KwValue,

    #[token("regex")]
    KwRegex,

    #[token("when")]
    KwWhen,

    #[token("then")]
    KwThen,

    #[token("type")]
    KwType,

    #[token("isa")]
    KwIsa,

    #[token("isa!")]
    KwIsaX,

    #[token("id")]
    KwId,

    #[token("like")]
    KwLike,

    #[token("contains")]
    KwContains,

    #[token("count")]
    KwCount,

    #[token("max")]
    KwMax,

    #[token("min")]
    KwMin,

    #[token("mean")]
    KwMean,

    #[token("median")]
    KwMedian,

    #[token("std")]
    KwStd,

    #[token("sum")]
    KwSum,

    #[token("centrality")]
    KwCentrality,

    #[token("using")]
    KwUsing,

    #[token("cluster")]
    KwCluster,

    #[token("path")]
    KwPath,

    #[token("degree")]
    KwDegree,

    #[token("k-core")]
    KwKCore,

    #[token("connected-component")]
    KwConnectedComponent,

    #[token("from")]
    KwFrom,

    #[token("to")]
    KwTo,

    #[token("of")]
    KwOf,

    #[token("in")]
    KwIn,

    #[token("where")]
    KwWhere,

    #[token("min-k")]
    KwMinK,

    #[token("k", priority = 3)]
    KwK,

    #[token("size")]
    KwSize,

    #[token("long")]
    KwLong,

    #[token("double")]
    KwDouble,

    #[token("string")]
    KwString,

    #[token("boolean")]
    KwBoolean,

    #[token("datetime")]
    KwDatetime,

    #[token("true")]
    KwTrue,

    #[token("false")]
    KwFalse,

    /// Double or single quoted; may span lines.
    #[regex(r#""(?:[^"\\]|\\(?:.|\n))*""#)]
    #[regex(r"'(?:[^'\\]|\\(?:.|\n))*'")]
    StringLiteral,

    #[regex(r"[-+]?[0-9]+")]
    Integer,

    #[regex(r"[-+]?[0-9]+\.[0-9]+(?:[eE][-+]?[0-9]+)?")]
    #[regex(r"[-+]?[0-9]+[eE][-+]?[0-9]+")]
    Real,

    #[regex(r"[0-9]{4}-[0-9]{2}-[0-9]{2}")]
    Date,

    #[regex(r"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}(?::[0-9]{2}(?:\.[0-9]{1,9})?)?")]
    DateTime,

    #[regex(r"\$[a-zA-Z0-9_-]+")]
    VarNamed,

    #[token("$_", priority = 5)]
    #[token("$")]
    VarAnon,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    /// Implicit schema labels: `@has-title`
    #[regex(r"@[a-zA-Z_][a-zA-Z0-9_-]*")]
    ImplicitIdent,

    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,

    /// Synthesized by the parser past the last token.
    Eof,

    // Must be last - used for bounds checking in `TokenSet` iteration
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Comment)
    }

    /// Returns `true` for every word-like token spelled by a fixed keyword.
    pub fn is_keyword(self) -> bool {
        (KwMatch as u16..=KwFalse as u16).contains(&(self as u16))
    }

    /// Keywords that remain usable as labels and identifiers.
    pub fn is_unreserved(self) -> bool {
        token_sets::UNRESERVED.contains(self)
    }

    pub(crate) fn from_raw(raw: u16) -> Option<SyntaxKind> {
        if raw >= __LAST as u16 {
            return None;
        }
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        Some(unsafe { std::mem::transmute::<u16, SyntaxKind>(raw) })
    }

    /// Short human description used in "expected ..." messages.
    pub fn describe(self) -> &'static str {
        match self {
            ParenOpen => "`(`",
            ParenClose => "`)`",
            BracketOpen => "`[`",
            BracketClose => "`]`",
            BraceOpen => "`{`",
            BraceClose => "`}`",
            Comma => "`,`",
            Semicolon => "`;`",
            Colon => "`:`",
            Equals => "`=`",
            EqEq => "`==`",
            NotEqEq => "`!==`",
            NotEq => "`!=`",
            Gt => "`>`",
            Gte => "`>=`",
            Lt => "`<`",
            Lte => "`<=`",
            StringLiteral => "string",
            Integer => "integer",
            Real => "real",
            Date => "date",
            DateTime => "datetime",
            VarNamed | VarAnon => "variable",
            Ident => "label",
            ImplicitIdent => "implicit label",
            Whitespace => "whitespace",
            Comment => "comment",
            Eof => "end of input",
            __LAST => "<invalid>",
            kw => kw.keyword_text(),
        }
    }

    fn keyword_text(self) -> &'static str {
        match self {
            KwMatch => "`match`",
            KwGet => "`get`",
            KwDefine => "`define`",
            KwUndefine => "`undefine`",
            KwInsert => "`insert`",
            KwDelete => "`delete`",
            KwCompute => "`compute`",
            KwSort => "`sort`",
            KwOffset => "`offset`",
            KwLimit => "`limit`",
            KwGroup => "`group`",
            KwAsc => "`asc`",
            KwDesc => "`desc`",
            KwOr => "`or`",
            KwNot => "`not`",
            KwThing => "`thing`",
            KwEntity => "`entity`",
            KwAttribute => "`attribute`",
            KwRelation => "`relation`",
            KwRole => "`role`",
            KwRule => "`rule`",
            KwAbstract => "`abstract`",
            KwSub => "`sub`",
            KwSubX => "`sub!`",
            KwKey => "`key`",
            KwHas => "`has`",
            KwPlays => "`plays`",
            KwRelates => "`relates`",
            KwAs => "`as`",
            KwValue => "`value`",
            KwRegex => "`regex`",
            KwWhen => "`when`",
            KwThen => "`then`",
            KwType => "`type`",
            KwIsa => "`isa`",
            KwIsaX => "`isa!`",
            KwId => "`id`",
            KwLike => "`like`",
            KwContains => "`contains`",
            KwCount => "`count`",
            KwMax => "`max`",
            KwMin => "`min`",
            KwMean => "`mean`",
            KwMedian => "`median`",
            KwStd => "`std`",
            KwSum => "`sum`",
            KwCentrality => "`centrality`",
            KwUsing => "`using`",
            KwCluster => "`cluster`",
            KwPath => "`path`",
            KwDegree => "`degree`",
            KwKCore => "`k-core`",
            KwConnectedComponent => "`connected-component`",
            KwFrom => "`from`",
            KwTo => "`to`",
            KwOf => "`of`",
            KwIn => "`in`",
            KwWhere => "`where`",
            KwMinK => "`min-k`",
            KwK => "`k`",
            KwSize => "`size`",
            KwLong => "`long`",
            KwDouble => "`double`",
            KwString => "`string`",
            KwBoolean => "`boolean`",
            KwDatetime => "`datetime`",
            KwTrue => "`true`",
            KwFalse => "`false`",
            _ => "token",
        }
    }
}

/// A set of `SyntaxKind`s implemented as a 128-bit bitset.
///
/// Capacity is enforced by compile-time asserts in `new()`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenSet(u128);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 128.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 128 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Member kinds in declaration order.
    pub fn iter(self) -> impl Iterator<Item = SyntaxKind> {
        (0..__LAST as u16)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .filter_map(SyntaxKind::from_raw)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Pre-defined token sets used throughout the parser.
pub mod token_sets {
    use super::*;

    /// Keywords that double as labels (`value`, compute keywords, value types...).
    pub const UNRESERVED: TokenSet = TokenSet::new(&[
        KwValue,
        KwContains,
        KwCount,
        KwMax,
        KwMin,
        KwMean,
        KwMedian,
        KwStd,
        KwSum,
        KwCluster,
        KwPath,
        KwDegree,
        KwKCore,
        KwConnectedComponent,
        KwFrom,
        KwTo,
        KwOf,
        KwIn,
        KwWhere,
        KwMinK,
        KwK,
        KwSize,
        KwLong,
        KwDouble,
        KwString,
        KwBoolean,
        KwDatetime,
    ]);

    pub const NATIVE_TYPES: TokenSet = TokenSet::new(&[
        KwThing,
        KwEntity,
        KwAttribute,
        KwRelation,
        KwRole,
        KwRule,
    ]);

    pub const LABEL_FIRST: TokenSet = TokenSet::new(&[Ident, ImplicitIdent])
        .union(NATIVE_TYPES)
        .union(UNRESERVED);

    pub const VARIABLES: TokenSet = TokenSet::new(&[VarNamed, VarAnon]);

    pub const TYPE_REF_FIRST: TokenSet = LABEL_FIRST.union(VARIABLES);

    pub const QUERY_FIRST: TokenSet = TokenSet::new(&[
        KwMatch,
        KwDefine,
        KwUndefine,
        KwInsert,
        KwCompute,
    ]);

    pub const LITERALS: TokenSet = TokenSet::new(&[
        StringLiteral,
        Integer,
        Real,
        Date,
        DateTime,
        KwTrue,
        KwFalse,
    ]);

    pub const COMPARATORS: TokenSet = TokenSet::new(&[EqEq, NotEqEq, Gt, Gte, Lt, Lte]);

    pub const OPERATION_FIRST: TokenSet = LITERALS
        .union(COMPARATORS)
        .union(TokenSet::new(&[KwContains, KwLike]));

    pub const ISA: TokenSet = TokenSet::new(&[KwIsa, KwIsaX]);

    /// Keywords that can only follow a variable in a type statement.
    pub const TYPE_ONLY_PROPERTIES: TokenSet = TokenSet::new(&[
        KwAbstract,
        KwSub,
        KwSubX,
        KwKey,
        KwPlays,
        KwRelates,
        KwValue,
        KwRegex,
        KwWhen,
        KwThen,
        KwType,
    ]);

    pub const TYPE_PROPERTY_FIRST: TokenSet =
        TYPE_ONLY_PROPERTIES.union(TokenSet::single(KwHas));

    pub const THING_CONSTRAINT_FIRST: TokenSet =
        TokenSet::new(&[KwIsa, KwIsaX, KwId, NotEq, KwHas]);

    pub const INSTANCE_FIRST: TokenSet = VARIABLES
        .union(OPERATION_FIRST)
        .union(TokenSet::single(ParenOpen));

    pub const STATEMENT_FIRST: TokenSet = INSTANCE_FIRST.union(LABEL_FIRST);

    pub const PATTERN_FIRST: TokenSet =
        STATEMENT_FIRST.union(TokenSet::new(&[BraceOpen, KwNot]));

    pub const AGGREGATE_METHODS: TokenSet = TokenSet::new(&[
        KwCount, KwMax, KwMin, KwMean, KwMedian, KwStd, KwSum,
    ]);

    pub const COMPUTE_METHODS: TokenSet = AGGREGATE_METHODS
        .union(TokenSet::new(&[KwCentrality, KwCluster, KwPath]));

    pub const COMPUTE_INPUTS: TokenSet =
        TokenSet::new(&[KwFrom, KwTo, KwOf, KwIn, KwUsing, KwWhere]);

    pub const ALGORITHMS: TokenSet = TokenSet::new(&[KwDegree, KwKCore, KwConnectedComponent]);

    pub const COMPUTE_ARGS: TokenSet = TokenSet::new(&[KwMinK, KwK, KwSize, KwContains]);

    pub const VALUE_TYPES: TokenSet =
        TokenSet::new(&[KwLong, KwDouble, KwString, KwBoolean, KwDatetime]);

    /// Identifier positions accept any word plus strings and integers: `id V123`, `from 42`.
    pub const ID_FIRST: TokenSet = TokenSet::new(&[Ident, StringLiteral, Integer]);
}
