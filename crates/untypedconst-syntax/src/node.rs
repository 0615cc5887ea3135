//! Node definitions.
//!
//! `NodeKind` is a closed sum type: the analyzer matches on it exhaustively,
//! so adding a variant forces every consumer to decide how to treat it.

use serde::{Deserialize, Serialize};
use untypedconst_common::Span;

use crate::base::NodeIndex;

/// Flat storage for every node of one compilation unit.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    // =========================================================================
    // Declarations
    // =========================================================================
    SourceFile {
        package: String,
        #[serde(default)]
        decls: Vec<NodeIndex>,
    },
    FuncDecl {
        name: String,
        /// Missing for external (assembly-backed) functions.
        #[serde(default)]
        body: NodeIndex,
    },
    /// One line of a `const`/`var` declaration: `a, b = 1, 2`.
    ValueSpec {
        #[serde(default)]
        names: Vec<String>,
        #[serde(default)]
        values: Vec<NodeIndex>,
        is_const: bool,
    },
    TypeSpec {
        name: String,
    },

    // =========================================================================
    // Statements
    // =========================================================================
    Block {
        #[serde(default)]
        stmts: Vec<NodeIndex>,
    },
    ExprStmt {
        expr: NodeIndex,
    },
    DeclStmt {
        #[serde(default)]
        specs: Vec<NodeIndex>,
    },
    /// `=`, `:=` and the compound `op=` forms.
    Assign {
        #[serde(default)]
        lhs: Vec<NodeIndex>,
        #[serde(default)]
        rhs: Vec<NodeIndex>,
    },
    IncDec {
        expr: NodeIndex,
    },
    Return {
        #[serde(default)]
        results: Vec<NodeIndex>,
    },
    Send {
        chan: NodeIndex,
        value: NodeIndex,
    },
    If {
        #[serde(default)]
        init: NodeIndex,
        cond: NodeIndex,
        then: NodeIndex,
        #[serde(default)]
        else_branch: NodeIndex,
    },
    For {
        #[serde(default)]
        init: NodeIndex,
        #[serde(default)]
        cond: NodeIndex,
        #[serde(default)]
        post: NodeIndex,
        body: NodeIndex,
    },
    Range {
        #[serde(default)]
        key: NodeIndex,
        #[serde(default)]
        value: NodeIndex,
        expr: NodeIndex,
        body: NodeIndex,
    },
    Switch {
        #[serde(default)]
        init: NodeIndex,
        #[serde(default)]
        tag: NodeIndex,
        #[serde(default)]
        clauses: Vec<NodeIndex>,
    },
    CaseClause {
        #[serde(default)]
        exprs: Vec<NodeIndex>,
        #[serde(default)]
        body: Vec<NodeIndex>,
    },
    Go {
        call: NodeIndex,
    },
    Defer {
        call: NodeIndex,
    },

    // =========================================================================
    // Expressions
    // =========================================================================
    Ident {
        name: String,
    },
    BasicLit {
        kind: BasicLitKind,
        raw: String,
    },
    Paren {
        expr: NodeIndex,
    },
    Unary {
        op: UnaryOp,
        operand: NodeIndex,
    },
    Binary {
        op: BinaryOp,
        left: NodeIndex,
        right: NodeIndex,
    },
    /// Function call, builtin call or conversion; the host tells them apart.
    Call {
        callee: NodeIndex,
        #[serde(default)]
        args: Vec<NodeIndex>,
        #[serde(default)]
        has_ellipsis: bool,
    },
    Selector {
        expr: NodeIndex,
        name: String,
    },
    Index {
        base: NodeIndex,
        index: NodeIndex,
    },
    Slice {
        base: NodeIndex,
        #[serde(default)]
        low: NodeIndex,
        #[serde(default)]
        high: NodeIndex,
        #[serde(default)]
        max: NodeIndex,
    },
    Star {
        expr: NodeIndex,
    },
    TypeAssert {
        expr: NodeIndex,
    },
    /// `key: value` inside a composite literal.
    KeyValue {
        key: NodeIndex,
        value: NodeIndex,
    },
    CompositeLit {
        #[serde(default)]
        elements: Vec<NodeIndex>,
    },
    FuncLit {
        body: NodeIndex,
    },
    /// A type written in expression position (`[]int`, `map[K]V`, `chan T`).
    TypeExpr {
        text: String,
    },
    /// Placeholder for syntax the front end could not parse.
    Bad,
}

/// Kind of a basic literal token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicLitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

/// Unary operator tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "^")]
    Complement,
    #[serde(rename = "&")]
    AddressOf,
    #[serde(rename = "<-")]
    Receive,
}

impl UnaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Not => "!",
            UnaryOp::Complement => "^",
            UnaryOp::AddressOf => "&",
            UnaryOp::Receive => "<-",
        }
    }
}

/// Binary operator tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Quo,
    #[serde(rename = "%")]
    Rem,
    #[serde(rename = "&")]
    And,
    #[serde(rename = "|")]
    Or,
    #[serde(rename = "^")]
    Xor,
    #[serde(rename = "<<")]
    Shl,
    #[serde(rename = ">>")]
    Shr,
    #[serde(rename = "&^")]
    AndNot,
    #[serde(rename = "&&")]
    LogicalAnd,
    #[serde(rename = "||")]
    LogicalOr,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
}

impl BinaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Quo => "/",
            BinaryOp::Rem => "%",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::AndNot => "&^",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        }
    }

    /// `==`, `!=`, `<`, `<=`, `>`, `>=`.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge
        )
    }
}

impl NodeKind {
    /// Short name of the variant, for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            NodeKind::SourceFile { .. } => "SourceFile",
            NodeKind::FuncDecl { .. } => "FuncDecl",
            NodeKind::ValueSpec { .. } => "ValueSpec",
            NodeKind::TypeSpec { .. } => "TypeSpec",
            NodeKind::Block { .. } => "Block",
            NodeKind::ExprStmt { .. } => "ExprStmt",
            NodeKind::DeclStmt { .. } => "DeclStmt",
            NodeKind::Assign { .. } => "Assign",
            NodeKind::IncDec { .. } => "IncDec",
            NodeKind::Return { .. } => "Return",
            NodeKind::Send { .. } => "Send",
            NodeKind::If { .. } => "If",
            NodeKind::For { .. } => "For",
            NodeKind::Range { .. } => "Range",
            NodeKind::Switch { .. } => "Switch",
            NodeKind::CaseClause { .. } => "CaseClause",
            NodeKind::Go { .. } => "Go",
            NodeKind::Defer { .. } => "Defer",
            NodeKind::Ident { .. } => "Ident",
            NodeKind::BasicLit { .. } => "BasicLit",
            NodeKind::Paren { .. } => "Paren",
            NodeKind::Unary { .. } => "Unary",
            NodeKind::Binary { .. } => "Binary",
            NodeKind::Call { .. } => "Call",
            NodeKind::Selector { .. } => "Selector",
            NodeKind::Index { .. } => "Index",
            NodeKind::Slice { .. } => "Slice",
            NodeKind::Star { .. } => "Star",
            NodeKind::TypeAssert { .. } => "TypeAssert",
            NodeKind::KeyValue { .. } => "KeyValue",
            NodeKind::CompositeLit { .. } => "CompositeLit",
            NodeKind::FuncLit { .. } => "FuncLit",
            NodeKind::TypeExpr { .. } => "TypeExpr",
            NodeKind::Bad => "Bad",
        }
    }
}
