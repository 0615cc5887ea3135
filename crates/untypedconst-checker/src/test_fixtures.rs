//! Builders for hand-made compilation units in tests.
//!
//! Every expression helper allocates a node with a fresh, non-overlapping
//! span and records the type fact a front end would have produced for it.

use untypedconst_common::Span;
use untypedconst_syntax::{BasicLitKind, BinaryOp, NodeArena, NodeIndex, NodeKind, UnaryOp};

use crate::type_api::TypeTable;
use crate::types::{BasicKind, Callee, ChanDir, ConstDecl, ConstValue, Type, TypeAndValue};
use crate::unit::CompilationUnit;

pub const UNITS_PKG: &str = "example.com/units";
pub const OTHER_PKG: &str = "example.com/other";

pub fn untyped_int() -> Type {
    Type::Basic(BasicKind::UntypedInt)
}

pub fn int() -> Type {
    Type::Basic(BasicKind::Int)
}

/// `type Meters int` in the analyzed package.
pub fn meters() -> Type {
    Type::named(UNITS_PKG, "Meters", int())
}

/// `type level int` in the analyzed package (unexported).
pub fn local_private() -> Type {
    Type::named(UNITS_PKG, "level", int())
}

/// `type Celsius float64` in another package.
pub fn foreign_exported() -> Type {
    Type::named(OTHER_PKG, "Celsius", Type::Basic(BasicKind::Float64))
}

/// `type mode string` in another package (unexported).
pub fn foreign_private() -> Type {
    Type::named(OTHER_PKG, "mode", Type::Basic(BasicKind::String))
}

/// `type Point struct{X, Y int}` in the analyzed package.
pub fn point() -> Type {
    Type::named(
        UNITS_PKG,
        "Point",
        Type::Struct {
            fields: vec![
                crate::types::Field {
                    name: "X".to_string(),
                    ty: int(),
                },
                crate::types::Field {
                    name: "Y".to_string(),
                    ty: int(),
                },
            ],
        },
    )
}

pub struct UnitBuilder {
    pub arena: NodeArena,
    pub types: TypeTable,
    pos: u32,
}

impl UnitBuilder {
    pub fn new() -> Self {
        Self::with_package(UNITS_PKG)
    }

    pub fn with_package(package: &str) -> Self {
        UnitBuilder {
            arena: NodeArena::new(),
            types: TypeTable::new(package),
            pos: 0,
        }
    }

    fn next_span(&mut self, len: usize) -> Span {
        let start = self.pos;
        self.pos += len as u32 + 1;
        Span::new(start, start + len as u32)
    }

    fn span_of(&self, idx: NodeIndex) -> Span {
        self.arena.get(idx).map(|n| n.span).unwrap_or_default()
    }

    fn span_over(&self, nodes: &[NodeIndex]) -> Span {
        nodes
            .iter()
            .map(|idx| self.span_of(*idx))
            .reduce(Span::merge)
            .unwrap_or_default()
    }

    pub fn fact(&mut self, idx: NodeIndex, fact: TypeAndValue) -> NodeIndex {
        self.types.record_type(idx, fact);
        idx
    }

    // -------------------------------------------------------------------------
    // Declarations in scope
    // -------------------------------------------------------------------------

    /// `const name <declared> = value` at package level.
    pub fn declare_const(&mut self, name: &str, declared: Type, value: ConstValue) {
        self.types.record_constant(ConstDecl {
            name: name.to_string(),
            ty: declared,
            value: Some(value),
        });
    }

    // -------------------------------------------------------------------------
    // Expressions
    // -------------------------------------------------------------------------

    /// Integer literal converted to `ty` by its context.
    pub fn int_lit(&mut self, value: i128, ty: Type) -> NodeIndex {
        let raw = value.to_string();
        self.lit(BasicLitKind::Int, &raw, ty, ConstValue::Int(value))
    }

    pub fn lit(&mut self, kind: BasicLitKind, raw: &str, ty: Type, value: ConstValue) -> NodeIndex {
        let span = self.next_span(raw.len());
        let idx = self.arena.add_basic_lit(kind, raw, span);
        self.fact(idx, TypeAndValue::constant(ty, value))
    }

    /// Identifier with no recorded fact (field names, package names).
    pub fn bare_ident(&mut self, name: &str) -> NodeIndex {
        let span = self.next_span(name.len());
        self.arena.add_ident(name, span)
    }

    /// Identifier denoting a constant, converted to `ty` by its context.
    pub fn const_ident(&mut self, name: &str, ty: Type, value: ConstValue) -> NodeIndex {
        let idx = self.bare_ident(name);
        self.fact(idx, TypeAndValue::constant(ty, value))
    }

    /// Identifier denoting a variable of type `ty`.
    pub fn var(&mut self, name: &str, ty: Type) -> NodeIndex {
        let idx = self.bare_ident(name);
        self.fact(idx, TypeAndValue::value(ty))
    }

    /// `(expr)`, carrying the same fact as `expr`.
    pub fn paren(&mut self, expr: NodeIndex) -> NodeIndex {
        let idx = self.arena.add_paren(expr);
        if let Some(fact) = self.types_fact(expr) {
            self.types.record_type(idx, fact);
        }
        idx
    }

    fn types_fact(&self, expr: NodeIndex) -> Option<TypeAndValue> {
        use crate::type_api::TypeQueries;
        self.types.type_and_value(expr).cloned()
    }

    pub fn unary(&mut self, op: UnaryOp, operand: NodeIndex, fact: TypeAndValue) -> NodeIndex {
        let inner = self.span_of(operand);
        let span = Span::new(inner.start.saturating_sub(op.as_str().len() as u32), inner.end);
        let idx = self.arena.add_unary(op, operand, span);
        self.fact(idx, fact)
    }

    pub fn binary(
        &mut self,
        op: BinaryOp,
        left: NodeIndex,
        right: NodeIndex,
        fact: TypeAndValue,
    ) -> NodeIndex {
        let idx = self.arena.add_binary(op, left, right);
        self.fact(idx, fact)
    }

    /// `name(args...)` resolving to `callee`; `fact` is the call's own type fact.
    pub fn call(
        &mut self,
        name: &str,
        callee: Option<Callee>,
        args: Vec<NodeIndex>,
        fact: Option<TypeAndValue>,
    ) -> NodeIndex {
        let func = self.bare_ident(name);
        let mut nodes = vec![func];
        nodes.extend(&args);
        let span = self.span_over(&nodes);
        let idx = self.arena.add_call(func, args, span);
        if let Some(callee) = callee {
            self.types.record_callee(idx, callee);
        }
        if let Some(fact) = fact {
            self.types.record_type(idx, fact);
        }
        idx
    }

    /// `Name(arg)` conversion to `ty`.
    pub fn conversion(&mut self, ty: Type, arg: NodeIndex, value: ConstValue) -> NodeIndex {
        let name = ty.as_named().map_or_else(|| ty.to_string(), |n| n.name.clone());
        self.call(&name, None, vec![arg], Some(TypeAndValue::constant(ty, value)))
    }

    pub fn key_value(&mut self, key: NodeIndex, value: NodeIndex) -> NodeIndex {
        self.arena.add_key_value(key, value)
    }

    pub fn composite(&mut self, ty: Type, elements: Vec<NodeIndex>) -> NodeIndex {
        let span = self.span_over(&elements);
        let idx = self.arena.add(NodeKind::CompositeLit { elements }, span);
        self.fact(idx, TypeAndValue::value(ty))
    }

    pub fn index(&mut self, base: NodeIndex, index: NodeIndex, elem: Type) -> NodeIndex {
        let span = self.span_over(&[base, index]);
        let idx = self.arena.add(NodeKind::Index { base, index }, span);
        self.fact(idx, TypeAndValue::value(elem))
    }

    pub fn selector(&mut self, expr: NodeIndex, name: &str, fact: TypeAndValue) -> NodeIndex {
        let span = self.span_of(expr).merge(self.next_span(name.len()));
        let idx = self.arena.add(
            NodeKind::Selector {
                expr,
                name: name.to_string(),
            },
            span,
        );
        self.fact(idx, fact)
    }

    // -------------------------------------------------------------------------
    // Statements
    // -------------------------------------------------------------------------

    pub fn expr_stmt(&mut self, expr: NodeIndex) -> NodeIndex {
        let span = self.span_of(expr);
        self.arena.add(NodeKind::ExprStmt { expr }, span)
    }

    pub fn ret(&mut self, results: Vec<NodeIndex>) -> NodeIndex {
        let span = self.span_over(&results);
        self.arena.add(NodeKind::Return { results }, span)
    }

    pub fn send(&mut self, chan: NodeIndex, value: NodeIndex) -> NodeIndex {
        let span = self.span_over(&[chan, value]);
        self.arena.add(NodeKind::Send { chan, value }, span)
    }

    pub fn assign(&mut self, lhs: Vec<NodeIndex>, rhs: Vec<NodeIndex>) -> NodeIndex {
        let mut nodes = lhs.clone();
        nodes.extend(&rhs);
        let span = self.span_over(&nodes);
        self.arena.add(NodeKind::Assign { lhs, rhs }, span)
    }

    pub fn func(&mut self, name: &str, stmts: Vec<NodeIndex>) -> NodeIndex {
        let span = self.span_over(&stmts);
        let body = self.arena.add(NodeKind::Block { stmts }, span);
        self.arena.add(
            NodeKind::FuncDecl {
                name: name.to_string(),
                body,
            },
            span,
        )
    }

    /// Finish with a source file holding `decls`.
    pub fn finish(mut self, decls: Vec<NodeIndex>) -> CompilationUnit {
        use crate::type_api::TypeQueries;
        let span = Span::new(0, self.pos);
        let package = self.types.package_path().to_string();
        let root = self.arena.add(NodeKind::SourceFile { package, decls }, span);
        CompilationUnit {
            file: "units.go".to_string(),
            source: None,
            arena: self.arena,
            root,
            types: self.types,
        }
    }

    /// Wrap `stmts` in `func f()` and finish.
    pub fn finish_stmts(mut self, stmts: Vec<NodeIndex>) -> CompilationUnit {
        let func = self.func("f", stmts);
        self.finish(vec![func])
    }
}

/// `chan Meters`
pub fn chan_of(elem: Type) -> Type {
    Type::chan(ChanDir::Both, elem)
}
