use crate::{BasicLitKind, BinaryOp, NodeArena, NodeIndex, NodeKind};
use untypedconst_common::Span;

fn kinds_in_order(arena: &NodeArena, root: NodeIndex) -> Vec<&'static str> {
    let mut out = Vec::new();
    arena.for_each_preorder(root, |_, node| out.push(node.kind.name()));
    out
}

#[test]
fn parents_before_children_in_source_order() {
    let mut arena = NodeArena::new();
    let callee = arena.add_ident("F", Span::new(0, 1));
    let one = arena.add_basic_lit(BasicLitKind::Int, "1", Span::new(2, 3));
    let two = arena.add_basic_lit(BasicLitKind::Int, "2", Span::new(6, 7));
    let sum = arena.add_binary(BinaryOp::Add, one, two);
    let call = arena.add_call(callee, vec![sum], Span::new(0, 8));
    let stmt = arena.add(NodeKind::ExprStmt { expr: call }, Span::new(0, 8));
    let block = arena.add(NodeKind::Block { stmts: vec![stmt] }, Span::new(0, 8));

    assert_eq!(
        kinds_in_order(&arena, block),
        vec!["Block", "ExprStmt", "Call", "Ident", "Binary", "BasicLit", "BasicLit"]
    );
}

#[test]
fn absent_children_are_skipped() {
    let mut arena = NodeArena::new();
    let cond = arena.add_ident("ok", Span::new(3, 5));
    let then = arena.add(NodeKind::Block { stmts: vec![] }, Span::new(6, 8));
    let stmt = arena.add(
        NodeKind::If {
            init: NodeIndex::NONE,
            cond,
            then,
            else_branch: NodeIndex::NONE,
        },
        Span::new(0, 8),
    );

    assert_eq!(kinds_in_order(&arena, stmt), vec!["If", "Ident", "Block"]);
}

#[test]
fn shared_nodes_are_visited_once() {
    let mut arena = NodeArena::new();
    let lit = arena.add_basic_lit(BasicLitKind::Int, "5", Span::new(0, 1));
    let ret = arena.add(
        NodeKind::Return {
            results: vec![lit, lit],
        },
        Span::new(0, 1),
    );

    let mut visited = Vec::new();
    arena.for_each_preorder(ret, |idx, _| visited.push(idx));
    assert_eq!(visited, vec![ret, lit]);
}

#[test]
fn dangling_indices_do_not_panic() {
    let mut arena = NodeArena::new();
    let stmt = arena.add(
        NodeKind::ExprStmt {
            expr: NodeIndex(42),
        },
        Span::new(0, 1),
    );
    assert_eq!(kinds_in_order(&arena, stmt), vec!["ExprStmt"]);
}

#[test]
fn skip_parenthesized_expression_unwraps_nesting() {
    let mut arena = NodeArena::new();
    let lit = arena.add_basic_lit(BasicLitKind::Int, "3", Span::new(2, 3));
    let inner = arena.add_paren(lit);
    let outer = arena.add_paren(inner);

    assert_eq!(arena.skip_parenthesized_expression(outer), lit);
    assert_eq!(arena.skip_parenthesized_expression(lit), lit);
    assert_eq!(arena.get(outer).map(|n| n.span), Some(Span::new(0, 5)));
}

#[test]
fn comparison_operators() {
    let comparisons = [
        BinaryOp::Eq,
        BinaryOp::Ne,
        BinaryOp::Lt,
        BinaryOp::Le,
        BinaryOp::Gt,
        BinaryOp::Ge,
    ];
    for op in comparisons {
        assert!(op.is_comparison(), "{} should be a comparison", op.as_str());
    }
    for op in [BinaryOp::Add, BinaryOp::Shl, BinaryOp::LogicalAnd, BinaryOp::AndNot] {
        assert!(!op.is_comparison(), "{} is not a comparison", op.as_str());
    }
}

#[test]
fn deserializes_go_token_spelling() {
    let json = r#"[
        {"kind": {"type": "BasicLit", "kind": "Int", "raw": "1"}, "span": {"start": 0, "end": 1}},
        {"kind": {"type": "BasicLit", "kind": "Int", "raw": "2"}, "span": {"start": 5, "end": 6}},
        {"kind": {"type": "Binary", "op": "&^", "left": 0, "right": 1}, "span": {"start": 0, "end": 6}},
        {"kind": {"type": "If", "cond": 2, "then": 0}, "span": {"start": 0, "end": 6}}
    ]"#;
    let arena: NodeArena = serde_json::from_str(json).unwrap();
    assert_eq!(arena.len(), 4);

    let binary = arena.get(NodeIndex(2)).unwrap();
    assert!(matches!(
        binary.kind,
        NodeKind::Binary {
            op: BinaryOp::AndNot,
            ..
        }
    ));

    let NodeKind::If {
        init, else_branch, ..
    } = &arena.get(NodeIndex(3)).unwrap().kind
    else {
        panic!("expected If");
    };
    assert!(init.is_none());
    assert!(else_branch.is_none());
}
