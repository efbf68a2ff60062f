// Copyright (C) Brian G. Milnes 2025

//! Common test utilities: hand-built syntax trees
//!
//! Spans are laid out as if each statement were written at the offsets the
//! helper computes, so edit application against a matching source string
//! lines up exactly.

#![allow(dead_code)]

use nitpick::{
    AssignStmt, Block, CompositeLit, Expr, File, FuncDecl, Ident, Span, Stmt, TypeExpr, VarDecl,
};

pub fn sp(start: u32, end: u32) -> Span {
    Span::new(start, end)
}

/// An identifier starting at `start`, spanning its own length.
pub fn ident(name: &str, start: u32) -> Ident {
    Ident {
        name: name.to_string(),
        span: sp(start, start + name.len() as u32),
    }
}

pub fn named_type(name: &str, start: u32) -> TypeExpr {
    TypeExpr::Named(ident(name, start))
}

/// `[]int` starting at `start`.
pub fn int_slice_type(start: u32) -> TypeExpr {
    TypeExpr::Slice {
        elem: Box::new(named_type("int", start + 2)),
        span: sp(start, start + 5),
    }
}

/// A `[]int{...}` literal starting at `start`. `elems: None` is the
/// empty-braces form.
pub fn int_slice_lit(start: u32, elems: Option<Vec<Expr>>) -> Expr {
    // []int{} is 7 bytes; each present element would widen it, but the
    // matcher never reads the literal's own span, so 7 is fine for tests.
    Expr::CompositeLit(CompositeLit {
        ty: int_slice_type(start),
        elems,
        span: sp(start, start + 7),
    })
}

/// `name := []int{}` with spans starting at `offset`.
pub fn empty_slice_assign_at(name: &str, offset: u32) -> AssignStmt {
    let n = name.len() as u32;
    let lit_start = offset + n + 4; // "name := "
    AssignStmt {
        lhs: vec![Expr::Ident(ident(name, offset))],
        rhs: vec![Expr::CompositeLit(CompositeLit {
            ty: TypeExpr::Slice {
                elem: Box::new(named_type("int", lit_start + 2)),
                span: sp(lit_start, lit_start + 5),
            },
            elems: None,
            span: sp(lit_start, lit_start + 7),
        })],
        span: sp(offset, lit_start + 7),
    }
}

/// `name := []int{}` with spans starting at zero.
pub fn empty_slice_assign(name: &str) -> AssignStmt {
    empty_slice_assign_at(name, 0)
}

/// `var name []int` as a statement.
pub fn var_int_slice(name: &str, offset: u32) -> Stmt {
    let n = name.len() as u32;
    Stmt::Var(VarDecl {
        names: vec![ident(name, offset + 4)],
        ty: Some(int_slice_type(offset + 4 + n + 1)),
        values: vec![],
        span: sp(offset, offset + 4 + n + 1 + 5),
    })
}

/// Wrap statements in a single `main` function.
pub fn file_of(stmts: Vec<Stmt>) -> File {
    let end = stmts.last().map(|s| s.span().end).unwrap_or(0);
    File {
        name: "a.go".to_string(),
        funcs: vec![FuncDecl {
            name: ident("main", 0),
            body: Block {
                stmts,
                span: sp(0, end),
            },
            span: sp(0, end),
        }],
    }
}
