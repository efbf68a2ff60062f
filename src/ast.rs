// Copyright (C) Brian G. Milnes 2025

//! Syntax tree data model for the analyzed language
//!
//! These types describe the already-parsed tree an external front end hands
//! us; nitpick only reads them. The serde form of `File` (wrapped in a
//! `SourceUnit`, see `loader`) is the on-disk interchange format.
//!
//! Node kinds are closed enums with an explicit `Other` arm, so every
//! inspection is an exhaustive match with a default "not interesting" case.

pub mod ast {
    use serde::{Deserialize, Serialize};

    /// A byte range `[start, end)` into the unit's source text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct Span {
        pub start: u32,
        pub end: u32,
    }

    impl Span {
        pub fn new(start: u32, end: u32) -> Self {
            Span { start, end }
        }

        pub fn len(&self) -> u32 {
            self.end.saturating_sub(self.start)
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    /// A name token.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Ident {
        pub name: String,
        pub span: Span,
    }

    /// Expressions, reduced to the shapes the lint distinguishes.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub enum Expr {
        Ident(Ident),
        BasicLit { text: String, span: Span },
        CompositeLit(CompositeLit),
        Call { func: Box<Expr>, args: Vec<Expr>, span: Span },
        Other { span: Span },
    }

    impl Expr {
        pub fn span(&self) -> Span {
            match self {
                Expr::Ident(ident) => ident.span,
                Expr::BasicLit { span, .. } => *span,
                Expr::CompositeLit(lit) => lit.span,
                Expr::Call { span, .. } => *span,
                Expr::Other { span } => *span,
            }
        }
    }

    /// A literal construction of an aggregate value: `[]T{...}`, `map[K]V{...}`.
    ///
    /// `elems: None` records that the literal was written with empty braces.
    /// A `Some` holding zero expressions is the distinct present-but-empty
    /// representation and is not the same shape.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct CompositeLit {
        pub ty: TypeExpr,
        pub elems: Option<Vec<Expr>>,
        pub span: Span,
    }

    /// Type annotations as they appear on composite literals.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub enum TypeExpr {
        /// Unbounded sequence type `[]T`.
        Slice { elem: Box<TypeExpr>, span: Span },
        /// Bounded sequence type `[N]T`.
        Array { len: Box<Expr>, elem: Box<TypeExpr>, span: Span },
        /// Mapping type `map[K]V`.
        Map { key: Box<TypeExpr>, value: Box<TypeExpr>, span: Span },
        /// A plain type name.
        Named(Ident),
        Other { span: Span },
    }

    impl TypeExpr {
        pub fn span(&self) -> Span {
            match self {
                TypeExpr::Slice { span, .. } => *span,
                TypeExpr::Array { span, .. } => *span,
                TypeExpr::Map { span, .. } => *span,
                TypeExpr::Named(ident) => ident.span,
                TypeExpr::Other { span } => *span,
            }
        }
    }

    /// An assignment statement `lhs, ... := rhs, ...`.
    ///
    /// The grammar allows multiple targets and values; the lint only ever
    /// matches the single-target, single-value form.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct AssignStmt {
        pub lhs: Vec<Expr>,
        pub rhs: Vec<Expr>,
        pub span: Span,
    }

    /// A zero-value or initialized declaration `var names [ty] [= values]`.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct VarDecl {
        pub names: Vec<Ident>,
        pub ty: Option<TypeExpr>,
        pub values: Vec<Expr>,
        pub span: Span,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub enum Stmt {
        Assign(AssignStmt),
        Var(VarDecl),
        Block(Block),
        Other { span: Span },
    }

    impl Stmt {
        pub fn span(&self) -> Span {
            match self {
                Stmt::Assign(assign) => assign.span,
                Stmt::Var(decl) => decl.span,
                Stmt::Block(block) => block.span,
                Stmt::Other { span } => *span,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Block {
        pub stmts: Vec<Stmt>,
        pub span: Span,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct FuncDecl {
        pub name: Ident,
        pub body: Block,
        pub span: Span,
    }

    /// One parsed source file.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct File {
        pub name: String,
        pub funcs: Vec<FuncDecl>,
    }
}
