// Copyright (C) Brian G. Milnes 2025

//! Pattern matcher for empty slice declarations
//!
//! Classifies a single assignment statement as `name := []T{}` or not.
//! Non-matches are the normal, silent outcome; once the shape filters have
//! all passed, a target or element type that is not a plain identifier is a
//! contract violation and comes back as an error.

pub mod matcher {
    use anyhow::{bail, Result};

    use crate::ast::ast::{AssignStmt, Expr, Span, TypeExpr};

    /// The two names and the span needed to build the diagnostic and fix.
    #[derive(Debug, Clone, PartialEq)]
    pub struct SliceMatch {
        /// The assignment's target variable name.
        pub target: String,
        /// The slice's element type name.
        pub elem_type: String,
        /// Span of the whole assignment statement.
        pub span: Span,
    }

    /// Decide whether one assignment is an empty slice literal declaration.
    ///
    /// Filters short-circuit in order; the first failure means "no match",
    /// never an error. Multi-target and multi-value assignments are outside
    /// the matcher's domain and also return `Ok(None)`.
    pub fn match_assignment(assign: &AssignStmt) -> Result<Option<SliceMatch>> {
        // Only the single-target, single-value form is in scope.
        if assign.lhs.len() != 1 || assign.rhs.len() != 1 {
            return Ok(None);
        }

        // The RHS must be a composite literal.
        let Expr::CompositeLit(lit) = &assign.rhs[0] else {
            return Ok(None);
        };

        // The literal must have been written with empty braces: an element
        // list that is present, even with zero entries, does not match.
        if lit.elems.is_some() {
            return Ok(None);
        }

        // The literal's type must be an unbounded slice. Bounded arrays,
        // maps, and named aliases do not match.
        let TypeExpr::Slice { elem, .. } = &lit.ty else {
            return Ok(None);
        };

        // All filters passed. From here on, a shape the filters should have
        // ruled out is a defect in the tree we were handed, not a non-match.
        let target = match &assign.lhs[0] {
            Expr::Ident(ident) => ident.name.clone(),
            other => bail!(
                "empty slice literal at {}..{} has a non-identifier assignment target at {}..{}",
                assign.span.start,
                assign.span.end,
                other.span().start,
                other.span().end,
            ),
        };

        let elem_type = match elem.as_ref() {
            TypeExpr::Named(ident) => ident.name.clone(),
            other => bail!(
                "empty slice literal at {}..{} has a non-identifier element type at {}..{}",
                assign.span.start,
                assign.span.end,
                other.span().start,
                other.span().end,
            ),
        };

        Ok(Some(SliceMatch {
            target,
            elem_type,
            span: assign.span,
        }))
    }
}
