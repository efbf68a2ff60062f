// Copyright (C) Brian G. Milnes 2025

//! Nitpick - a lint that catches empty slice declarations
//!
//! Detects `name := []T{}` in an externally parsed syntax tree and suggests
//! the zero-value form `var name []T`, as a diagnostic carrying an exact
//! text edit. Parsing is the front end's job; trees arrive as JSON source
//! units.

pub mod analyzer;
pub mod args;
pub mod ast;
pub mod diagnostics;
pub mod edits;
pub mod loader;
pub mod logging;
pub mod matcher;
pub mod visitor;

use anyhow::Result;

// Re-export commonly used items
pub use analyzer::analyzer::{empty_slice_decl, Analyzer};
pub use args::args::{find_tree_files, Args, Format};
pub use ast::ast::{AssignStmt, Block, CompositeLit, Expr, File, FuncDecl, Ident, Span, Stmt, TypeExpr, VarDecl};
pub use diagnostics::diagnostics::{build_diagnostic, Diagnostic, SuggestedFix, TextEdit, FIX_LABEL, MESSAGE};
pub use edits::edits::{apply_edits, line_col};
pub use loader::loader::{load_unit, SourceUnit};
pub use matcher::matcher::{match_assignment, SliceMatch};
pub use visitor::visitor::{check_file, for_each_assignment, CheckSummary, ReportSink};

/// Check one source unit and return its diagnostics plus the run summary.
pub fn review_unit(unit: &SourceUnit) -> Result<(Vec<Diagnostic>, CheckSummary)> {
    let mut diagnostics = Vec::new();
    let summary = check_file(&unit.file, &mut diagnostics)?;
    Ok((diagnostics, summary))
}

/// Apply every suggested fix for one source unit to its source text.
///
/// Returns the rewritten source and the number of edits applied. The caller
/// decides whether to persist it.
pub fn fix_unit(unit: &SourceUnit) -> Result<(String, usize)> {
    let (diagnostics, _) = review_unit(unit)?;

    let edits: Vec<TextEdit> = diagnostics
        .iter()
        .flat_map(|d| d.suggested_fixes.iter())
        .flat_map(|f| f.edits.iter().cloned())
        .collect();

    let fixed = apply_edits(&unit.source, &edits)?;
    Ok((fixed, edits.len()))
}
