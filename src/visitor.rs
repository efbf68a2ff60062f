// Copyright (C) Brian G. Milnes 2025

//! Traversal driver for the empty slice lint
//!
//! Enumerates assignment statements in document order and pushes each one
//! through the matcher; matches become diagnostics on the caller's sink.
//! The sink is a trait so tests can collect into a plain `Vec` without any
//! harness around them.

pub mod visitor {
    use anyhow::Result;

    use crate::ast::ast::{AssignStmt, File, Stmt};
    use crate::diagnostics::diagnostics::{build_diagnostic, Diagnostic};
    use crate::matcher::matcher::match_assignment;

    /// Where diagnostics go.
    pub trait ReportSink {
        fn report(&mut self, diagnostic: Diagnostic);
    }

    impl ReportSink for Vec<Diagnostic> {
        fn report(&mut self, diagnostic: Diagnostic) {
            self.push(diagnostic);
        }
    }

    /// Counts and defects from checking one file.
    #[derive(Debug, Default)]
    pub struct CheckSummary {
        /// Assignment statements enumerated.
        pub assignments: usize,
        /// Diagnostics handed to the sink.
        pub reported: usize,
        /// Contract violations, one message per aborted node. A defect
        /// stops only its own node; traversal continues.
        pub defects: Vec<String>,
    }

    /// Invoke `f` on every assignment statement in the file, preorder,
    /// recursing through nested blocks.
    pub fn for_each_assignment<F>(file: &File, mut f: F)
    where
        F: FnMut(&AssignStmt),
    {
        fn walk_stmts<F: FnMut(&AssignStmt)>(stmts: &[Stmt], f: &mut F) {
            for stmt in stmts {
                match stmt {
                    Stmt::Assign(assign) => f(assign),
                    Stmt::Block(block) => walk_stmts(&block.stmts, f),
                    Stmt::Var(_) | Stmt::Other { .. } => {}
                }
            }
        }

        for func in &file.funcs {
            walk_stmts(&func.body.stmts, &mut f);
        }
    }

    /// Run the lint over one file, reporting matches to `sink`.
    ///
    /// Each assignment is classified independently; no state is shared
    /// between nodes. A matcher error is recorded as a defect attributed to
    /// the file and the remaining nodes are still checked.
    pub fn check_file(file: &File, sink: &mut dyn ReportSink) -> Result<CheckSummary> {
        let mut summary = CheckSummary::default();

        for_each_assignment(file, |assign| {
            summary.assignments += 1;
            match match_assignment(assign) {
                Ok(Some(matched)) => {
                    sink.report(build_diagnostic(&matched));
                    summary.reported += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    summary.defects.push(format!("{}: internal error: {e:#}", file.name));
                }
            }
        });

        Ok(summary)
    }
}
