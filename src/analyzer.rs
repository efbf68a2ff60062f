// Copyright (C) Brian G. Milnes 2025

//! Analyzer descriptor
//!
//! A plain value bundling the lint's name, doc line, and run function. The
//! harness that wants to run the analysis takes one of these explicitly;
//! there is no process-wide registry.

pub mod analyzer {
    use anyhow::Result;

    use crate::ast::ast::File;
    use crate::visitor::visitor::{check_file, CheckSummary, ReportSink};

    /// Description of one analysis, passed by value to whatever runs it.
    pub struct Analyzer {
        pub name: &'static str,
        pub doc: &'static str,
        pub run: fn(&File, &mut dyn ReportSink) -> Result<CheckSummary>,
    }

    /// The empty-slice-declaration analyzer.
    pub fn empty_slice_decl() -> Analyzer {
        Analyzer {
            name: "nitpick",
            doc: "catches empty slice declarations before your reviewer does",
            run: check_file,
        }
    }
}
