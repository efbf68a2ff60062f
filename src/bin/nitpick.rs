// Copyright (C) Brian G. Milnes 2025

//! Nitpick CLI
//!
//! Checks tree documents for empty slice declarations. With --fix, applies
//! the suggested rewrites to the original source files.

use anyhow::Result;
use clap::Parser;
use nitpick::logging::logging::RunLogger;
use nitpick::{find_tree_files, fix_unit, line_col, load_unit, review_unit, Args, Diagnostic, Format};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

/// Everything worth reporting about one tree document.
struct FileOutcome {
    tree_file: PathBuf,
    source_path: String,
    diagnostics: Vec<(usize, usize, Diagnostic)>,
    defects: Vec<String>,
    fixed: Option<(String, usize)>,
    error: Option<String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: &'a str,
    diagnostics: &'a [Diagnostic],
}

fn check_one(tree_file: &PathBuf, fix: bool) -> FileOutcome {
    let mut outcome = FileOutcome {
        tree_file: tree_file.clone(),
        source_path: String::new(),
        diagnostics: Vec::new(),
        defects: Vec::new(),
        fixed: None,
        error: None,
    };

    let unit = match load_unit(tree_file) {
        Ok(unit) => unit,
        Err(e) => {
            outcome.error = Some(format!("{e:#}"));
            return outcome;
        }
    };
    outcome.source_path = unit.path.clone();

    match review_unit(&unit) {
        Ok((diagnostics, summary)) => {
            outcome.defects = summary.defects;
            outcome.diagnostics = diagnostics
                .into_iter()
                .map(|d| {
                    let (line, col) = line_col(&unit.source, d.span.start);
                    (line, col, d)
                })
                .collect();
        }
        Err(e) => {
            outcome.error = Some(format!("{e:#}"));
            return outcome;
        }
    }

    if fix && !outcome.diagnostics.is_empty() {
        match fix_unit(&unit) {
            Ok(done) => outcome.fixed = Some(done),
            Err(e) => outcome.error = Some(format!("{e:#}")),
        }
    }

    outcome
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger = if args.log {
        RunLogger::new("nitpick")
    } else {
        RunLogger::disabled()
    };

    let files = find_tree_files(&args.paths);
    if files.is_empty() {
        logger.log("No tree documents found");
        return Ok(());
    }

    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|file| check_one(file, args.fix))
        .collect();

    let mut total_diagnostics = 0;
    let mut total_fixed = 0;

    for outcome in &outcomes {
        if let Some(ref e) = outcome.error {
            eprintln!("Warning: Failed to check {}: {e}", outcome.tree_file.display());
            continue;
        }
        for defect in &outcome.defects {
            eprintln!("{defect}");
        }

        total_diagnostics += outcome.diagnostics.len();

        match args.format {
            Format::Text => {
                for (line, col, diagnostic) in &outcome.diagnostics {
                    logger.log(&format!(
                        "{}:{line}:{col}: {}",
                        outcome.source_path, diagnostic.message
                    ));
                }
            }
            Format::Json => {
                let diagnostics: Vec<Diagnostic> = outcome
                    .diagnostics
                    .iter()
                    .map(|(_, _, d)| d.clone())
                    .collect();
                let report = JsonReport {
                    path: &outcome.source_path,
                    diagnostics: &diagnostics,
                };
                logger.log(&serde_json::to_string_pretty(&report)?);
            }
        }

        if let Some((ref fixed_source, edits)) = outcome.fixed {
            std::fs::write(&outcome.source_path, fixed_source)?;
            total_fixed += edits;
            logger.log(&format!("Fixed {} ({edits} edit(s))", outcome.source_path));
        }
    }

    let summary = if args.fix {
        format!(
            "Summary: {} files checked, {} diagnostics, {} fixes applied",
            files.len(),
            total_diagnostics,
            total_fixed
        )
    } else {
        format!(
            "Summary: {} files checked, {} diagnostics",
            files.len(),
            total_diagnostics
        )
    };
    logger.finalize(&summary);

    if total_diagnostics > 0 && !args.fix {
        std::process::exit(1);
    }
    Ok(())
}
