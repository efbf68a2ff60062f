// Copyright (C) Brian G. Milnes 2025

//! Command line arguments and tree-file discovery

pub mod args {
    use clap::Parser;
    use std::path::PathBuf;
    use walkdir::WalkDir;

    /// Output format for diagnostics.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
    pub enum Format {
        Text,
        Json,
    }

    #[derive(Debug, Parser)]
    #[command(name = "nitpick", about = "Catches empty slice declarations before your reviewer does")]
    pub struct Args {
        /// Tree documents (*.ast.json) or directories to search for them
        #[arg(required = true)]
        pub paths: Vec<PathBuf>,

        /// Apply suggested fixes to the original source files
        #[arg(long)]
        pub fix: bool,

        /// Diagnostic output format
        #[arg(long, value_enum, default_value = "text")]
        pub format: Format,

        /// Write a per-run log file under logs/
        #[arg(long)]
        pub log: bool,
    }

    /// Expand the argument paths to the list of tree documents to check.
    ///
    /// Files are taken as given; directories are searched recursively for
    /// `*.ast.json`. Order is deterministic.
    pub fn find_tree_files(paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in paths {
            if path.is_dir() {
                for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
                    let p = entry.path();
                    if p.is_file() && p.to_string_lossy().ends_with(".ast.json") {
                        files.push(p.to_path_buf());
                    }
                }
            } else {
                files.push(path.clone());
            }
        }

        files.sort();
        files.dedup();
        files
    }
}
