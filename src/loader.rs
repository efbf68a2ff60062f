// Copyright (C) Brian G. Milnes 2025

//! Source unit loading
//!
//! An external front end parses source files and writes one JSON document
//! per file: the original source text paired with its syntax tree. Loading
//! that document is the only way trees enter this tool; nitpick never
//! parses source itself.

pub mod loader {
    use anyhow::{Context, Result};
    use serde::{Deserialize, Serialize};
    use std::path::Path;

    use crate::ast::ast::File;

    /// One parsed source file as produced by the front end.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct SourceUnit {
        /// Path of the original source file the edits apply to.
        pub path: String,
        /// The source text the tree's spans index into.
        pub source: String,
        /// The parsed tree.
        pub file: File,
    }

    /// Load a source unit from a JSON tree document.
    pub fn load_unit(path: &Path) -> Result<SourceUnit> {
        let json = std::fs::read_to_string(path)
            .context(format!("Failed to read tree document: {}", path.display()))?;
        let unit: SourceUnit = serde_json::from_str(&json)
            .context(format!("Invalid tree document: {}", path.display()))?;
        Ok(unit)
    }
}
