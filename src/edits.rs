// Copyright (C) Brian G. Milnes 2025

//! Text edit application
//!
//! Applying fixes to source text is the outer tooling's job in normal runs;
//! this module is the reference implementation the `--fix` mode and the
//! round-trip tests use.

pub mod edits {
    use anyhow::{bail, Result};

    use crate::diagnostics::diagnostics::TextEdit;

    /// Apply a set of edits to `source`, returning the rewritten text.
    ///
    /// Edits are applied right to left so earlier spans stay valid. Edits
    /// that run past the end of the source or overlap each other are
    /// rejected.
    pub fn apply_edits(source: &str, edits: &[TextEdit]) -> Result<String> {
        let mut ordered: Vec<&TextEdit> = edits.iter().collect();
        ordered.sort_by_key(|edit| (edit.span.start, edit.span.end));

        for edit in &ordered {
            if edit.span.start > edit.span.end {
                bail!("edit span {}..{} is inverted", edit.span.start, edit.span.end);
            }
            if edit.span.end as usize > source.len() {
                bail!(
                    "edit span {}..{} runs past end of source (len {})",
                    edit.span.start,
                    edit.span.end,
                    source.len()
                );
            }
            if !source.is_char_boundary(edit.span.start as usize)
                || !source.is_char_boundary(edit.span.end as usize)
            {
                bail!(
                    "edit span {}..{} splits a multibyte character",
                    edit.span.start,
                    edit.span.end
                );
            }
        }
        for pair in ordered.windows(2) {
            if pair[1].span.start < pair[0].span.end {
                bail!(
                    "overlapping edits: {}..{} and {}..{}",
                    pair[0].span.start,
                    pair[0].span.end,
                    pair[1].span.start,
                    pair[1].span.end
                );
            }
        }

        let mut result = source.to_string();
        for edit in ordered.iter().rev() {
            result.replace_range(edit.span.start as usize..edit.span.end as usize, &edit.new_text);
        }

        Ok(result)
    }

    /// 1-based line and column of a byte offset in `source`.
    ///
    /// Offsets past the end of the source, or inside a multibyte
    /// character, are clamped back to the nearest valid position.
    pub fn line_col(source: &str, offset: u32) -> (usize, usize) {
        let mut offset = (offset as usize).min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let col = offset - before.rfind('\n').map_or(0, |i| i + 1) + 1;
        (line, col)
    }
}
