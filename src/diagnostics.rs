// Copyright (C) Brian G. Milnes 2025

//! Diagnostic and fix construction
//!
//! Turns a matcher result into the reportable record handed to the sink: a
//! message, a span, and one suggested fix whose single text edit replaces
//! the whole assignment with the zero-value declaration form.

pub mod diagnostics {
    use serde::{Deserialize, Serialize};

    use crate::ast::ast::Span;
    use crate::matcher::matcher::SliceMatch;

    /// Message attached to every finding.
    pub const MESSAGE: &str = "incorrect empty slice declaration";

    /// Label on the suggested fix.
    pub const FIX_LABEL: &str = "use var";

    /// A replacement instruction: substitute the source bytes in `span`
    /// with `new_text`.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct TextEdit {
        pub span: Span,
        pub new_text: String,
    }

    /// A labeled remediation made of one or more text edits.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct SuggestedFix {
        pub message: String,
        pub edits: Vec<TextEdit>,
    }

    /// A reported finding tied to a source location.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Diagnostic {
        pub message: String,
        pub span: Span,
        pub suggested_fixes: Vec<SuggestedFix>,
    }

    impl std::fmt::Display for Diagnostic {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}..{}: {}", self.span.start, self.span.end, self.message)
        }
    }

    /// Build the diagnostic for one match.
    ///
    /// Deterministic: equal matches produce byte-identical diagnostics. The
    /// edit covers the entire assignment statement and the replacement is
    /// the zero-value declaration for the same name and element type.
    pub fn build_diagnostic(matched: &SliceMatch) -> Diagnostic {
        Diagnostic {
            message: MESSAGE.to_string(),
            span: matched.span,
            suggested_fixes: vec![SuggestedFix {
                message: FIX_LABEL.to_string(),
                edits: vec![TextEdit {
                    span: matched.span,
                    new_text: format!("var {} []{}", matched.target, matched.elem_type),
                }],
            }],
        }
    }
}
