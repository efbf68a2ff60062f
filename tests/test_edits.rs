// Copyright (C) Brian G. Milnes 2025

//! Tests for edit application and the fix round trip

mod common;

use common::*;
use nitpick::{
    apply_edits, build_diagnostic, check_file, fix_unit, line_col, match_assignment, Diagnostic,
    SourceUnit, Span, Stmt, TextEdit,
};

#[test]
fn test_apply_single_edit() {
    let source = "incorrect := []int{}";
    let assign = empty_slice_assign("incorrect");
    let diagnostic = build_diagnostic(&match_assignment(&assign).unwrap().unwrap());

    let fixed = apply_edits(source, &diagnostic.suggested_fixes[0].edits).unwrap();
    assert_eq!(fixed, "var incorrect []int");
}

#[test]
fn test_fix_does_not_retrigger() {
    // The rewritten statement is a var declaration, which the lint never
    // matches again.
    let file = file_of(vec![var_int_slice("incorrect", 0)]);

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let summary = check_file(&file, &mut diagnostics).unwrap();
    assert_eq!(summary.reported, 0);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_apply_multiple_edits() {
    let source = "a := []int{}\nb := []int{}";
    let edits = vec![
        TextEdit {
            span: Span::new(0, 12),
            new_text: "var a []int".to_string(),
        },
        TextEdit {
            span: Span::new(13, 25),
            new_text: "var b []int".to_string(),
        },
    ];

    let fixed = apply_edits(source, &edits).unwrap();
    assert_eq!(fixed, "var a []int\nvar b []int");
}

#[test]
fn test_edit_past_end_of_source_is_rejected() {
    let edits = vec![TextEdit {
        span: Span::new(0, 99),
        new_text: String::new(),
    }];

    let err = apply_edits("short", &edits).unwrap_err();
    assert!(err.to_string().contains("past end of source"));
}

#[test]
fn test_overlapping_edits_are_rejected() {
    let edits = vec![
        TextEdit {
            span: Span::new(0, 6),
            new_text: "x".to_string(),
        },
        TextEdit {
            span: Span::new(4, 10),
            new_text: "y".to_string(),
        },
    ];

    let err = apply_edits("0123456789", &edits).unwrap_err();
    assert!(err.to_string().contains("overlapping edits"));
}

#[test]
fn test_edit_splitting_a_multibyte_character_is_rejected() {
    // "é" is two bytes, so a span ending at 1 falls inside it. This must
    // come back as an error, not a panic.
    let edits = vec![TextEdit {
        span: Span::new(0, 1),
        new_text: "x".to_string(),
    }];

    let err = apply_edits("é := []int{}", &edits).unwrap_err();
    assert!(err.to_string().contains("splits a multibyte character"));
}

#[test]
fn test_line_col_clamps_inside_multibyte_character() {
    let source = "é := []int{}";
    // Offset 1 is inside the two-byte "é"; clamp back to its start.
    assert_eq!(line_col(source, 1), (1, 1));
    // Past the end clamps to the end of the source (13 bytes, so column 14).
    assert_eq!(line_col(source, 99), (1, 14));
}

#[test]
fn test_inverted_edit_span_is_rejected() {
    let edits = vec![TextEdit {
        span: Span { start: 5, end: 2 },
        new_text: String::new(),
    }];

    assert!(apply_edits("0123456789", &edits).is_err());
}

#[test]
fn test_fix_unit_rewrites_the_source() {
    let unit = SourceUnit {
        path: "a.go".to_string(),
        source: "a := []int{}\nb := []int{}".to_string(),
        file: file_of(vec![
            Stmt::Assign(empty_slice_assign_at("a", 0)),
            Stmt::Assign(empty_slice_assign_at("b", 13)),
        ]),
    };

    let (fixed, edits) = fix_unit(&unit).unwrap();
    assert_eq!(edits, 2);
    assert_eq!(fixed, "var a []int\nvar b []int");
}

#[test]
fn test_line_col() {
    let source = "a := 1\nincorrect := []int{}\n";
    assert_eq!(line_col(source, 0), (1, 1));
    assert_eq!(line_col(source, 7), (2, 1));
    assert_eq!(line_col(source, 20), (2, 14));
}
