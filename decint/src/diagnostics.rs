//! User-facing decint diagnostics.
//!
//! The diagnostics module renders [libdecint errors][libdecint::ArithmeticError] as annotated
//! snippets over the line of operands they were raised for.

use libdecint::common::Span;
use libdecint::{ArithmeticError, LiteralIssue};

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};

/// A failure of a decint run, located in the operand line.
pub struct Diagnostic {
    pub error: ArithmeticError,
    pub span: Span,
}

pub fn sanitize_source_for_diagnostics(source: &str) -> String {
    let source = source.to_owned();
    source + " " // an empty operand has an empty span, which is widened onto this space
}

pub fn emit_decint_diagnostics(source: &str, diagnostics: &[Diagnostic], color: bool) -> String {
    if diagnostics.is_empty() {
        return String::new();
    }

    let last_i = diagnostics.len() - 1;
    let mut emitted_diagnostics = String::new();

    for (i, diagnostic) in diagnostics.iter().enumerate() {
        let label = annotation_label(&diagnostic.error);
        let note = format!(
            "run `decint --explain {}` for more information",
            diagnostic.error.code()
        );
        let Span { lo, hi } = diagnostic.span;
        let snippet = Snippet {
            title: Some(Annotation {
                label: Some(diagnostic.error.title()),
                id: Some(diagnostic.error.code()),
                annotation_type: AnnotationType::Error,
            }),
            footer: vec![Annotation {
                label: Some(&note),
                id: None,
                annotation_type: AnnotationType::Note,
            }],
            slices: vec![Slice {
                source,
                line_start: 1,
                origin: None,
                fold: true,
                annotations: vec![SourceAnnotation {
                    label: &label,
                    annotation_type: AnnotationType::Error,
                    range: (lo, hi.max(lo + 1)),
                }],
            }],
            opt: FormatOptions {
                color,
                ..Default::default()
            },
        };
        let suffix = if i != last_i { "\n" } else { "" };
        emitted_diagnostics.push_str(&format!("{}\n{}", DisplayList::from(snippet), suffix));
    }
    emitted_diagnostics
}

/// Emits an error that has no location, like a malformed command line.
pub fn emit_usage_error(msg: &str, color: bool) -> String {
    let snippet = Snippet {
        title: Some(Annotation {
            label: Some(msg),
            id: None,
            annotation_type: AnnotationType::Error,
        }),
        footer: vec![],
        slices: vec![],
        opt: FormatOptions {
            color,
            ..Default::default()
        },
    };
    format!("{}\n", DisplayList::from(snippet))
}

/// Describes what is wrong at the annotated location.
fn annotation_label(error: &ArithmeticError) -> String {
    match error {
        ArithmeticError::InvalidLiteral {
            reason: LiteralIssue::Empty,
            ..
        } => "this operand is empty".to_owned(),
        ArithmeticError::InvalidLiteral { reason, .. } => reason.to_string(),
        ArithmeticError::DivideByZero => "this is zero".to_owned(),
        ArithmeticError::DomainError(msg) => (*msg).to_owned(),
        ArithmeticError::InvalidArgument(msg) => msg.clone(),
    }
}
