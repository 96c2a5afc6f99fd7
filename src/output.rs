//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Classify
//!
//! ```text
//! 001 photos/dawn.jpg
//!     1920x1080 → landscape large
//! 002 photos/icon.png
//!     250x250 → unclassified
//! 003 photos/broken.jpg
//!     Error: Failed to identify photos/broken.jpg: ...
//!
//! Classified 1 of 3 images
//! ```
//!
//! ## Apply
//!
//! ```text
//! 001 img-landscape img-medium
//! 002 skipped
//! 003 img-undefined (legacy)
//! 004 not an element
//!
//! Applied classes to 2 of 4 elements (2 skipped)
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure — no I/O, no side effects.

use crate::batch::{ApplyOptions, BatchReport, Outcome};
use crate::imaging::ClassifiedFile;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// classify
// ============================================================================

/// Format per-file classification results.
pub fn format_classify_output(files: &[ClassifiedFile]) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, file) in files.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), file.path));

        let detail = match (&file.error, file.width.zip(file.height)) {
            (Some(err), _) => format!("Error: {err}"),
            (None, Some((w, h))) => match file.classification {
                Some(c) => format!("{w}x{h} → {} {}", c.format, c.size),
                None => format!("{w}x{h} → unclassified"),
            },
            (None, None) => "no dimensions".to_string(),
        };
        lines.push(format!("{}{}", indent(1), detail));
    }

    let classified = files.iter().filter(|f| f.classification.is_some()).count();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Classified {} of {}",
        classified,
        plural(files.len(), "image")
    ));
    lines
}

pub fn print_classify_output(files: &[ClassifiedFile]) {
    for line in format_classify_output(files) {
        println!("{}", line);
    }
}

// ============================================================================
// apply
// ============================================================================

/// Format a batch report: one line per element, then a summary.
pub fn format_apply_output(report: &BatchReport, options: &ApplyOptions) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, outcome) in report.outcomes.iter().enumerate() {
        let detail = match outcome {
            Outcome::Classified(c) => options.tokens_for(Some(*c)).join(" "),
            Outcome::Skipped => "skipped".to_string(),
            Outcome::Legacy => format!("{} (legacy)", options.token(None)),
            Outcome::Immutable => "not an element".to_string(),
        };
        lines.push(format!("{} {}", format_index(i + 1), detail));
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    let applied = report.classified() + report.legacy();
    let mut summary = format!(
        "Applied classes to {} of {}",
        applied,
        plural(report.len(), "element")
    );
    if report.skipped() > 0 {
        summary.push_str(&format!(" ({} skipped)", report.skipped()));
    }
    lines.push(summary);
    lines
}

/// Writes to stderr: stdout may be carrying the updated document.
pub fn print_apply_output(report: &BatchReport, options: &ApplyOptions) {
    for line in format_apply_output(report, options) {
        eprintln!("{}", line);
    }
}
