// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{io, ops::Range};

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

/// Render a diagnostic pointing at `span` within `input`.
pub fn write_report(
    w: &mut impl io::Write,
    input: &str,
    span: Range<usize>,
    message: &str,
    label: &str,
) -> io::Result<()> {
    let span = visible_span(input, span);
    let config = Config::new()
        .with_index_type(IndexType::Byte)
        .with_color(colored::control::SHOULD_COLORIZE.should_colorize());

    Report::build(ReportKind::Error, span.clone())
        .with_config(config)
        .with_message(message)
        .with_label(
            Label::new(span)
                .with_message(label)
                .with_color(Color::Red),
        )
        .finish()
        .write(Source::from(input), w)
}

/// Errors at the end of the input have an empty span, widen it to the last
/// character so the label has something to point at.
fn visible_span(input: &str, span: Range<usize>) -> Range<usize> {
    let end = span.end.min(input.len());
    let start = span.start.min(end);
    if start < end {
        return start..end;
    }

    match input[..end].char_indices().next_back() {
        Some((i, _)) => i..end,
        None => match input.chars().next() {
            Some(c) => 0..c.len_utf8(),
            None => 0..0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_span() {
        assert_eq!(visible_span("2024-01-05", 5..7), 5..7);
        assert_eq!(visible_span("2024-01", 7..7), 6..7);
        assert_eq!(visible_span("2024-01", 3..99), 3..7);
        assert_eq!(visible_span("2024-01", 0..0), 0..1);
        assert_eq!(visible_span("", 0..0), 0..0);
        assert_eq!(visible_span("2024-é", 7..7), 5..7);
    }

    #[test]
    fn test_write_report() {
        colored::control::set_override(false);
        let mut out = vec![];
        write_report(
            &mut out,
            "2024-13-05",
            5..7,
            "Invalid xsd:date '2024-13-05'",
            "invalid date",
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Invalid xsd:date '2024-13-05'"), "{out}");
        assert!(out.contains("2024-13-05"), "{out}");
        assert!(out.contains("invalid date"), "{out}");
    }
}
