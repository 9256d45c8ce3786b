//! Greedy word wrap over styled spans.
//!
//! Words keep the formatting of the span they came from. Consecutive words on a line with
//! the same weight and link target are merged into a single [`Run`], so a hyperlink becomes
//! one clickable rectangle per line.

use serde::{Deserialize, Serialize};

use crate::compose::Span;
use crate::layout::font_metrics::{get_metrics, FontFamily};

/// A positioned piece of uniformly formatted text within a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub link: Option<String>,
    /// Offset from the start of the line, in points.
    pub x: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    pub runs: Vec<Run>,
    /// Total width of the line in points.
    pub width: f32,
}

impl Line {
    #[cfg(test)]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for (i, run) in self.runs.iter().enumerate() {
            if i > 0 && run.x > self.runs[i - 1].x + self.runs[i - 1].width {
                out.push(' ');
            }
            out.push_str(&run.text);
        }
        out
    }
}

/// Font parameters shared by every word of one paragraph.
#[derive(Debug, Clone, Copy)]
pub struct WrapFont {
    pub family: FontFamily,
    pub size_pt: f32,
    /// Forces bold on every word (heading styles).
    pub bold: bool,
}

struct Word<'a> {
    text: &'a str,
    bold: bool,
    link: Option<&'a str>,
    space_before: bool,
}

fn split_words<'a>(spans: &'a [Span], force_bold: bool) -> Vec<Word<'a>> {
    let mut words = Vec::new();
    let mut pending_space = false;
    for span in spans {
        for (i, piece) in span.text.split(char::is_whitespace).enumerate() {
            if i > 0 {
                pending_space = true;
            }
            if piece.is_empty() {
                continue;
            }
            words.push(Word {
                text: piece,
                bold: span.bold || force_bold,
                link: span.link.as_deref(),
                space_before: pending_space,
            });
            pending_space = false;
        }
    }
    words
}

/// Measures `spans` laid out on a single line, in points.
pub fn measure_spans(spans: &[Span], font: WrapFont) -> f32 {
    wrap_spans(spans, font, f32::INFINITY)
        .first()
        .map(|l| l.width)
        .unwrap_or(0.0)
}

/// Wraps `spans` into lines no wider than `max_width` points.
///
/// Empty or whitespace-only input returns no lines. A single word wider than `max_width` is
/// placed on its own line and allowed to overflow.
pub fn wrap_spans(spans: &[Span], font: WrapFont, max_width: f32) -> Vec<Line> {
    let words = split_words(spans, font.bold);
    let mut lines: Vec<Line> = Vec::new();
    let mut current = Line::default();

    for word in words {
        let metrics = get_metrics(font.family, word.bold);
        let word_w = metrics.width_pt(word.text, font.size_pt);
        let first_on_line = current.runs.is_empty();
        let space_w = if first_on_line || !word.space_before {
            0.0
        } else {
            metrics.space_width * font.size_pt
        };

        if !first_on_line && current.width + space_w + word_w > max_width {
            // Line is full; this word opens the next one.
            lines.push(std::mem::take(&mut current));
            push_word(&mut current, &word, 0.0, word_w);
        } else {
            push_word(&mut current, &word, space_w, word_w);
        }
    }
    if !current.runs.is_empty() {
        lines.push(current);
    }
    lines
}

fn push_word(line: &mut Line, word: &Word<'_>, space_w: f32, word_w: f32) {
    let x = line.width + space_w;
    match line.runs.last_mut() {
        Some(run) if run.bold == word.bold && run.link.as_deref() == word.link => {
            if space_w > 0.0 {
                run.text.push(' ');
            }
            run.text.push_str(word.text);
            run.width = x + word_w - run.x;
        }
        _ => line.runs.push(Run {
            text: word.text.to_string(),
            bold: word.bold,
            link: word.link.map(str::to_string),
            x,
            width: word_w,
        }),
    }
    line.width = x + word_w;
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> WrapFont {
        WrapFont {
            family: FontFamily::Times,
            size_pt: 10.0,
            bold: false,
        }
    }

    #[test]
    fn test_wrap_empty_returns_no_lines() {
        assert!(wrap_spans(&[], font(), 100.0).is_empty());
        assert!(wrap_spans(&[Span::plain("   ")], font(), 100.0).is_empty());
    }

    #[test]
    fn test_wrap_single_word_one_line() {
        let lines = wrap_spans(&[Span::plain("Rust")], font(), 500.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].plain_text(), "Rust");
        assert!((lines[0].width - 18.34).abs() < 0.01);
    }

    #[test]
    fn test_wrap_long_text_stays_within_width() {
        let text = "word ".repeat(60);
        let lines = wrap_spans(&[Span::plain(text)], font(), 200.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width <= 200.0, "line overflowed: {}", line.width);
        }
        let words: usize = lines
            .iter()
            .map(|l| l.plain_text().split_whitespace().count())
            .sum();
        assert_eq!(words, 60, "no word is lost or duplicated");
    }

    #[test]
    fn test_oversized_word_gets_its_own_line() {
        let lines = wrap_spans(&[Span::plain("a supercalifragilistic b")], font(), 40.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].plain_text(), "supercalifragilistic");
        assert!(lines[1].width > 40.0);
    }

    #[test]
    fn test_runs_split_on_formatting_changes() {
        let spans = [
            Span::plain("• "),
            Span::bold("Label:"),
            Span::plain(" one, two"),
        ];
        let lines = wrap_spans(&spans, font(), 500.0);
        assert_eq!(lines.len(), 1);
        let runs = &lines[0].runs;
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].text, "•");
        assert!(runs[1].bold);
        assert_eq!(runs[2].text, "one, two");
        assert_eq!(lines[0].plain_text(), "• Label: one, two");
    }

    #[test]
    fn test_adjacent_spans_without_space_stay_joined() {
        let spans = [Span::plain("("), Span::link("site", "https://x"), Span::plain(")")];
        let lines = wrap_spans(&spans, font(), 500.0);
        assert_eq!(lines[0].plain_text(), "(site)");
        assert_eq!(lines[0].runs[1].link.as_deref(), Some("https://x"));
    }

    #[test]
    fn test_force_bold_applies_to_all_words() {
        let lines = wrap_spans(
            &[Span::plain("Section Title")],
            WrapFont {
                bold: true,
                ..font()
            },
            500.0,
        );
        assert!(lines[0].runs.iter().all(|r| r.bold));
    }

    #[test]
    fn test_measure_spans_matches_single_line_width() {
        let spans = [Span::plain("(April 2024 - Okt 2024)")];
        let width = measure_spans(&spans, font());
        let lines = wrap_spans(&spans, font(), 10_000.0);
        assert!((width - lines[0].width).abs() < 1e-3);
        assert_eq!(measure_spans(&[], font()), 0.0);
    }
}
