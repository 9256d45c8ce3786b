//! Places composed blocks onto fixed-size pages.
//!
//! Coordinates are in points, measured from the top-left corner of the page with y growing
//! downwards. The PDF writer flips them into PDF user space.

use serde::{Deserialize, Serialize};

use crate::compose::{Block, Composition, Span, TextStyle};
use crate::layout::font_metrics::PageConfig;
use crate::layout::styles::{paragraph_style, Alignment, ParagraphStyle};
use crate::layout::wrap::{measure_spans, wrap_spans, Line, Run, WrapFont};

/// Minimum horizontal gap between the two cells of a row.
const ROW_GAP_PT: f32 = 6.0;
/// Widest the right cell of a row may grow before it wraps (2in of a 7.5in row).
const RIGHT_CELL_SHARE: f32 = 2.0 / 7.5;
const RULE_THICKNESS_PT: f32 = 0.5;
/// Vertical room a rule takes, including the gap below it.
const RULE_HEIGHT_PT: f32 = 2.0;
/// Baseline position within the line box, as a fraction of the leading.
const BASELINE_RATIO: f32 = 0.8;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    /// Left edge of the line.
    pub x: f32,
    pub baseline: f32,
    pub size_pt: f32,
    /// Runs with `x` relative to the line's left edge.
    pub runs: Vec<Run>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacedItem {
    Line(PlacedLine),
    Rule {
        y: f32,
        x_start: f32,
        x_end: f32,
        thickness: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<PlacedItem>,
}

impl Page {
    #[cfg(test)]
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.items.iter().filter_map(|item| match item {
            PlacedItem::Line(line) => Some(line),
            PlacedItem::Rule { .. } => None,
        })
    }
}

/// Result of laying out a composition. Always holds at least one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub pages: Vec<Page>,
    /// Vertical space consumed on the last page, excluding margins.
    pub last_page_used_pt: f32,
}

impl PageLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cursor
// ────────────────────────────────────────────────────────────────────────────

struct Cursor<'a> {
    config: &'a PageConfig,
    pages: Vec<Page>,
    current: Page,
    y: f32,
}

impl<'a> Cursor<'a> {
    fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            current: Page::default(),
            y: config.margin_pt,
        }
    }

    fn bottom(&self) -> f32 {
        self.config.page_height_pt - self.config.margin_pt
    }

    fn at_page_top(&self) -> bool {
        self.current.items.is_empty()
    }

    /// Moves to a fresh page unless the current one is still empty.
    fn ensure_room(&mut self, height: f32) {
        if self.y + height > self.bottom() && !self.at_page_top() {
            self.pages.push(std::mem::take(&mut self.current));
            self.y = self.config.margin_pt;
        }
    }

    /// Vertical gap that never carries over to the next page.
    fn advance(&mut self, gap: f32) {
        if self.at_page_top() {
            return;
        }
        self.y = (self.y + gap).min(self.bottom());
    }

    fn place_line(&mut self, x: f32, style: &ParagraphStyle, runs: Vec<Run>) {
        self.ensure_room(style.leading_pt);
        self.current.items.push(PlacedItem::Line(PlacedLine {
            x,
            baseline: self.y + style.leading_pt * BASELINE_RATIO,
            size_pt: style.font_size_pt,
            runs,
        }));
        self.y += style.leading_pt;
    }

    fn place_rule(&mut self) {
        self.ensure_room(RULE_HEIGHT_PT);
        let margin = self.config.margin_pt;
        self.current.items.push(PlacedItem::Rule {
            y: self.y + RULE_THICKNESS_PT,
            x_start: margin,
            x_end: margin + self.config.text_width_pt(),
            thickness: RULE_THICKNESS_PT,
        });
        self.y += RULE_HEIGHT_PT;
    }

    fn finish(mut self) -> PageLayout {
        let last_page_used_pt =
            (self.y - self.config.margin_pt).min(self.config.text_height_pt());
        self.pages.push(self.current);
        PageLayout {
            pages: self.pages,
            last_page_used_pt,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// Lays out every block of `composition` on pages described by `config`.
pub fn layout_composition(composition: &Composition, config: &PageConfig) -> PageLayout {
    let mut cursor = Cursor::new(config);
    for block in composition.blocks() {
        match block {
            Block::Text { style, spans } => layout_text(&mut cursor, *style, spans),
            Block::Row { style, left, right } => layout_row(&mut cursor, *style, left, right),
            Block::Rule => cursor.place_rule(),
            Block::Spacer { height } => cursor.advance(*height),
        }
    }
    cursor.finish()
}

fn wrap_font(config: &PageConfig, style: &ParagraphStyle) -> WrapFont {
    WrapFont {
        family: config.font,
        size_pt: style.font_size_pt,
        bold: style.bold,
    }
}

fn layout_text(cursor: &mut Cursor<'_>, text_style: TextStyle, spans: &[Span]) {
    let config = cursor.config;
    let style = paragraph_style(text_style);
    let width = config.text_width_pt() - style.left_indent_pt;
    let lines = wrap_spans(spans, wrap_font(config, &style), width);
    if lines.is_empty() {
        // An empty paragraph still occupies one line, like a blank header.
        cursor.advance(style.space_before_pt);
        cursor.y = (cursor.y + style.leading_pt).min(cursor.bottom());
        cursor.advance(style.space_after_pt);
        return;
    }

    cursor.advance(style.space_before_pt);
    for line in lines {
        let x = line_x(config, &style, &line);
        cursor.place_line(x, &style, line.runs);
    }
    cursor.advance(style.space_after_pt);
}

fn line_x(config: &PageConfig, style: &ParagraphStyle, line: &Line) -> f32 {
    let left = config.margin_pt + style.left_indent_pt;
    match style.alignment {
        Alignment::Left => left,
        Alignment::Center => {
            let width = config.text_width_pt() - style.left_indent_pt;
            left + ((width - line.width) / 2.0).max(0.0)
        }
    }
}

fn layout_row(cursor: &mut Cursor<'_>, text_style: TextStyle, left: &[Span], right: &[Span]) {
    let config = cursor.config;
    let style = paragraph_style(text_style);
    let font = wrap_font(config, &style);
    let width = config.text_width_pt() - style.left_indent_pt;

    // The right cell keeps its natural width up to its share of the row, then wraps.
    let right_width = measure_spans(right, font).min(width * RIGHT_CELL_SHARE);
    let gap = if right_width > 0.0 { ROW_GAP_PT } else { 0.0 };
    let left_width = width - right_width - gap;

    let mut lines = wrap_spans(left, font, left_width);
    let right_lines = wrap_spans(right, font, right_width);
    if lines.len() < right_lines.len() {
        lines.resize_with(right_lines.len(), Line::default);
    }
    if lines.is_empty() {
        lines.push(Line::default());
    }
    // Each right line is flush with the right margin.
    for (line, right_line) in lines.iter_mut().zip(right_lines) {
        let offset = (width - right_line.width).max(0.0);
        line.runs.extend(right_line.runs.into_iter().map(|mut run| {
            run.x += offset;
            run
        }));
        line.width = width;
    }

    cursor.advance(style.space_before_pt);
    let x = config.margin_pt + style.left_indent_pt;
    for line in lines {
        cursor.place_line(x, &style, line.runs);
    }
    cursor.advance(style.space_after_pt);
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
