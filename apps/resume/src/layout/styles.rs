//! Paragraph style sheet: size, spacing and alignment per [`TextStyle`].

use serde::{Deserialize, Serialize};

use crate::compose::TextStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    pub font_size_pt: f32,
    /// Baseline-to-baseline distance.
    pub leading_pt: f32,
    pub space_before_pt: f32,
    pub space_after_pt: f32,
    pub left_indent_pt: f32,
    /// Weight of runs that carry no explicit bold flag.
    pub bold: bool,
    pub alignment: Alignment,
}

impl ParagraphStyle {
    fn new(font_size_pt: f32, bold: bool) -> Self {
        Self {
            font_size_pt,
            leading_pt: font_size_pt * 1.2,
            space_before_pt: 0.0,
            space_after_pt: 0.0,
            left_indent_pt: 0.0,
            bold,
            alignment: Alignment::Left,
        }
    }
}

/// Compact one-page styling: 14pt name, 10pt headings, 8–9pt body text.
pub fn paragraph_style(style: TextStyle) -> ParagraphStyle {
    match style {
        TextStyle::NameHeader => ParagraphStyle {
            space_after_pt: 1.0,
            alignment: Alignment::Center,
            ..ParagraphStyle::new(14.0, true)
        },
        TextStyle::ContactInfo => ParagraphStyle {
            space_after_pt: 4.0,
            alignment: Alignment::Center,
            ..ParagraphStyle::new(9.0, false)
        },
        TextStyle::SectionHeader => ParagraphStyle {
            space_before_pt: 4.0,
            space_after_pt: 1.0,
            ..ParagraphStyle::new(10.0, true)
        },
        TextStyle::EntryTitle => ParagraphStyle {
            space_before_pt: 2.0,
            space_after_pt: 1.0,
            ..ParagraphStyle::new(9.0, true)
        },
        TextStyle::Body => ParagraphStyle::new(8.0, false),
        TextStyle::Bullet => ParagraphStyle {
            left_indent_pt: 12.0,
            ..ParagraphStyle::new(8.0, false)
        },
        TextStyle::SkillCategory => ParagraphStyle::new(8.0, false),
    }
}
