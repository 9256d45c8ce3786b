//! Abstract layout directives produced by the composer.
//!
//! Any engine that can lay out left/right aligned rows, bulleted paragraphs and page margins
//! can consume these. `crate::layout` is the engine used by the PDF renderer.

use serde::{Deserialize, Serialize};

/// Named paragraph styles. Sizes and spacing live in `layout::styles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    NameHeader,
    ContactInfo,
    SectionHeader,
    EntryTitle,
    Body,
    Bullet,
    SkillCategory,
}

/// A run of text with uniform formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    /// Hyperlink target, when the run is clickable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            link: None,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            link: None,
        }
    }

    pub fn link(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            link: Some(target.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph.
    Text { style: TextStyle, spans: Vec<Span> },
    /// Two cells on one line; the right cell is right-aligned.
    Row {
        style: TextStyle,
        left: Vec<Span>,
        right: Vec<Span>,
    },
    /// Full-width horizontal line.
    Rule,
    /// Vertical gap in points.
    Spacer { height: f32 },
}

impl Block {
    pub fn text(style: TextStyle, spans: Vec<Span>) -> Self {
        Block::Text { style, spans }
    }

    pub fn plain(style: TextStyle, text: impl Into<String>) -> Self {
        Block::Text {
            style,
            spans: vec![Span::plain(text)],
        }
    }

    pub fn spacer(height: f32) -> Self {
        Block::Spacer { height }
    }

    /// The visible text of the block, cells separated by a single space.
    #[cfg(test)]
    pub fn plain_text(&self) -> String {
        fn join(spans: &[Span]) -> String {
            spans.iter().map(|s| s.text.as_str()).collect()
        }
        match self {
            Block::Text { spans, .. } => join(spans),
            Block::Row { left, right, .. } => format!("{} {}", join(left), join(right)),
            Block::Rule | Block::Spacer { .. } => String::new(),
        }
    }
}
