//! Document composition: resume record → ordered block sequence.
//!
//! # Rules
//! - Sections are emitted in a fixed order: header, profile, experience, education, skills,
//!   projects, certifications.
//! - Every section after the header is emitted only when its data is non-empty. An omitted
//!   section contributes zero blocks, heading and rule included.
//! - Composition never fails. An empty record yields the header alone.

use serde::{Deserialize, Serialize};

use crate::compose::blocks::{Block, Span, TextStyle};
use crate::compose::labels;
use crate::models::resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
    ResumeRecord, SkillSet, SocialField,
};

const CONTACT_SEPARATOR: &str = " | ";
const BULLET: &str = "• ";
const HEADING_GAP: f32 = 3.0;
const ENTRY_GAP: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Profile,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

/// Blocks belonging to one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedSection {
    pub kind: SectionKind,
    pub blocks: Vec<Block>,
}

/// The composed document, section by section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub sections: Vec<ComposedSection>,
}

impl Composition {
    /// The flat block stream handed to a layout engine.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|s| s.blocks.iter())
    }

    #[cfg(test)]
    pub fn section(&self, kind: SectionKind) -> Option<&ComposedSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn block_count(&self) -> usize {
        self.sections.iter().map(|s| s.blocks.len()).sum()
    }
}

/// Composes `record` into a document.
pub fn compose(record: &ResumeRecord) -> Composition {
    let mut sections = vec![ComposedSection {
        kind: SectionKind::Header,
        blocks: header_blocks(&record.personal_info),
    }];

    let optional = [
        (SectionKind::Profile, profile_blocks(&record.profile_summary)),
        (SectionKind::Experience, experience_blocks(&record.experience)),
        (SectionKind::Education, education_blocks(&record.education)),
        (SectionKind::Skills, skills_blocks(&record.skills)),
        (SectionKind::Projects, project_blocks(&record.projects)),
        (
            SectionKind::Certifications,
            certification_blocks(&record.certifications),
        ),
    ];
    for (kind, blocks) in optional {
        if let Some(blocks) = blocks {
            sections.push(ComposedSection { kind, blocks });
        }
    }

    Composition { sections }
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

fn header_blocks(info: &PersonalInfo) -> Vec<Block> {
    vec![
        Block::plain(TextStyle::NameHeader, info.name.clone()),
        Block::text(TextStyle::ContactInfo, contact_spans(info)),
    ]
}

/// Joins every non-empty contact field with `" | "` in a fixed order.
pub fn contact_spans(info: &PersonalInfo) -> Vec<Span> {
    let mut parts: Vec<Span> = Vec::new();

    if !info.location.is_empty() {
        parts.push(Span::plain(info.location.clone()));
    }
    if !info.email.is_empty() {
        parts.push(Span::link(
            info.email.clone(),
            format!("mailto:{}", info.email),
        ));
    }
    if !info.phone.is_empty() {
        let dial: String = info.phone.split_whitespace().collect();
        parts.push(Span::link(info.phone.clone(), format!("tel:{dial}")));
    }
    parts.extend(social_span(&info.linkedin));
    parts.extend(social_span(&info.github));

    let mut spans = Vec::with_capacity(parts.len() * 2);
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::plain(CONTACT_SEPARATOR));
        }
        spans.push(part);
    }
    spans
}

fn social_span(field: &SocialField) -> Option<Span> {
    if !field.is_present() {
        return None;
    }
    match field {
        SocialField::Plain(text) => Some(Span::plain(text.clone())),
        SocialField::Link(link) => Some(Span::link(link.display.clone(), link.url.clone())),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn section_heading(title: &str) -> Vec<Block> {
    vec![
        Block::plain(TextStyle::SectionHeader, title),
        Block::Rule,
        Block::spacer(HEADING_GAP),
    ]
}

fn bullet(style: TextStyle, text: &str) -> Block {
    Block::plain(style, format!("{BULLET}{text}"))
}

fn profile_blocks(summary: &str) -> Option<Vec<Block>> {
    if summary.is_empty() {
        return None;
    }
    let mut blocks = section_heading(labels::PROFILE);
    blocks.push(Block::plain(TextStyle::Body, summary));
    blocks.push(Block::spacer(ENTRY_GAP));
    Some(blocks)
}

fn experience_blocks(entries: &[ExperienceEntry]) -> Option<Vec<Block>> {
    if entries.is_empty() {
        return None;
    }
    let mut blocks = section_heading(labels::EXPERIENCE);
    for exp in entries {
        blocks.push(Block::Row {
            style: TextStyle::EntryTitle,
            left: vec![Span::plain(format!(
                "{} | {} | {}",
                exp.job_title, exp.company, exp.location
            ))],
            right: vec![Span::plain(format!("({} - {})", exp.start_date, exp.end_date))],
        });
        for resp in &exp.responsibilities {
            blocks.push(bullet(TextStyle::Bullet, resp));
        }
        if !exp.technologies.is_empty() {
            blocks.push(Block::text(
                TextStyle::Body,
                vec![
                    Span::bold(labels::TECHNOLOGIES),
                    Span::plain(format!(" {}", exp.technologies)),
                ],
            ));
        }
        blocks.push(Block::spacer(ENTRY_GAP));
    }
    Some(blocks)
}

fn education_blocks(entries: &[EducationEntry]) -> Option<Vec<Block>> {
    if entries.is_empty() {
        return None;
    }
    let mut blocks = section_heading(labels::EDUCATION);
    for edu in entries {
        blocks.push(Block::plain(
            TextStyle::EntryTitle,
            format!(
                "{}, {}, {} in {}",
                edu.institution, edu.location, edu.degree, edu.field
            ),
        ));
        if !edu.focus_areas.is_empty() {
            blocks.push(Block::plain(
                TextStyle::Body,
                format!("{} {}", labels::FOCUS, edu.focus_areas.join(", ")),
            ));
        }
        blocks.push(Block::plain(
            TextStyle::Body,
            format!("({} – {})", edu.start_date, edu.end_date),
        ));
        blocks.push(Block::spacer(ENTRY_GAP));
    }
    Some(blocks)
}

fn skills_blocks(skills: &SkillSet) -> Option<Vec<Block>> {
    if skills.is_empty() {
        return None;
    }
    let mut blocks = section_heading(labels::SKILLS);
    let categories = [
        (labels::SKILLS_PROGRAMMING, &skills.programming),
        (labels::SKILLS_TECHNICAL, &skills.technical),
        (labels::SKILLS_SOFTWARE, &skills.software),
    ];
    for (label, items) in categories {
        if items.is_empty() {
            continue;
        }
        blocks.push(Block::text(
            TextStyle::SkillCategory,
            vec![
                Span::plain(BULLET),
                Span::bold(label),
                Span::plain(format!(" {}", items.join(", "))),
            ],
        ));
    }
    blocks.push(Block::spacer(ENTRY_GAP));
    Some(blocks)
}

fn project_blocks(entries: &[ProjectEntry]) -> Option<Vec<Block>> {
    if entries.is_empty() {
        return None;
    }
    let mut blocks = section_heading(labels::PROJECTS);
    for project in entries {
        blocks.push(Block::plain(
            TextStyle::EntryTitle,
            format!(
                "{} | {}, {}",
                project.title.to_uppercase(),
                project.subtitle,
                project.location
            ),
        ));
        blocks.push(Block::plain(
            TextStyle::Body,
            format!("({})", project.date_range),
        ));
        for line in &project.description {
            blocks.push(bullet(TextStyle::Bullet, line));
        }
        blocks.push(Block::spacer(ENTRY_GAP));
    }
    Some(blocks)
}

fn certification_blocks(entries: &[CertificationEntry]) -> Option<Vec<Block>> {
    if entries.is_empty() {
        return None;
    }
    let mut blocks = section_heading(labels::CERTIFICATIONS);
    for cert in entries {
        blocks.push(Block::text(
            TextStyle::SkillCategory,
            vec![
                Span::plain(BULLET),
                Span::bold(cert.name.clone()),
                Span::plain(format!(" - {} {}", labels::ISSUED_BY, cert.issuer)),
            ],
        ));
    }
    Some(blocks)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
