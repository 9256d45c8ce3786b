//! Flat, string-only editing model for the resume.
//!
//! Multi-value fields are edited as text: responsibilities and project descriptions one item
//! per line, focus areas and skills comma-separated. [`collect`] parses a form into a record
//! and drops rows that miss their required fields; [`populate`] goes the other way.

use serde::{Deserialize, Serialize};

use crate::models::resume::{
    EducationParams, ExperienceParams, PersonalInfoParams, ProfileLink, ProjectParams,
    ResumeRecord, SkillParams, SocialField,
};
use crate::storage::migration::{github_from_legacy, linkedin_from_legacy, upgrade_social};

const LIST_SEPARATOR: &str = ", ";

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceRow {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// One responsibility per line.
    pub responsibilities: String,
    pub technologies: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationRow {
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    /// Comma-separated.
    pub focus_areas: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRow {
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub date_range: String,
    /// One line per description item.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationRow {
    pub name: String,
    pub issuer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub name: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin_display: String,
    pub linkedin_url: String,
    pub github_display: String,
    pub github_url: String,
    pub profile_summary: String,
    pub experience: Vec<ExperienceRow>,
    pub education: Vec<EducationRow>,
    /// Comma-separated skill lists.
    pub programming: String,
    pub technical: String,
    pub software: String,
    pub projects: Vec<ProjectRow>,
    pub certifications: Vec<CertificationRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Form → record
// ────────────────────────────────────────────────────────────────────────────

fn split_lines(text: &str) -> Vec<String> {
    split_on(text, '\n')
}

fn split_commas(text: &str) -> Vec<String> {
    split_on(text, ',')
}

fn split_on(text: &str, separator: char) -> Vec<String> {
    text.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Builds a fresh record from `form`.
///
/// Rows are kept only when their required fields are filled: experience needs title and
/// company, education institution and degree, a project its title, a certification both name
/// and issuer.
pub fn collect(form: &FormState) -> ResumeRecord {
    let mut record = ResumeRecord::new();

    record.set_personal_info(PersonalInfoParams {
        name: form.name.clone(),
        location: form.location.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
        linkedin: SocialField::Link(ProfileLink::new(
            form.linkedin_display.clone(),
            form.linkedin_url.clone(),
        )),
        github: SocialField::Link(ProfileLink::new(
            form.github_display.clone(),
            form.github_url.clone(),
        )),
    });

    let profile = form.profile_summary.trim();
    if !profile.is_empty() {
        record.set_profile_summary(profile);
    }

    for row in &form.experience {
        if !(filled(&row.job_title) && filled(&row.company)) {
            continue;
        }
        record.add_experience(ExperienceParams {
            job_title: row.job_title.clone(),
            company: row.company.clone(),
            location: row.location.clone(),
            start_date: row.start_date.clone(),
            end_date: row.end_date.clone(),
            responsibilities: split_lines(&row.responsibilities),
            technologies: row.technologies.clone(),
        });
    }

    for row in &form.education {
        if !(filled(&row.institution) && filled(&row.degree)) {
            continue;
        }
        record.add_education(EducationParams {
            institution: row.institution.clone(),
            location: row.location.clone(),
            degree: row.degree.clone(),
            field: row.field.clone(),
            start_date: row.start_date.clone(),
            end_date: row.end_date.clone(),
            focus_areas: split_commas(&row.focus_areas),
        });
    }

    record.extend_skills(SkillParams {
        programming: split_commas(&form.programming),
        technical: split_commas(&form.technical),
        software: split_commas(&form.software),
    });

    for row in form.projects.iter().filter(|row| filled(&row.title)) {
        record.add_project(ProjectParams {
            title: row.title.clone(),
            subtitle: row.subtitle.clone(),
            location: row.location.clone(),
            date_range: row.date_range.clone(),
            description: split_lines(&row.description),
        });
    }

    for row in &form.certifications {
        if filled(&row.name) && filled(&row.issuer) {
            record.add_certification(row.name.clone(), row.issuer.clone());
        }
    }

    record
}

// ────────────────────────────────────────────────────────────────────────────
// Record → form
// ────────────────────────────────────────────────────────────────────────────

/// Fills a form from `record`. Legacy social strings are shown in their upgraded form.
pub fn populate(record: &ResumeRecord) -> FormState {
    let info = &record.personal_info;
    let linkedin = upgrade_social(&info.linkedin, linkedin_from_legacy);
    let github = upgrade_social(&info.github, github_from_legacy);

    FormState {
        name: info.name.clone(),
        location: info.location.clone(),
        email: info.email.clone(),
        phone: info.phone.clone(),
        linkedin_display: linkedin.display,
        linkedin_url: linkedin.url,
        github_display: github.display,
        github_url: github.url,
        profile_summary: record.profile_summary.clone(),
        experience: record
            .experience
            .iter()
            .map(|e| ExperienceRow {
                job_title: e.job_title.clone(),
                company: e.company.clone(),
                location: e.location.clone(),
                start_date: e.start_date.clone(),
                end_date: e.end_date.clone(),
                responsibilities: e.responsibilities.join("\n"),
                technologies: e.technologies.clone(),
            })
            .collect(),
        education: record
            .education
            .iter()
            .map(|e| EducationRow {
                institution: e.institution.clone(),
                location: e.location.clone(),
                degree: e.degree.clone(),
                field: e.field.clone(),
                start_date: e.start_date.clone(),
                end_date: e.end_date.clone(),
                focus_areas: e.focus_areas.join(LIST_SEPARATOR),
            })
            .collect(),
        programming: record.skills.programming.join(LIST_SEPARATOR),
        technical: record.skills.technical.join(LIST_SEPARATOR),
        software: record.skills.software.join(LIST_SEPARATOR),
        projects: record
            .projects
            .iter()
            .map(|p| ProjectRow {
                title: p.title.clone(),
                subtitle: p.subtitle.clone(),
                location: p.location.clone(),
                date_range: p.date_range.clone(),
                description: p.description.join("\n"),
            })
            .collect(),
        certifications: record
            .certifications
            .iter()
            .map(|c| CertificationRow {
                name: c.name.clone(),
                issuer: c.issuer.clone(),
            })
            .collect(),
    }
}
