use serde::{Deserialize, Serialize};

use crate::storage::migration::StoredPersonalInfo;

// ────────────────────────────────────────────────────────────────────────────
// Personal info
// ────────────────────────────────────────────────────────────────────────────

/// A display label paired with the URL it links to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub display: String,
    pub url: String,
}

impl ProfileLink {
    pub fn new(display: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            url: url.into(),
        }
    }

    /// A link renders only when both halves are set.
    pub fn is_present(&self) -> bool {
        !self.display.is_empty() && !self.url.is_empty()
    }
}

/// A LinkedIn or GitHub contact field.
///
/// `Plain` is the legacy single combined string; it only exists in memory when a caller
/// sets it through [`PersonalInfoParams`]. Anything loaded from disk is upgraded to `Link`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocialField {
    Plain(String),
    Link(ProfileLink),
}

impl Default for SocialField {
    fn default() -> Self {
        SocialField::Link(ProfileLink::default())
    }
}

impl SocialField {
    pub fn is_present(&self) -> bool {
        match self {
            SocialField::Plain(text) => !text.is_empty(),
            SocialField::Link(link) => link.is_present(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredPersonalInfo", into = "StoredPersonalInfo")]
pub struct PersonalInfo {
    pub name: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: SocialField,
    pub github: SocialField,
}

/// Arguments for [`ResumeRecord::set_personal_info`]. Every optional field defaults to empty.
#[derive(Debug, Clone, Default)]
pub struct PersonalInfoParams {
    pub name: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: SocialField,
    pub github: SocialField,
}

// ────────────────────────────────────────────────────────────────────────────
// Section entries
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: Vec<String>,
    pub technologies: String,
}

/// Arguments for [`ResumeRecord::add_experience`].
#[derive(Debug, Clone, Default)]
pub struct ExperienceParams {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: Vec<String>,
    pub technologies: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub focus_areas: Vec<String>,
}

/// Arguments for [`ResumeRecord::add_education`].
#[derive(Debug, Clone, Default)]
pub struct EducationParams {
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub focus_areas: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSet {
    pub programming: Vec<String>,
    pub technical: Vec<String>,
    pub software: Vec<String>,
}

impl SkillSet {
    pub fn is_empty(&self) -> bool {
        self.programming.is_empty() && self.technical.is_empty() && self.software.is_empty()
    }
}

/// Arguments for [`ResumeRecord::extend_skills`]. Lists left empty leave the record untouched.
#[derive(Debug, Clone, Default)]
pub struct SkillParams {
    pub programming: Vec<String>,
    pub technical: Vec<String>,
    pub software: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub date_range: String,
    pub description: Vec<String>,
}

/// Arguments for [`ResumeRecord::add_project`].
#[derive(Debug, Clone, Default)]
pub struct ProjectParams {
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub date_range: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Record
// ────────────────────────────────────────────────────────────────────────────

/// All content of one resume. Entries keep insertion order; nothing is sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub profile_summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: SkillSet,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
}

impl ResumeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the personal info wholesale.
    pub fn set_personal_info(&mut self, params: PersonalInfoParams) {
        let PersonalInfoParams {
            name,
            location,
            email,
            phone,
            linkedin,
            github,
        } = params;
        self.personal_info = PersonalInfo {
            name,
            location,
            email,
            phone,
            linkedin,
            github,
        };
    }

    pub fn set_profile_summary(&mut self, summary: impl Into<String>) {
        self.profile_summary = summary.into();
    }

    pub fn add_experience(&mut self, params: ExperienceParams) {
        self.experience.push(ExperienceEntry {
            job_title: params.job_title,
            company: params.company,
            location: params.location,
            start_date: params.start_date,
            end_date: params.end_date,
            responsibilities: params.responsibilities,
            technologies: params.technologies,
        });
    }

    pub fn add_education(&mut self, params: EducationParams) {
        self.education.push(EducationEntry {
            institution: params.institution,
            location: params.location,
            degree: params.degree,
            field: params.field,
            start_date: params.start_date,
            end_date: params.end_date,
            focus_areas: params.focus_areas,
        });
    }

    /// Appends to each skill list. Existing values are never cleared.
    pub fn extend_skills(&mut self, params: SkillParams) {
        self.skills.programming.extend(params.programming);
        self.skills.technical.extend(params.technical);
        self.skills.software.extend(params.software);
    }

    pub fn add_project(&mut self, params: ProjectParams) {
        self.projects.push(ProjectEntry {
            title: params.title,
            subtitle: params.subtitle,
            location: params.location,
            date_range: params.date_range,
            description: params.description,
        });
    }

    pub fn add_certification(&mut self, name: impl Into<String>, issuer: impl Into<String>) {
        self.certifications.push(CertificationEntry {
            name: name.into(),
            issuer: issuer.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extend_skills_appends() {
        let mut record = ResumeRecord::new();
        record.extend_skills(SkillParams {
            programming: strings(&["a", "b"]),
            ..Default::default()
        });
        record.extend_skills(SkillParams {
            programming: strings(&["c"]),
            ..Default::default()
        });
        assert_eq!(record.skills.programming, strings(&["a", "b", "c"]));
        assert!(record.skills.technical.is_empty());
    }

    #[test]
    fn test_extend_skills_with_empty_lists_keeps_existing() {
        let mut record = ResumeRecord::new();
        record.extend_skills(SkillParams {
            software: strings(&["Rust"]),
            ..Default::default()
        });
        record.extend_skills(SkillParams::default());
        assert_eq!(record.skills.software, strings(&["Rust"]));
    }

    #[test]
    fn test_set_personal_info_replaces_wholesale() {
        let mut record = ResumeRecord::new();
        record.set_personal_info(PersonalInfoParams {
            name: "First".to_string(),
            email: "first@example.com".to_string(),
            github: SocialField::Plain("first".to_string()),
            ..Default::default()
        });
        record.set_personal_info(PersonalInfoParams {
            name: "Second".to_string(),
            phone: "123".to_string(),
            ..Default::default()
        });

        let info = &record.personal_info;
        assert_eq!(info.name, "Second");
        assert_eq!(info.phone, "123");
        assert!(info.email.is_empty(), "email from first call must not survive");
        assert!(!info.github.is_present());
    }

    #[test]
    fn test_set_profile_summary_replaces() {
        let mut record = ResumeRecord::new();
        record.set_profile_summary("one");
        record.set_profile_summary("two");
        assert_eq!(record.profile_summary, "two");
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut record = ResumeRecord::new();
        for title in ["Z", "A", "M"] {
            record.add_experience(ExperienceParams {
                job_title: title.to_string(),
                ..Default::default()
            });
            record.add_project(ProjectParams {
                title: title.to_string(),
                ..Default::default()
            });
        }
        record.add_certification("Same", "Issuer");
        record.add_certification("Same", "Issuer");

        let titles: Vec<_> = record.experience.iter().map(|e| e.job_title.as_str()).collect();
        assert_eq!(titles, ["Z", "A", "M"]);
        let projects: Vec<_> = record.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(projects, ["Z", "A", "M"]);
        assert_eq!(record.certifications.len(), 2, "duplicates are kept");
    }

    #[test]
    fn test_optional_fields_default_empty() {
        let mut record = ResumeRecord::new();
        record.add_experience(ExperienceParams {
            job_title: "Dev".to_string(),
            company: "Co".to_string(),
            ..Default::default()
        });
        record.add_education(EducationParams {
            institution: "Uni".to_string(),
            ..Default::default()
        });
        assert!(record.experience[0].technologies.is_empty());
        assert!(record.experience[0].responsibilities.is_empty());
        assert!(record.education[0].focus_areas.is_empty());
    }

    #[test]
    fn test_profile_link_presence_needs_both_halves() {
        assert!(!ProfileLink::new("me", "").is_present());
        assert!(!ProfileLink::new("", "https://x").is_present());
        assert!(ProfileLink::new("me", "https://x").is_present());
        assert!(SocialField::Plain("me".to_string()).is_present());
        assert!(!SocialField::default().is_present());
    }
}
