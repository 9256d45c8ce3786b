//! Fixed German section headings and field labels.

pub const PROFILE: &str = "Berufsprofil";
pub const EXPERIENCE: &str = "Berufliche Erfahrung";
pub const EDUCATION: &str = "AUSBILDUNG";
pub const SKILLS: &str = "Technische Fähigkeiten";
pub const PROJECTS: &str = "PROJEKT ARBEITEN";
pub const CERTIFICATIONS: &str = "Zertifikate";

pub const TECHNOLOGIES: &str = "Technologien:";
pub const FOCUS: &str = "Schwerpunkt:";
pub const SKILLS_PROGRAMMING: &str = "Programmiersprachen:";
pub const SKILLS_TECHNICAL: &str = "Technische Fähigkeiten:";
pub const SKILLS_SOFTWARE: &str = "Software-Entwicklung:";
pub const ISSUED_BY: &str = "Herausgegeben von";
