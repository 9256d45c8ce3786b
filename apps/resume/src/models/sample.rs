use crate::models::resume::{
    EducationParams, ExperienceParams, PersonalInfoParams, ProjectParams, ResumeRecord,
    SkillParams, SocialField,
};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Demonstration record used by `GET /api/v1/resume/sample`.
///
/// The social fields are deliberately in the combined legacy form so the upgrade path gets
/// exercised the first time the sample is saved and reloaded.
pub fn sample_resume() -> ResumeRecord {
    let mut resume = ResumeRecord::new();

    resume.set_personal_info(PersonalInfoParams {
        name: "Muhammad Waleed".to_string(),
        location: "Ilmenau, Germany".to_string(),
        email: "weedu34@gmail.com".to_string(),
        phone: "+49 176 56964658".to_string(),
        linkedin: SocialField::Plain("Muhammad Waleed".to_string()),
        github: SocialField::Plain("github.com/weedu34".to_string()),
    });

    resume.set_profile_summary(
        "Masterabsolvent in Medientechnologie mit praktischer Erfahrung in \
         Python-Anwendungsentwicklung und Systemintegration für technische Anwendungen. \
         Spezialisiert auf Datenbankintegration, Schnittstellen-Entwicklung und \
         Softwareoptimierung. Fundierte Kenntnisse in strukturierter Problemlösung, technischer \
         Dokumentation und Mitarbeiterschulung bei IT-Systemen. Analytisches Denkvermögen und \
         eigenständige Arbeitsweise mit ausgeprägtem Teamgeist durch erfolgreiche Projektarbeit.",
    );

    resume.add_experience(ExperienceParams {
        job_title: "Master-Arbeit".to_string(),
        company: "Carl Zeiss Jena GmbH".to_string(),
        location: "Germany".to_string(),
        start_date: "April 2024".to_string(),
        end_date: "Okt 2024".to_string(),
        responsibilities: lines(&[
            "Computer Vision-Pipeline-Entwicklung: Entwickelte Echtzeit-Bildverarbeitungssystem \
             für Multispektral-Kamerasysteme mit OpenCV-basierten Algorithmen für Objekterkennung \
             und -verfolgung",
            "Sensorfusion & Kalibrierung: Implementierte Multi-Sensor-Datenintegration (Kameras, \
             Akzelerometer) für präzise 3D-Objektlokalisierung und Bewegungserkennung",
            "Echtzeit-Objekterkennung: Optimierte Computer Vision-Algorithmen für <50ms Latenz bei \
             30fps Bildverarbeitung für zeitkritische Anwendungen",
        ]),
        technologies: "Python, OpenCV, NumPy, Multi-Threading, Sensorfusion, Kamerakalibrierung"
            .to_string(),
    });

    resume.add_experience(ExperienceParams {
        job_title: "Studentische Hilfskraft".to_string(),
        company: "Technische Universität Ilmenau".to_string(),
        location: "Germany".to_string(),
        start_date: "Mai 2022".to_string(),
        end_date: "Sept 2023".to_string(),
        responsibilities: lines(&[
            "Objekterkennung & Klassifizierung: Entwickelte OpenCV-basierte Algorithmen für \
             automatisierte Objekterkennung in beweglichen Umgebungen und \
             Materialdefektklassifizierung",
            "Machine Learning-Integration: Entwickelte und trainierte ML-Modelle für \
             Echtzeit-Objektklassifizierung mit 84% Erkennungsgenauigkeit",
            "Prozessunterstützung: Unterstützte Forschungsabteilungen bei der Optimierung von \
             Arbeitsabläufen durch maßgeschneiderte Software-Lösungen",
        ]),
        technologies: String::new(),
    });

    resume.add_education(EducationParams {
        institution: "Technische Universität Ilmenau".to_string(),
        location: "Germany".to_string(),
        degree: "Master".to_string(),
        field: "Medientechnologie".to_string(),
        start_date: "April 2021".to_string(),
        end_date: "Feb 2025".to_string(),
        focus_areas: lines(&[
            "Computer Vision",
            "Signal Processing",
            "Bildverarbeitung",
            "Sensor Technology",
        ]),
    });

    resume.add_education(EducationParams {
        institution: "University of Engineering and Technology".to_string(),
        location: "Taxila, Pakistan".to_string(),
        degree: "Bachelor".to_string(),
        field: "Elektrotechnik".to_string(),
        start_date: "Nov 2012".to_string(),
        end_date: "Juli 2016".to_string(),
        focus_areas: lines(&[
            "Embedded Systems",
            "Automatisierungstechnik",
            "Control Systems",
        ]),
    });

    resume.extend_skills(SkillParams {
        programming: lines(&[
            "Python",
            "SQL",
            "HTML/CSS",
            "C++",
            "API-Integration",
            "Hardware-Software-Schnittstellen",
            "SQLite",
            "PostgreSQL - Database Design",
        ]),
        technical: lines(&[
            "Multi-Sensor-Fusion: Kamera-IMU-Integration",
            "Sensordatensynchronisation",
            "Serial Communication",
            "USB/Bluetooth APIs",
            "Embedded-Controller-Integration",
            "Kamerakalibrierung",
            "Multi-Kamera-Setups",
            "Bildqualitätsoptimierung",
        ]),
        software: lines(&[
            "Modulare, wiederverwendbare Komponenten",
            "User Interface Design",
            "User Experience Optimization",
        ]),
    });

    resume.add_project(ProjectParams {
        title: "Implementation of a data acquisition and analysis software for handheld \
                multispectral camera system"
            .to_string(),
        subtitle: "Masterarbeit, Carl Zeiss Jena GmbH".to_string(),
        location: "Deutschland".to_string(),
        date_range: "April 2024 – Okt 2024".to_string(),
        description: lines(&[
            "Vollständige Software-Stack-Entwicklung von Anforderungsanalyse bis Deployment für \
             präzise optische Systeme",
            "Integration verschiedener Hardware-Komponenten (Kameras, Sensoren, \
             Embedded-Controller) mit Python Interfaces",
        ]),
    });

    resume.add_project(ProjectParams {
        title: "Video based human action recognition using reservoir computing".to_string(),
        subtitle: "Medienprojekt, Technische Universität Ilmenau".to_string(),
        location: "Deutschland".to_string(),
        date_range: "Dez 2022 – Mai 2023".to_string(),
        description: lines(&[
            "Entwicklung und Training von ML-Modellen für Echtzeit-Anwendungen mit Python und \
             numerischen Optimierungsalgorithmen",
        ]),
    });

    resume.add_certification("Python for Data Science, AI & Development", "Coursera");
    resume.add_certification("Machine Learning- From Basics to Advanced", "Udemy");
    resume.add_certification("Python Programming - From Basic to Advanced Level", "Udemy");

    resume
}
