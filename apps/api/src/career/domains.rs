//! Role → career domain lookup.
//!
//! Recommendations only cross between roles of the user's own domain.

static DOMAIN_MAPPING: &[(&str, &str)] = &[
    ("Software Engineer", "Software Development"),
    ("Full Stack Developer", "Software Development"),
    ("Front-End Developer (React, Angular, etc.)", "Software Development"),
    ("Back-End Developer (Node.js, Django, Spring Boot, etc.)", "Software Development"),
    ("Mobile App Developer (Android/iOS)", "Software Development"),
    ("DevOps Engineer", "Software Development"),
    ("Site Reliability Engineer (SRE)", "Software Development"),
    ("Embedded Software Engineer", "Software Development"),
    ("Game Developer", "Software Development"),
    ("API Developer", "Software Development"),
    ("Software Architect", "Software Development"),
    ("Cloud Developer (AWS/GCP/Azure)", "Software Development"),
    ("Data Scientist", "Data Science & Analytics"),
    ("Data Analyst", "Data Science & Analytics"),
    ("Business Intelligence Analyst", "Data Science & Analytics"),
    ("Machine Learning Engineer", "Data Science & Analytics"),
    ("Data Engineer", "Data Science & Analytics"),
    ("Big Data Engineer", "Data Science & Analytics"),
    ("Decision Scientist", "Data Science & Analytics"),
    ("AI/ML Research Scientist", "Data Science & Analytics"),
    ("NLP Engineer", "Data Science & Analytics"),
    ("Deep Learning Engineer", "Data Science & Analytics"),
    ("Computer Vision Engineer", "Data Science & Analytics"),
    ("MLOps Engineer", "Data Science & Analytics"),
    ("Cybersecurity Analyst", "Cybersecurity"),
    ("Security Engineer", "Cybersecurity"),
    ("Ethical Hacker", "Cybersecurity"),
    ("Security Architect", "Cybersecurity"),
    ("Network Security Engineer", "Cybersecurity"),
    ("SOC Analyst", "Cybersecurity"),
    ("Information Security Analyst", "Cybersecurity"),
    ("Cryptographer", "Cybersecurity"),
    ("Cloud Solutions Architect", "Cloud & Infrastructure"),
    ("Cloud Engineer", "Cloud & Infrastructure"),
    ("System Administrator", "Cloud & Infrastructure"),
    ("Network Engineer", "Cloud & Infrastructure"),
    ("IT Infrastructure Engineer", "Cloud & Infrastructure"),
    ("Database Administrator (DBA)", "Cloud & Infrastructure"),
    ("Virtualization Engineer", "Cloud & Infrastructure"),
    ("Storage Engineer", "Cloud & Infrastructure"),
    ("Technical Support Engineer", "IT Support & Systems"),
    ("IT Support Specialist", "IT Support & Systems"),
    ("Help Desk Technician", "IT Support & Systems"),
    ("System Support Engineer", "IT Support & Systems"),
    ("Desktop Support Engineer", "IT Support & Systems"),
    ("QA Engineer", "Testing & Quality Assurance"),
    ("Automation Test Engineer", "Testing & Quality Assurance"),
    ("Manual Test Engineer", "Testing & Quality Assurance"),
    ("Performance Tester", "Testing & Quality Assurance"),
    ("SDET", "Testing & Quality Assurance"),
    ("Test Architect", "Testing & Quality Assurance"),
    ("UI Developer", "UI/UX and Web Technology"),
    ("UX Designer", "UI/UX and Web Technology"),
    ("AI Research Scientist", "AI Research & Emerging Tech"),
    ("Robotics Engineer", "AI Research & Emerging Tech"),
    ("Quantum Computing Researcher", "AI Research & Emerging Tech"),
    ("Blockchain Developer", "AI Research & Emerging Tech"),
    ("AR/VR Developer", "AI Research & Emerging Tech"),
    ("Computer Vision Researcher", "AI Research & Emerging Tech"),
    ("Technical Program Manager (TPM)", "Technical Management & Consulting"),
    ("Engineering Manager", "Technical Management & Consulting"),
    ("Product Manager (Technical)", "Technical Management & Consulting"),
];

pub fn domain_of(role: &str) -> Option<&'static str> {
    DOMAIN_MAPPING
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, domain)| *domain)
}
