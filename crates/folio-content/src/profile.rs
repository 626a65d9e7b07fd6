//! Static profile records behind the portfolio sections.
//!
//! Authored once in source and immutable at runtime; each record is used
//! only for display. List fields keep their authored order.

use serde::Serialize;

/// Hero section: headline identity and tagline.
#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub name: String,
    pub tagline: String,
    pub summary: String,
}

/// One labelled expertise area on the about card.
#[derive(Debug, Clone, Serialize)]
pub struct ExpertiseArea {
    pub label: String,
    pub items: String,
}

/// About section: narrative paragraphs plus the expertise grid.
#[derive(Debug, Clone, Serialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub expertise: Vec<ExpertiseArea>,
}

/// One professional experience record.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub details: Vec<String>,
    pub recognitions: Vec<String>,
    /// Technologies in authored order
    pub technologies: Vec<String>,
}

/// Formal education record.
#[derive(Debug, Clone, Serialize)]
pub struct EducationEntry {
    pub title: String,
    pub institution: String,
    pub period: String,
    pub description: String,
    pub grade: String,
}

/// Certification or course record.
#[derive(Debug, Clone, Serialize)]
pub struct CertificationEntry {
    pub title: String,
    pub institution: String,
    pub period: String,
    pub description: String,
    pub badge: String,
}

/// Project card record.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    /// Technologies in authored order
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub repo_url: String,
    pub featured: bool,
}

/// A social link in the contact section.
#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Contact section data.
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub blurb: String,
    pub email: String,
    pub location: String,
    pub socials: Vec<SocialLink>,
}

/// The whole profile: every section's static data.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub hero: Hero,
    pub about: About,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub contact: Contact,
}

impl Profile {
    /// Projects flagged as featured, in authored order.
    pub fn featured_projects(&self) -> Vec<&ProjectEntry> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// The remaining, secondary projects.
    pub fn secondary_projects(&self) -> Vec<&ProjectEntry> {
        self.projects.iter().filter(|p| !p.featured).collect()
    }

    /// The built-in profile dataset.
    pub fn standard() -> Self {
        Self {
            hero: Hero {
                name: "Jordan Reeve".to_string(),
                tagline: "Engineer by Trade".to_string(),
                summary: "Software engineer with a passion for leading teams, \
                          architecting scalable systems, and delivering software \
                          that makes a real-world impact."
                    .to_string(),
            },
            about: About {
                heading: "Hi - I'm Jordan".to_string(),
                paragraphs: vec![
                    "A software engineer with over a decade of experience and a \
                     genuine love for solving hard problems with clean, scalable \
                     code. I've spent much of my career leading engineering teams, \
                     architecting cloud-based systems, and mentoring developers."
                        .to_string(),
                    "I'm passionate about building software that actually matters: \
                     systems that perform under pressure, scale with demand, and \
                     are a joy to maintain. I enjoy sharing what I learn through \
                     writing and side projects."
                        .to_string(),
                    "Outside of code, you'll probably find me exploring new places \
                     by running, cycling or swimming."
                        .to_string(),
                ],
                expertise: vec![
                    ExpertiseArea {
                        label: "Languages & Frameworks".to_string(),
                        items: "Rust, C#, .NET, REST, SQL, JavaScript".to_string(),
                    },
                    ExpertiseArea {
                        label: "Architecture".to_string(),
                        items: "Microservices, Distributed Systems, Event-Driven \
                                Architecture, DDD, TDD"
                            .to_string(),
                    },
                    ExpertiseArea {
                        label: "Data & Messaging".to_string(),
                        items: "PostgreSQL, SQL Server, MongoDB, Kafka, ElasticSearch".to_string(),
                    },
                    ExpertiseArea {
                        label: "Cloud & DevOps".to_string(),
                        items: "AWS, Azure, Docker, Kubernetes, GitHub Actions".to_string(),
                    },
                ],
            },
            experience: vec![
                ExperienceEntry {
                    title: "Lead Engineer / Architect".to_string(),
                    company: "Brightline Media, London, UK".to_string(),
                    period: "2018 - Present".to_string(),
                    details: vec![
                        "Lead the design and delivery of high-scale services in the \
                         digital advertising space, including a storefront platform \
                         and the core master-data services behind it."
                            .to_string(),
                        "Champion engineering practices across a cross-functional \
                         team, from test automation frameworks to delivery \
                         pipelines."
                            .to_string(),
                    ],
                    recognitions: vec![
                        "Awarded Engineer of the Year for technical excellence.".to_string(),
                    ],
                    technologies: vec![
                        ".NET Core".to_string(),
                        "C#".to_string(),
                        "AWS".to_string(),
                        "SQL Server".to_string(),
                        "Docker".to_string(),
                        "Kubernetes".to_string(),
                    ],
                },
                ExperienceEntry {
                    title: "Senior Software Engineer".to_string(),
                    company: "Harwell & Grace".to_string(),
                    period: "2015 - 2018".to_string(),
                    details: vec![
                        "Led the development of a content platform, providing \
                         technical direction across multiple teams with a focus on \
                         scalable architecture, high test coverage, and continuous \
                         delivery."
                            .to_string(),
                    ],
                    recognitions: vec![],
                    technologies: vec![
                        "ASP.NET MVC".to_string(),
                        "SQL Server".to_string(),
                        "Lucene".to_string(),
                    ],
                },
                ExperienceEntry {
                    title: "Software Engineer".to_string(),
                    company: "Nortide Retail".to_string(),
                    period: "2012 - 2015".to_string(),
                    details: vec![
                        "Developed e-commerce features such as checkout and payment \
                         integration, and led UI and performance improvements in a \
                         fast-paced retail environment."
                            .to_string(),
                    ],
                    recognitions: vec![],
                    technologies: vec![
                        "ASP.NET MVC".to_string(),
                        "KnockoutJS".to_string(),
                        "SQL Server".to_string(),
                    ],
                },
            ],
            education: vec![EducationEntry {
                title: "BSc in Computer Science".to_string(),
                institution: "University of Westbrook".to_string(),
                period: "2008 - 2012".to_string(),
                description: String::new(),
                grade: "Top of class in the Software Engineering course".to_string(),
            }],
            certifications: vec![
                CertificationEntry {
                    title: "Kubernetes Essential Training: Application Development".to_string(),
                    institution: "LinkedIn".to_string(),
                    period: "2025".to_string(),
                    description: "Taking Kubernetes knowledge from theory to practice: \
                                  developing and running real-world applications."
                        .to_string(),
                    badge: "Professional Level".to_string(),
                },
                CertificationEntry {
                    title: "MongoDB Basics".to_string(),
                    institution: "MongoDB".to_string(),
                    period: "2019".to_string(),
                    description: "Core strengths, ideal use cases, and the feature set \
                                  for storing, accessing and securing data."
                        .to_string(),
                    badge: "Completed".to_string(),
                },
            ],
            projects: vec![
                ProjectEntry {
                    title: "MindLog".to_string(),
                    description: "AI-powered knowledge base: Markdown notes parsed, \
                                  embedded and queryable through a vector database."
                        .to_string(),
                    image: Some("images/mindlog.jpg".to_string()),
                    technologies: vec![
                        "Vector Databases".to_string(),
                        "MCP Servers".to_string(),
                        "LLMs".to_string(),
                    ],
                    live_url: None,
                    repo_url: "https://github.com/folio-site/mindlog".to_string(),
                    featured: true,
                },
                ProjectEntry {
                    title: "Navora".to_string(),
                    description: "A fictional logistics company with a fleet of delivery \
                                  vehicles under real-time monitoring; a project to \
                                  simulate the full lifecycle of a cloud-native system."
                        .to_string(),
                    image: Some("images/navora.jpg".to_string()),
                    technologies: vec![
                        "Software Architecture".to_string(),
                        "Serverless".to_string(),
                        "AWS".to_string(),
                    ],
                    live_url: None,
                    repo_url: "https://github.com/folio-site/navora".to_string(),
                    featured: true,
                },
                ProjectEntry {
                    title: "SQS Message Dispatcher".to_string(),
                    description: "Library to dispatch SQS messages.".to_string(),
                    image: Some("images/sqs.jpg".to_string()),
                    technologies: vec![
                        "AWS".to_string(),
                        "AWS SQS".to_string(),
                        "Cloud".to_string(),
                    ],
                    live_url: Some("https://www.nuget.org/packages/SQSMessageDispatcher".to_string()),
                    repo_url: "https://github.com/folio-site/sqs-dispatcher".to_string(),
                    featured: false,
                },
            ],
            contact: Contact {
                blurb: "I'm always interested in discussing new opportunities, \
                        innovative projects, or just having a conversation about \
                        technology and software architecture."
                    .to_string(),
                email: "jordan@reeve.dev".to_string(),
                location: "London, UK".to_string(),
                socials: vec![
                    SocialLink {
                        label: "GitHub".to_string(),
                        url: "https://github.com/folio-site".to_string(),
                    },
                    SocialLink {
                        label: "LinkedIn".to_string(),
                        url: "https://www.linkedin.com/in/jordan-reeve".to_string(),
                    },
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn standard_profile_is_complete() {
        let profile = Profile::standard();

        assert!(!profile.hero.name.is_empty());
        assert!(!profile.about.paragraphs.is_empty());
        assert!(!profile.experience.is_empty());
        assert!(!profile.education.is_empty());
        assert!(!profile.projects.is_empty());
        assert!(!profile.contact.email.is_empty());
    }

    #[test]
    fn splits_featured_and_secondary_projects() {
        let profile = Profile::standard();

        let featured = profile.featured_projects();
        let secondary = profile.secondary_projects();

        assert_eq!(featured.len() + secondary.len(), profile.projects.len());
        assert!(featured.iter().all(|p| p.featured));
        assert!(secondary.iter().all(|p| !p.featured));
    }

    #[test]
    fn technology_lists_keep_authored_order() {
        let profile = Profile::standard();

        let techs = &profile.experience[0].technologies;
        assert_eq!(techs[0], ".NET Core");
        assert_eq!(techs[1], "C#");
    }
}
