use super::model::{
    About, AffiliationCard, Contact, ContentRecord, Education, Hero, Interest, Interests, Project,
    Projects, SiteMeta,
};

const MASTERS_ASSIGNMENT: &str = "Topic: Prediction Methods for GRB Time-Delay Analysis\n\n\
Objective: Small time delays in gamma-ray burst (GRB) signals may carry signatures of \
Planck-scale physics. This thesis aims to develop and evaluate a method that uses multiple \
information channels to generate predictive models of GRB timing. The resulting prediction \
errors will then be analyzed to identify systematic patterns that could indicate such \
fundamental-scale effects.";

fn s(text: &str) -> String {
    text.to_string()
}

impl ContentRecord {
    /// The built-in portfolio rendered when no content file is given.
    pub fn sample() -> Self {
        Self {
            site: SiteMeta {
                title: s("Barbora Hudačková | Astrophysics"),
                lang: s("en"),
                brand_suffix: s(".Space"),
            },
            hero: Hero {
                name: s("Barbora Hudačková"),
                title: s("Mgr. Astrophysics Student"),
                affiliation: s("Masaryk University"),
                location: s("Brno, Czech Republic"),
                tagline: s(
                    "Testing physics at the Planck scale through Gamma-Ray Burst analysis.",
                ),
                badge: Some(s("Astrophysics Portfolio")),
                primary_action: s("View Research"),
                secondary_action: s("Contact Me"),
            },
            about: About {
                title: s("About Me"),
                description: s(
                    "I am a graduate student at the Department of Theoretical Physics and \
                     Astrophysics at Masaryk University. My research focuses on high-energy \
                     astrophysics, specifically testing predictions of quantum gravity models \
                     using Gamma-Ray Bursts (GRBs).",
                ),
                education: vec![
                    Education {
                        degree: s("Mgr. in Astrophysics"),
                        school: s("Masaryk University, Faculty of Science"),
                        year: s("2025 - Present"),
                        details: Some(s(
                            "Focus on High Energy Astrophysics and Quantum Gravity Phenomenology.",
                        )),
                        thesis_title: None,
                        thesis_link: None,
                        thesis_assignment: Some(s(MASTERS_ASSIGNMENT)),
                    },
                    Education {
                        degree: s("Bc. in Astrophysics"),
                        school: s("Masaryk University, Faculty of Science"),
                        year: s("2022 - 2025"),
                        details: None,
                        thesis_title: Some(s("Analysis of time delay of gamma-ray bursts")),
                        thesis_link: Some(s("https://is.muni.cz/th/t13kj/")),
                        thesis_assignment: None,
                    },
                ],
                card: Some(AffiliationCard {
                    href: s("https://www.sci.muni.cz/"),
                    heading: s("MUNI"),
                    subheading: s("Faculty of Science"),
                    caption: s("Astrophysics"),
                }),
            },
            interests: Interests {
                title: s("Research Interests"),
                items: vec![
                    Interest {
                        icon: s("Atom"),
                        title: s("Quantum Gravity"),
                        description: s(
                            "Testing modifications of Einstein's gravity and broken Lorentz invariance.",
                        ),
                    },
                    Interest {
                        icon: s("Activity"),
                        title: s("Gamma-Ray Bursts"),
                        description: s(
                            "Analyzing time delays and spectral properties of GRB signals.",
                        ),
                    },
                    Interest {
                        icon: s("Clock"),
                        title: s("Time Delay Analysis"),
                        description: s(
                            "Developing algorithms to detect time lags in high-energy photon arrival.",
                        ),
                    },
                    Interest {
                        icon: s("Code"),
                        title: s("Computational Physics"),
                        description: s(
                            "Data reduction and statistical modeling of astrophysical datasets.",
                        ),
                    },
                ],
            },
            projects: Projects {
                title: s("Software & Projects"),
                items: vec![Project {
                    title: s("GRB Simulation Framework"),
                    kind: s("Bachelor Thesis Code"),
                    year: s("2025"),
                    description: s(
                        "A comprehensive simulation framework developed for my Bachelor's thesis. \
                         It models Gamma-Ray Burst light curves to analyze potential time delays \
                         and constrain Quantum Gravity energy scales.",
                    ),
                    link: Some(s("https://github.com/baarborka?tab=repositories")),
                }],
            },
            contact: Contact {
                title: s("Get in Touch"),
                blurb: Some(s(
                    "Interested in collaboration or discussing astrophysics? Feel free to reach out.",
                )),
                email: s("barbora.hudackova@mail.muni.cz"),
                linkedin: s("https://linkedin.com"),
                github: s("https://github.com/baarborka?tab=repositories"),
                footer_text: s("© 2025 Barbora Hudačková. Built with Rust & Maud."),
            },
        }
    }
}
