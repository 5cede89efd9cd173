use serde::{Deserialize, Deserializer, Serialize};

/// Marker the legacy content files use for "this project has no public link".
pub const NO_LINK_SENTINEL: &str = "#";

/// All text and links shown on the page. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    #[serde(default)]
    pub site: SiteMeta,
    pub hero: Hero,
    pub about: About,
    pub interests: Interests,
    pub projects: Projects,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_brand_suffix")]
    pub brand_suffix: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            lang: default_lang(),
            brand_suffix: default_brand_suffix(),
        }
    }
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_brand_suffix() -> String {
    ".Space".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub title: String,
    #[serde(alias = "university")]
    pub affiliation: String,
    pub location: String,
    pub tagline: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub badge: Option<String>,
    pub primary_action: String,
    pub secondary_action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub card: Option<AffiliationCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub details: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub thesis_title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub thesis_link: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub thesis_assignment: Option<String>,
}

/// The linked institution tile shown beside the education list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliationCard {
    pub href: String,
    pub heading: String,
    pub subheading: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interests {
    pub title: String,
    #[serde(default)]
    pub items: Vec<Interest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    /// Resolved through `Glyph::resolve`; unknown names fall back to a book.
    pub icon: String,
    pub title: String,
    #[serde(alias = "desc")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projects {
    pub title: String,
    #[serde(default)]
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub year: String,
    pub description: String,
    #[serde(default, deserialize_with = "project_link")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub title: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub blurb: Option<String>,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub footer_text: String,
}

/// Treats empty or whitespace-only strings as absent.
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn project_link<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = optional_text(deserializer)?;
    Ok(value.filter(|s| s.trim() != NO_LINK_SENTINEL))
}

impl ContentRecord {
    /// Record counts as `(education, interests, projects)`.
    pub fn unit_counts(&self) -> (usize, usize, usize) {
        (
            self.about.education.len(),
            self.interests.items.len(),
            self.projects.items.len(),
        )
    }
}
