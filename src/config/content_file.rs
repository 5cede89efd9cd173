use crate::domain::model::ContentRecord;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_url, validate_year_range, Validate,
};
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

impl ContentRecord {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Reading content file {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Replaces `${VAR}` with the variable's value. Unset variables stay literal.
fn substitute_env_vars(content: &str) -> String {
    ENV_PLACEHOLDER
        .replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}

impl Validate for ContentRecord {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("hero.name", &self.hero.name)?;
        validate_non_empty_string("about.title", &self.about.title)?;
        validate_non_empty_string("interests.title", &self.interests.title)?;
        validate_non_empty_string("projects.title", &self.projects.title)?;
        validate_non_empty_string("contact.title", &self.contact.title)?;

        for (i, entry) in self.about.education.iter().enumerate() {
            validate_year_range(&format!("about.education[{}].year", i), &entry.year)?;
            if let Some(link) = &entry.thesis_link {
                validate_url(&format!("about.education[{}].thesis_link", i), link)?;
            }
        }

        if let Some(card) = &self.about.card {
            validate_url("about.card.href", &card.href)?;
        }

        for (i, project) in self.projects.items.iter().enumerate() {
            if let Some(link) = &project.link {
                validate_url(&format!("projects.items[{}].link", i), link)?;
            }
        }

        validate_email("contact.email", &self.contact.email)?;
        validate_url("contact.linkedin", &self.contact.linkedin)?;
        validate_url("contact.github", &self.contact.github)?;

        Ok(())
    }
}
