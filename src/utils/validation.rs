use crate::utils::error::{PortfolioError, Result};
use chrono::Datelike;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

static YEAR_RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})(?:\s*[-–]\s*(\d{4}|Present))?$").expect("year range pattern is valid")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> PortfolioError {
    PortfolioError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !EMAIL_PATTERN.is_match(value) {
        return Err(invalid(field_name, value, "Not an email address"));
    }
    Ok(())
}

/// Accepts `YYYY`, `YYYY - YYYY` and `YYYY - Present`. The start year may not
/// lie after the current year.
pub fn validate_year_range(field_name: &str, value: &str) -> Result<()> {
    let caps = YEAR_RANGE_PATTERN.captures(value.trim()).ok_or_else(|| {
        invalid(
            field_name,
            value,
            "Expected 'YYYY', 'YYYY - YYYY' or 'YYYY - Present'",
        )
    })?;

    let start: i32 = caps[1]
        .parse()
        .map_err(|_| invalid(field_name, value, "Start year is not a number"))?;
    let current_year = chrono::Local::now().year();
    if start > current_year {
        return Err(invalid(
            field_name,
            value,
            format!("Start year lies after {}", current_year),
        ));
    }

    if let Some(end) = caps.get(2).map(|m| m.as_str()) {
        if end != "Present" {
            let end: i32 = end
                .parse()
                .map_err(|_| invalid(field_name, value, "End year is not a number"))?;
            if end < start {
                return Err(invalid(field_name, value, "End year precedes start year"));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("contact.github", "https://github.com/someone").is_ok());
        assert!(validate_url("contact.github", "http://example.com").is_ok());
        assert!(validate_url("contact.github", "").is_err());
        assert!(validate_url("contact.github", "github.com/someone").is_err());
        assert!(validate_url("contact.github", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("contact.email", "barbora.hudackova@mail.muni.cz").is_ok());
        assert!(validate_email("contact.email", "no-at-sign.cz").is_err());
        assert!(validate_email("contact.email", "two@@signs.cz").is_err());
        assert!(validate_email("contact.email", "spaced out@mail.cz").is_err());
    }

    #[test]
    fn test_validate_year_range() {
        assert!(validate_year_range("year", "2022 - 2025").is_ok());
        assert!(validate_year_range("year", "2020 - Present").is_ok());
        assert!(validate_year_range("year", "2021").is_ok());
        assert!(validate_year_range("year", "2025 - 2022").is_err());
        assert!(validate_year_range("year", "9999 - Present").is_err());
        assert!(validate_year_range("year", "last year").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("hero.name", "Ada").is_ok());
        assert!(validate_non_empty_string("hero.name", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./dist").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }
}
