pub mod content_file;

#[cfg(feature = "cli")]
use crate::core::nav::NavState;
#[cfg(feature = "cli")]
use crate::domain::model::ContentRecord;
#[cfg(feature = "cli")]
use crate::utils::error::{PortfolioError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-page")]
#[command(about = "Render a single-page portfolio to static HTML")]
pub struct CliConfig {
    /// TOML content file; the built-in portfolio is used when omitted
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    #[arg(long, default_value = "./dist")]
    pub output_path: String,

    #[arg(long, default_value = crate::core::site::DEFAULT_FILE_NAME)]
    pub file_name: String,

    /// Render with the navigation overlay open
    #[arg(long)]
    pub menu_open: bool,

    /// Vertical offset the page is rendered at; past 50 the nav turns solid
    #[arg(long, default_value = "0")]
    pub scroll_offset: f64,

    /// Print the effective content record as JSON and exit
    #[arg(long)]
    pub dump_content: bool,

    /// Render without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn initial_state(&self) -> NavState {
        let mut state = NavState::new();
        if self.menu_open {
            state.toggle_menu();
        }
        state.on_scroll(self.scroll_offset);
        state
    }

    /// Loads and validates the content file, or returns the built-in record.
    pub fn load_content(&self) -> Result<ContentRecord> {
        match &self.content {
            Some(path) => {
                let record = ContentRecord::from_file(path)?;
                record.validate()?;
                Ok(record)
            }
            None => Ok(ContentRecord::sample()),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_path("file_name", &self.file_name)?;

        if !self.scroll_offset.is_finite() || self.scroll_offset < 0.0 {
            return Err(PortfolioError::InvalidConfigValueError {
                field: "scroll_offset".to_string(),
                value: self.scroll_offset.to_string(),
                reason: "Offset must be a finite, non-negative number".to_string(),
            });
        }

        Ok(())
    }
}
