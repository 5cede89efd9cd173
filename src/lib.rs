pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::LocalStorage;
pub use crate::core::glyph::Glyph;
pub use crate::core::nav::{NavState, Section, SCROLL_THRESHOLD};
pub use crate::core::render::{MountedPage, PageRenderer};
pub use crate::core::site::SiteBuilder;
pub use crate::core::viewport::{ScrollSubscription, Viewport};
pub use crate::domain::model::ContentRecord;
pub use crate::utils::error::{PortfolioError, Result};
