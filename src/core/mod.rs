pub mod glyph;
pub mod nav;
pub mod render;
pub mod site;
mod theme;
pub mod viewport;

pub use crate::domain::model::ContentRecord;
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
