use crate::utils::error::Result;

/// Where rendered pages end up.
pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
