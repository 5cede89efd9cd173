use crate::core::nav::NavState;
use crate::core::render::PageRenderer;
use crate::core::Storage;
use crate::domain::model::ContentRecord;
use crate::utils::error::Result;

pub const DEFAULT_FILE_NAME: &str = "index.html";

/// Renders a content record and writes the page through a [`Storage`].
pub struct SiteBuilder<'a, S: Storage> {
    storage: S,
    content: &'a ContentRecord,
    file_name: String,
}

impl<'a, S: Storage> SiteBuilder<'a, S> {
    pub fn new(storage: S, content: &'a ContentRecord) -> Self {
        Self {
            storage,
            content,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn render(&self, state: NavState) -> String {
        let (education, interests, projects) = self.content.unit_counts();
        tracing::debug!(
            "Rendering page: {} education, {} interests, {} projects, state {:?}",
            education,
            interests,
            projects,
            state
        );
        PageRenderer::new(self.content).render_to_string(state)
    }

    /// Writes the page and returns the path it was written to.
    pub fn run(&self, state: NavState) -> Result<String> {
        tracing::info!("Building page for {}", self.content.hero.name);
        let html = self.render(state);
        self.storage.write_file(&self.file_name, html.as_bytes())?;
        tracing::info!("Wrote {} bytes to {}", html.len(), self.file_name);
        Ok(self.file_name.clone())
    }

    /// Renders without writing and returns the document size in bytes.
    pub fn dry_run(&self, state: NavState) -> usize {
        let size = self.render(state).len();
        tracing::info!("Dry run: {} would be {} bytes", self.file_name, size);
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.borrow().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_run_writes_rendered_page() {
        let content = ContentRecord::sample();
        let builder = SiteBuilder::new(MockStorage::default(), &content).with_file_name("page.html");

        let path = builder.run(NavState::new()).unwrap();

        assert_eq!(path, "page.html");
        let written = String::from_utf8(builder.storage().get_file("page.html").unwrap()).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("Barbora Hudačková"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let content = ContentRecord::sample();
        let builder = SiteBuilder::new(MockStorage::default(), &content);

        let size = builder.dry_run(NavState::new());

        assert!(size > 0);
        assert!(builder.storage().get_file(DEFAULT_FILE_NAME).is_none());
    }
}
