/// Scroll offset past which the navigation bar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// In-page sections reachable from the navigation bar, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Research,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Research,
        Section::Projects,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Research => "research",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Research => "Interests",
            Section::Projects => "Software",
            Section::Contact => "Contact",
        }
    }
}

/// The page's local interactive state. Both flags start false and are
/// independent of each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following any menu link closes the overlay.
    pub fn select_link(&mut self, section: Section) {
        tracing::debug!("Navigating to #{}", section.anchor());
        self.menu_open = false;
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }
}

/// Brand text for the navigation bar: the second word of the name, or the
/// whole name when it is a single word.
pub fn brand_name(full_name: &str) -> &str {
    let mut words = full_name.split_whitespace();
    let first = words.next();
    words.next().or(first).unwrap_or(full_name)
}
