//! Inline SVG glyphs. Shapes follow the Lucide 24x24 outline set, so the page
//! loads no icon assets.

use maud::{html, Markup, PreEscaped};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Star,
    Telescope,
    Atom,
    Activity,
    Clock,
    Code,
    Book,
    Mail,
    Github,
    Linkedin,
    ExternalLink,
    GraduationCap,
    MapPin,
    ChevronDown,
    Menu,
    Close,
    FileText,
}

impl Glyph {
    /// Glyph for an interest icon identifier. Unknown identifiers get `Book`.
    pub fn resolve(name: &str) -> Glyph {
        match name {
            "Star" => Glyph::Star,
            "Telescope" => Glyph::Telescope,
            "Atom" => Glyph::Atom,
            "Activity" => Glyph::Activity,
            "Clock" => Glyph::Clock,
            "Code" => Glyph::Code,
            other => {
                tracing::debug!("Unknown icon '{}', using Book", other);
                Glyph::Book
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Glyph::Star => "star",
            Glyph::Telescope => "telescope",
            Glyph::Atom => "atom",
            Glyph::Activity => "activity",
            Glyph::Clock => "clock",
            Glyph::Code => "code",
            Glyph::Book => "book",
            Glyph::Mail => "mail",
            Glyph::Github => "github",
            Glyph::Linkedin => "linkedin",
            Glyph::ExternalLink => "external-link",
            Glyph::GraduationCap => "graduation-cap",
            Glyph::MapPin => "map-pin",
            Glyph::ChevronDown => "chevron-down",
            Glyph::Menu => "menu",
            Glyph::Close => "x",
            Glyph::FileText => "file-text",
        }
    }

    fn shapes(self) -> &'static str {
        match self {
            Glyph::Star => r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
            Glyph::Telescope => r#"<path d="m10.07 11.05 4.86-1.3"/><path d="m4.69 12.53 9.9-9.9 4.24 4.24-9.9 9.9z"/><path d="m13 16 3 6"/><path d="m11 16-3 6"/><circle cx="12" cy="15" r="1"/>"#,
            Glyph::Atom => r#"<circle cx="12" cy="12" r="1"/><path d="M20.2 20.2c2.04-2.03.02-7.36-4.5-11.9-4.54-4.52-9.87-6.54-11.9-4.5-2.04 2.03-.02 7.36 4.5 11.9 4.54 4.52 9.87 6.54 11.9 4.5Z"/><path d="M15.7 15.7c4.52-4.54 6.54-9.87 4.5-11.9-2.03-2.04-7.36-.02-11.9 4.5-4.52 4.54-6.54 9.87-4.5 11.9 2.03 2.04 7.36.02 11.9-4.5Z"/>"#,
            Glyph::Activity => r#"<polyline points="22 12 18 12 15 21 9 3 6 12 2 12"/>"#,
            Glyph::Clock => r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
            Glyph::Code => r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
            Glyph::Book => r#"<path d="M4 19.5A2.5 2.5 0 0 1 6.5 17H20"/><path d="M6.5 2H20v20H6.5A2.5 2.5 0 0 1 4 19.5v-15A2.5 2.5 0 0 1 6.5 2z"/>"#,
            Glyph::Mail => r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            Glyph::Github => r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            Glyph::Linkedin => r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
            Glyph::ExternalLink => r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/><polyline points="15 3 21 3 21 9"/><line x1="10" y1="14" x2="21" y2="3"/>"#,
            Glyph::GraduationCap => r#"<path d="M22 10v6M2 10l10-5 10 5-10 5z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#,
            Glyph::MapPin => r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#,
            Glyph::ChevronDown => r#"<polyline points="6 9 12 15 18 9"/>"#,
            Glyph::Menu => r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#,
            Glyph::Close => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Glyph::FileText => r#"<path d="M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z"/><polyline points="14 2 14 8 20 8"/><line x1="16" x2="8" y1="13" y2="13"/><line x1="16" x2="8" y1="17" y2="17"/>"#,
        }
    }

    pub fn svg(self, size: u32) -> Markup {
        html! {
            svg class={ "icon icon-" (self.name()) } xmlns="http://www.w3.org/2000/svg"
                width=(size) height=(size) viewBox="0 0 24 24" fill="none"
                stroke="currentColor" stroke-width="2" stroke-linecap="round"
                stroke-linejoin="round" aria-hidden="true" {
                (PreEscaped(self.shapes()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_identifiers() {
        assert_eq!(Glyph::resolve("Star"), Glyph::Star);
        assert_eq!(Glyph::resolve("Atom"), Glyph::Atom);
        assert_eq!(Glyph::resolve("Activity"), Glyph::Activity);
        assert_eq!(Glyph::resolve("Clock"), Glyph::Clock);
        assert_eq!(Glyph::resolve("Code"), Glyph::Code);
        assert_eq!(Glyph::resolve("Telescope"), Glyph::Telescope);
    }

    #[test]
    fn test_resolve_falls_back_to_book() {
        for name in ["", "atom", "Rocket", "Book", "Menu", " Star"] {
            assert_eq!(Glyph::resolve(name), Glyph::Book, "identifier {:?}", name);
        }
    }

    #[test]
    fn test_svg_carries_size_and_class() {
        let svg = Glyph::Clock.svg(32).into_string();
        assert!(svg.starts_with("<svg class=\"icon icon-clock\""));
        assert!(svg.contains("width=\"32\""));
        assert!(svg.contains("<circle cx=\"12\" cy=\"12\" r=\"10\"/>"));
    }
}
