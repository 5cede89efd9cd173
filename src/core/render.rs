//! HTML rendering of a [`ContentRecord`].
//!
//! Sections always appear in the same order: navigation, hero, about,
//! research, projects, contact. Every collection element becomes one
//! `<article>`, in input order. Absent optional fields emit nothing.

use std::cell::Cell;
use std::rc::Rc;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::glyph::Glyph;
use super::nav::{brand_name, NavState, Section};
use super::theme;
use super::viewport::{ScrollSubscription, Viewport};
use crate::domain::model::{AffiliationCard, ContentRecord, Education, Interest, Project};

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email)
}

#[derive(Debug, Clone, Copy)]
pub struct PageRenderer<'a> {
    content: &'a ContentRecord,
}

impl<'a> PageRenderer<'a> {
    pub fn new(content: &'a ContentRecord) -> Self {
        Self { content }
    }

    pub fn render(&self, state: NavState) -> Markup {
        let site = &self.content.site;
        html! {
            (DOCTYPE)
            html lang=(site.lang) {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (site.title) }
                    style { (PreEscaped(theme::STYLESHEET)) }
                }
                body {
                    div.backdrop aria-hidden="true" {
                        div.star.s1 {}
                        div.star.s2 {}
                        div.star.s3 {}
                        div.star.s4 {}
                    }
                    (self.navigation(state))
                    main {
                        (self.hero())
                        (self.about())
                        (self.research())
                        (self.projects())
                        (self.contact())
                    }
                    script { (PreEscaped(theme::script())) }
                }
            }
        }
    }

    pub fn render_to_string(&self, state: NavState) -> String {
        self.render(state).into_string()
    }

    /// Attaches the page to a viewport. The returned page owns its scroll
    /// listener; dropping it removes the listener.
    pub fn mount(&self, viewport: &Rc<Viewport>) -> MountedPage<'a> {
        let state = Rc::new(Cell::new(NavState::new()));
        let listener_state = Rc::clone(&state);
        let subscription = viewport.subscribe(move |offset| {
            let mut next = listener_state.get();
            next.on_scroll(offset);
            listener_state.set(next);
        });

        MountedPage {
            renderer: *self,
            state,
            _scroll: subscription,
        }
    }

    fn navigation(&self, state: NavState) -> Markup {
        let site = &self.content.site;
        html! {
            nav.site-nav.scrolled[state.scrolled] id="site-nav" {
                div.nav-inner {
                    div.brand {
                        (brand_name(&self.content.hero.name))
                        span.accent { (site.brand_suffix) }
                    }
                    div.nav-links {
                        @for section in Section::ALL {
                            a.nav-link href=(section.href()) { (section.label()) }
                        }
                    }
                    button.menu-toggle id="menu-toggle" type="button" aria-controls="mobile-menu"
                        aria-expanded=(if state.menu_open { "true" } else { "false" }) {
                        span.glyph-open hidden[!state.menu_open] { (Glyph::Close.svg(24)) }
                        span.glyph-closed hidden[state.menu_open] { (Glyph::Menu.svg(24)) }
                    }
                }
                div.mobile-menu id="mobile-menu" hidden[!state.menu_open] {
                    @for section in Section::ALL {
                        a.nav-link.mobile href=(section.href()) { (section.label()) }
                    }
                }
            }
        }
    }

    fn hero(&self) -> Markup {
        let hero = &self.content.hero;
        html! {
            section.hero id="top" {
                div.hero-inner {
                    @if let Some(badge) = &hero.badge {
                        div.badge {
                            (Glyph::Star.svg(14))
                            span { (badge) }
                        }
                    }
                    h1.hero-name { (hero.name) }
                    p.hero-title { (hero.title) }
                    div.hero-meta {
                        (Glyph::MapPin.svg(16))
                        span { (hero.affiliation) ", " (hero.location) }
                    }
                    p.tagline { (hero.tagline) }
                    div.cta {
                        a.button.primary href=(Section::Research.href()) { (hero.primary_action) }
                        a.button.secondary href=(Section::Contact.href()) { (hero.secondary_action) }
                    }
                }
                div.scroll-hint aria-hidden="true" { (Glyph::ChevronDown.svg(24)) }
            }
        }
    }

    fn about(&self) -> Markup {
        let about = &self.content.about;
        html! {
            section.about id=(Section::About.anchor()) {
                div.container.two-col {
                    div {
                        h2.section-title {
                            span.rule {}
                            (about.title)
                        }
                        p.lead { (about.description) }
                        div.education {
                            @for entry in &about.education {
                                (education_entry(entry))
                            }
                        }
                    }
                    @if let Some(card) = &about.card {
                        (affiliation_card(card))
                    }
                }
            }
        }
    }

    fn research(&self) -> Markup {
        let interests = &self.content.interests;
        html! {
            section.research id=(Section::Research.anchor()) {
                div.container {
                    div.section-head {
                        h2 { (interests.title) }
                        div.rule {}
                    }
                    div.interest-grid {
                        @for item in &interests.items {
                            (interest_card(item))
                        }
                    }
                }
            }
        }
    }

    fn projects(&self) -> Markup {
        let projects = &self.content.projects;
        html! {
            section.projects id=(Section::Projects.anchor()) {
                div.container {
                    h2.section-title { (projects.title) }
                    div.project-list {
                        @for project in &projects.items {
                            (project_card(project))
                        }
                    }
                }
            }
        }
    }

    fn contact(&self) -> Markup {
        let contact = &self.content.contact;
        html! {
            section.contact id=(Section::Contact.anchor()) {
                div.container.narrow {
                    h2 { (contact.title) }
                    @if let Some(blurb) = &contact.blurb {
                        p.blurb { (blurb) }
                    }
                    div.contact-links {
                        a.email-link href=(mailto_href(&contact.email)) {
                            (Glyph::Mail.svg(20))
                            span { (contact.email) }
                        }
                        div.profile-links {
                            a.profile-link href=(contact.linkedin) aria-label="LinkedIn" {
                                (Glyph::Linkedin.svg(24))
                            }
                            a.profile-link href=(contact.github) aria-label="GitHub" {
                                (Glyph::Github.svg(24))
                            }
                        }
                    }
                    footer.site-footer {
                        p { (contact.footer_text) }
                    }
                }
            }
        }
    }
}

fn education_entry(entry: &Education) -> Markup {
    let has_thesis = entry.thesis_title.is_some() || entry.thesis_link.is_some();
    html! {
        article.education-entry {
            div.entry-icon { (Glyph::GraduationCap.svg(20)) }
            div.entry-body {
                h4 { (entry.degree) }
                div.entry-meta { (entry.school) " • " (entry.year) }
                @if let Some(details) = &entry.details {
                    p.entry-details { (details) }
                }
                @if has_thesis {
                    div.thesis {
                        (Glyph::Book.svg(14))
                        @if let Some(title) = &entry.thesis_title {
                            span.thesis-title { (title) }
                        }
                        @if let Some(link) = &entry.thesis_link {
                            a.thesis-link href=(link) target="_blank" rel="noopener noreferrer" {
                                "View Thesis "
                                (Glyph::ExternalLink.svg(10))
                            }
                        }
                    }
                }
                @if let Some(assignment) = &entry.thesis_assignment {
                    div.assignment {
                        div.assignment-label {
                            (Glyph::FileText.svg(12))
                            span { "Thesis Assignment" }
                        }
                        p.assignment-text { (assignment) }
                    }
                }
            }
        }
    }
}

fn affiliation_card(card: &AffiliationCard) -> Markup {
    html! {
        a.affiliation-card href=(card.href) target="_blank" rel="noopener noreferrer" {
            (Glyph::Atom.svg(80))
            div.card-body {
                div.card-heading { (card.heading) }
                div.card-subheading { (card.subheading) }
                div.card-caption { (card.caption) }
            }
        }
    }
}

fn interest_card(item: &Interest) -> Markup {
    html! {
        article.interest-card {
            div.interest-icon { (Glyph::resolve(&item.icon).svg(32)) }
            h3 { (item.title) }
            p { (item.description) }
        }
    }
}

fn project_card(project: &Project) -> Markup {
    html! {
        article.project-card {
            div.project-body {
                div.project-meta {
                    span.project-kind { (project.kind) }
                    span.project-year { (project.year) }
                }
                h3 { (project.title) }
                p { (project.description) }
            }
            @if let Some(link) = &project.link {
                a.project-link href=(link) {
                    "View "
                    (Glyph::ExternalLink.svg(16))
                }
            }
        }
    }
}

/// A page attached to a [`Viewport`], holding its own interactive state.
pub struct MountedPage<'a> {
    renderer: PageRenderer<'a>,
    state: Rc<Cell<NavState>>,
    _scroll: ScrollSubscription,
}

impl<'a> MountedPage<'a> {
    pub fn state(&self) -> NavState {
        self.state.get()
    }

    pub fn toggle_menu(&self) {
        self.update(NavState::toggle_menu);
    }

    pub fn select_link(&self, section: Section) {
        self.update(|state| state.select_link(section));
    }

    pub fn render(&self) -> Markup {
        self.renderer.render(self.state())
    }

    fn update(&self, apply: impl FnOnce(&mut NavState)) {
        let mut next = self.state.get();
        apply(&mut next);
        self.state.set(next);
    }
}
