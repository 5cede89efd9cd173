use portfolio_page::domain::model::{Education, Project};
use portfolio_page::{ContentRecord, NavState, PageRenderer};

fn render(content: &ContentRecord) -> String {
    PageRenderer::new(content).render_to_string(NavState::new())
}

fn education(thesis_link: Option<&str>) -> Education {
    Education {
        degree: "Bc. in Physics".to_string(),
        school: "Faculty of Science".to_string(),
        year: "2019 - 2022".to_string(),
        details: None,
        thesis_title: Some("Dust in the disk".to_string()),
        thesis_link: thesis_link.map(str::to_string),
        thesis_assignment: None,
    }
}

fn project(title: &str, link: Option<&str>) -> Project {
    Project {
        title: title.to_string(),
        kind: "Library".to_string(),
        year: "2024".to_string(),
        description: "Fits light curves.".to_string(),
        link: link.map(str::to_string),
    }
}

#[test]
fn test_sample_page_structure() {
    let content = ContentRecord::sample();
    let html = render(&content);

    assert_eq!(html.matches("<h1").count(), 1);
    assert!(html.contains(&format!(
        "<h1 class=\"hero-name\">{}</h1>",
        content.hero.name
    )));

    for anchor in ["about", "research", "projects", "contact"] {
        assert_eq!(
            html.matches(&format!("<section class=\"{}\" id=\"{}\">", anchor, anchor)).count(),
            1,
            "section #{}",
            anchor
        );
    }

    assert_eq!(html.matches("<article class=\"education-entry\">").count(), 2);
    assert_eq!(html.matches("<article class=\"interest-card\">").count(), 4);
    assert_eq!(html.matches("<article class=\"project-card\">").count(), 1);
}

#[test]
fn test_sections_in_fixed_order() {
    let html = render(&ContentRecord::sample());
    let positions: Vec<usize> = [
        "id=\"site-nav\"",
        "id=\"top\"",
        "id=\"about\"",
        "id=\"research\"",
        "id=\"projects\"",
        "id=\"contact\"",
    ]
    .iter()
    .map(|marker| html.find(marker).unwrap())
    .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_units_keep_input_order() {
    let content = ContentRecord::sample();
    let html = render(&content);

    let mut last = 0;
    for item in &content.interests.items {
        let at = html.find(&format!("<h3>{}</h3>", item.title)).unwrap();
        assert!(at > last, "{} out of order", item.title);
        last = at;
    }
}

#[test]
fn test_thesis_link_affordance() {
    let mut content = ContentRecord::sample();
    content.about.education = vec![
        education(None),
        education(Some("https://is.muni.cz/th/abc/")),
        education(None),
    ];

    let html = render(&content);

    assert_eq!(html.matches("View Thesis").count(), 1);
    assert_eq!(
        html.matches("<a class=\"thesis-link\" href=\"https://is.muni.cz/th/abc/\"").count(),
        1
    );
}

#[test]
fn test_sample_thesis_affordances() {
    let html = render(&ContentRecord::sample());

    assert_eq!(html.matches("View Thesis").count(), 1);
    assert!(html.contains("href=\"https://is.muni.cz/th/t13kj/\""));
    assert_eq!(html.matches("<div class=\"assignment\">").count(), 1);
    assert_eq!(html.matches("<p class=\"entry-details\">").count(), 1);
}

#[test]
fn test_thesis_row_without_title_or_link_is_omitted() {
    let mut content = ContentRecord::sample();
    let mut bare = education(None);
    bare.thesis_title = None;
    content.about.education = vec![bare];

    let html = render(&content);

    assert!(!html.contains("<div class=\"thesis\">"));
    assert!(!html.contains("<span class=\"thesis-title\">"));
}

#[test]
fn test_project_link_affordance() {
    let mut content = ContentRecord::sample();
    content.projects.items = vec![
        project("Private", None),
        project("Public", Some("https://github.com/someone/fitter")),
    ];

    let html = render(&content);

    assert_eq!(html.matches("<a class=\"project-link\"").count(), 1);
    assert!(html.contains("<a class=\"project-link\" href=\"https://github.com/someone/fitter\">"));
}

#[test]
fn test_project_sentinel_from_toml_suppresses_link() {
    let mut content = ContentRecord::sample();
    let parsed: Project = toml::from_str(
        r##"
title = "Scratch"
type = "Notes"
year = "2023"
description = "Unpublished."
link = "#"
"##,
    )
    .unwrap();
    content.projects.items = vec![parsed];

    let html = render(&content);

    assert!(!html.contains("<a class=\"project-link\""));
    assert!(!html.contains("href=\"#\""));
}

#[test]
fn test_contact_links() {
    let content = ContentRecord::sample();
    let html = render(&content);

    assert!(html.contains("href=\"mailto:barbora.hudackova@mail.muni.cz\""));
    assert!(html.contains(&format!("href=\"{}\" aria-label=\"LinkedIn\"", content.contact.linkedin)));
    assert!(html.contains("href=\"https://github.com/baarborka?tab=repositories\" aria-label=\"GitHub\""));
    assert!(html.contains(&content.contact.footer_text));
}

#[test]
fn test_unknown_icon_renders_book() {
    let mut content = ContentRecord::sample();
    content.interests.items.truncate(1);
    content.interests.items[0].icon = "Nebula".to_string();

    let html = render(&content);
    let grid = &html[html.find("<div class=\"interest-grid\">").unwrap()..];

    assert!(grid.contains("icon icon-book"));
    assert!(!grid[..grid.find("</article>").unwrap()].contains("icon-atom"));
}

#[test]
fn test_rendering_is_idempotent() {
    let content = ContentRecord::sample();
    let renderer = PageRenderer::new(&content);
    let state = NavState {
        menu_open: true,
        scrolled: false,
    };

    assert_eq!(renderer.render_to_string(state), renderer.render_to_string(state));
    assert_eq!(render(&content), render(&content.clone()));
}

#[test]
fn test_nav_classes_follow_state() {
    let content = ContentRecord::sample();
    let renderer = PageRenderer::new(&content);

    let closed = renderer.render_to_string(NavState::new());
    assert!(closed.contains("<nav class=\"site-nav\" id=\"site-nav\">"));
    assert!(closed.contains("<div class=\"mobile-menu\" id=\"mobile-menu\" hidden>"));
    assert!(closed.contains("aria-expanded=\"false\""));

    let open = renderer.render_to_string(NavState {
        menu_open: true,
        scrolled: true,
    });
    assert!(open.contains("<nav class=\"site-nav scrolled\" id=\"site-nav\">"));
    assert!(open.contains("<div class=\"mobile-menu\" id=\"mobile-menu\">"));
    assert!(open.contains("<span class=\"glyph-open\"><svg class=\"icon icon-x\""));
    assert!(open.contains("<span class=\"glyph-closed\" hidden><svg class=\"icon icon-menu\""));
    assert_eq!(open.matches("<a class=\"nav-link mobile\"").count(), 4);
}
