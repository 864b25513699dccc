#![allow(dead_code)]
use homepage_editor_domain::{Category, Document, NewService, Service};

pub fn new_service(name: &str, href: &str, ping: &str) -> NewService {
    NewService {
        name: name.to_string(),
        href: href.to_string(),
        ping: ping.to_string(),
        icon: None,
        description: None,
    }
}

/// Two categories, the first with two services.
pub fn sample_document() -> Document {
    Document::new(vec![
        Category::new("dev")
            .with_service(
                Service::new("Gitea", "http://gitea.local", "http://gitea.local/healthz")
                    .with_icon("gitea.png")
                    .with_description("Source hosting"),
            )
            .with_service(Service::new(
                "Drone",
                "http://drone.local",
                "http://drone.local",
            )),
        Category::new("Media").with_service(Service::new(
            "Jellyfin",
            "http://jellyfin.local",
            "http://jellyfin.local/health",
        )),
    ])
}

pub fn category_names(document: &Document) -> Vec<&str> {
    document.categories.iter().map(|c| c.name.as_str()).collect()
}

pub fn service_names<'a>(document: &'a Document, category: &str) -> Vec<&'a str> {
    document
        .category(category)
        .map(|c| c.services.iter().map(|s| s.name.as_str()).collect())
        .unwrap_or_default()
}
