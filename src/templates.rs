//! The fixed catalog of website templates.

use serde::Serialize;

/// A website template descriptor.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Template {
    /// The template's unique ID.
    pub id: &'static str,

    /// The template's display name.
    pub name: &'static str,

    /// A one-sentence description of the template.
    pub description: &'static str,

    /// The path to the template's preview image.
    pub preview_url: &'static str,

    /// The template's category.
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Every available template, in display order.
pub const CATALOG: &[Template] = &[
    Template {
        id: "landing-page",
        name: "Landing Page",
        description: "A sleek single-page website perfect for showcasing your product or service",
        preview_url: "/templates/landing-page.png",
        kind: "landing",
    },
    Template {
        id: "multi-page",
        name: "Multi-Page Website",
        description: "A complete website with navigation menu and multiple pages",
        preview_url: "/templates/multi-page.png",
        kind: "multi-page",
    },
    Template {
        id: "portfolio",
        name: "Portfolio",
        description: "Showcase your work with this elegant portfolio template",
        preview_url: "/templates/portfolio.png",
        kind: "portfolio",
    },
    Template {
        id: "blog",
        name: "Blog",
        description: "Share your thoughts with a clean, reader-friendly blog design",
        preview_url: "/templates/blog.png",
        kind: "blog",
    },
    Template {
        id: "dashboard",
        name: "Dashboard",
        description: "Data-focused layout ideal for analytics and reporting",
        preview_url: "/templates/dashboard.png",
        kind: "dashboard",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_is_non_empty_and_complete() {
        assert!(!CATALOG.is_empty(), "catalog should have templates");

        for template in CATALOG {
            assert!(!template.id.is_empty(), "template ID should be set");
            assert!(!template.name.is_empty(), "template name should be set");
            assert!(
                !template.description.is_empty(),
                "template description should be set"
            );
            assert!(
                !template.preview_url.is_empty(),
                "template preview URL should be set"
            );
            assert!(!template.kind.is_empty(), "template kind should be set");
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<&str> = CATALOG.iter().map(|template| template.id).collect();

        assert_eq!(ids.len(), CATALOG.len(), "template IDs should be unique");
    }

    #[test]
    fn catalog_order_is_stable() {
        assert_eq!(
            CATALOG
                .first()
                .expect("catalog should have templates")
                .id,
            "landing-page"
        );
    }
}
