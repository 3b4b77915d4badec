//! Base layout component for the web UI.
//!
//! Provides the HTML skeleton shared by every page.

use maud::{html, Markup, DOCTYPE};

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Modelos" } };
/// let page = BaseLayout::new("Modelos").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="screen">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="pt-BR" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) " - Modelos de Redação" }
                    link rel="stylesheet" href="/static/css/style.css";
                }
                body {
                    main class="screen" {
                        (content)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_wraps_content() {
        let html = BaseLayout::new("Modelos")
            .render(html! { p { "conteúdo" } })
            .into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Modelos - Modelos de Redação</title>"));
        assert!(html.contains("/static/css/style.css"));
        assert!(html.contains("<main class=\"screen\"><p>conteúdo</p></main>"));
    }
}
