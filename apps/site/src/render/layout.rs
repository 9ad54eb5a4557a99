use axum::http::StatusCode;
use maud::{html, Markup, DOCTYPE};

use crate::content::{FOOTER_TEXT, NAV_LINKS, SITE_DESCRIPTION};

/// The layout shell: a fixed header with the five navigation links, the page
/// content slot, and a fixed footer. Every page renders through this.
pub fn shell(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content=(SITE_DESCRIPTION);
                title { (title) }
                link rel="stylesheet" href="/styles.css";
            }
            body {
                header.site-header {
                    a.nav-brand href=(NAV_LINKS[0].href) { (NAV_LINKS[0].label) }
                    nav.site-nav {
                        @for link in &NAV_LINKS[1..] {
                            a.nav-link href=(link.href) { (link.label) }
                        }
                    }
                }
                main.site-content { (content) }
                footer.site-footer {
                    p { (FOOTER_TEXT) }
                }
            }
        }
    }
}

/// Error document rendered through the same shell, used for 404s and
/// unexpected failures.
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let reason = status.canonical_reason().unwrap_or("Error");
    shell(
        reason,
        html! {
            section.error-page {
                h1 { (status.as_u16()) " — " (reason) }
                p { (message) }
                a href="/" { "Back to the home page" }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_of(page: &str) -> &str {
        let start = page.find("<header").expect("header present");
        let end = page.find("</header>").expect("header closed");
        &page[start..end]
    }

    #[test]
    fn test_shell_renders_five_nav_links() {
        let page = shell("Test", html! { p { "hi" } }).into_string();
        let header = header_of(&page);
        assert_eq!(header.matches("<a ").count(), 5);
        assert_eq!(header.matches("nav-link").count(), 4);
        assert_eq!(header.matches("nav-brand").count(), 1);
    }

    #[test]
    fn test_shell_wraps_content_between_header_and_footer() {
        let page = shell("Test", html! { p { "marker-content" } }).into_string();
        let header = page.find("</header>").unwrap();
        let content = page.find("marker-content").unwrap();
        let footer = page.find("<footer").unwrap();
        assert!(header < content && content < footer);
    }

    #[test]
    fn test_error_page_carries_status_and_message() {
        let page = error_page(StatusCode::NOT_FOUND, "No page at /nope").into_string();
        assert!(page.contains("404"));
        assert!(page.contains("Not Found"));
        assert!(page.contains("No page at /nope"));
    }
}
