use maud::{html, Markup};

use crate::content::{PROJECTS, PROJECTS_HEADING};
use crate::render::layout::shell;

/// The projects gallery: one card per project with screenshot, blurb, and a
/// GitHub link, in registry order.
pub fn projects_page() -> Markup {
    shell(
        PROJECTS_HEADING,
        html! {
            section.projects {
                h1 { (PROJECTS_HEADING) }
                div.card-grid {
                    @for project in &PROJECTS {
                        article.project-card {
                            img src=(project.image) alt=(project.alt.unwrap_or(project.name));
                            h2 { (project.name) }
                            p { (project.description) }
                            a.github-button href=(project.github_link)
                                target="_blank" rel="noopener noreferrer" {
                                "View on GitHub"
                            }
                        }
                    }
                }
            }
        },
    )
}
