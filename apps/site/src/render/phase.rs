use maud::{html, Markup};

use crate::content::PhaseArticle;
use crate::render::layout::shell;

/// A single life-phase article: cover image, title, then every paragraph in
/// its authored order.
pub fn phase_page(article: &PhaseArticle) -> Markup {
    shell(
        article.title,
        html! {
            article.phase-article {
                img.article-cover src=(article.image) alt=(article.alt);
                div.article-body {
                    h1 { (article.title) }
                    @for paragraph in article.paragraphs {
                        p { (paragraph) }
                    }
                }
            }
        },
    )
}
