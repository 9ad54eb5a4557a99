use maud::{html, Markup};

use crate::content::{RESUME_HEADING, RESUME_PDF};
use crate::render::layout::shell;

/// The resume page embeds a single document viewer instead of a card list.
pub fn resume_page() -> Markup {
    shell(
        "My Resume",
        html! {
            section.resume {
                h2 { (RESUME_HEADING) }
                iframe.resume-viewer src=(RESUME_PDF) title="Resume" {}
            }
        },
    )
}
