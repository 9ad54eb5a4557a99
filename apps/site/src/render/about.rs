use maud::{html, Markup};

use crate::content::{ABOUT_HEADING, PHASES};
use crate::render::layout::shell;

/// The about page: one linked card per life phase, in chronological order.
pub fn about_page() -> Markup {
    shell(
        ABOUT_HEADING,
        html! {
            section.about {
                h1 { (ABOUT_HEADING) }
                div.card-grid {
                    @for phase in &PHASES {
                        a.card-link href=(phase.link) {
                            article.phase-card {
                                img src=(phase.image) alt=(phase.alt);
                                h3 { (phase.title) }
                                p { (phase.description) }
                            }
                        }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_renders_one_card_per_phase() {
        let page = about_page().into_string();
        assert_eq!(page.matches("phase-card").count(), PHASES.len());
    }

    #[test]
    fn test_cards_keep_registry_order() {
        let page = about_page().into_string();
        let positions: Vec<usize> = PHASES
            .iter()
            .map(|phase| page.find(phase.title).expect("phase title rendered"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_each_card_links_to_its_article() {
        let page = about_page().into_string();
        for phase in &PHASES {
            assert!(page.contains(&format!("href=\"{}\"", phase.link)));
        }
    }
}
