use maud::{html, Markup};

use crate::content::{PROFILE, SITE_TITLE};
use crate::render::layout::shell;

/// The landing page: introduction hero, decorative contact form, portrait.
pub fn home_page() -> Markup {
    shell(
        SITE_TITLE,
        html! {
            section.hero {
                div.hero-text {
                    h1 { (PROFILE.greeting) }
                    p.lead { (PROFILE.intro) }
                    // Presentational only; the form submits nowhere.
                    form.contact-form {
                        input type="text" name="name" placeholder="Your Name";
                        input type="email" name="email" placeholder="Your Email Address";
                        button type="submit" { "Submit" }
                    }
                }
                img.portrait src=(PROFILE.portrait) alt=(PROFILE.portrait_alt);
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_renders_greeting_and_portrait() {
        let page = home_page().into_string();
        assert!(page.contains("Hello, I’m Yoojun Kim."));
        assert!(page.contains("src=\"/images/logo.png\""));
    }

    #[test]
    fn test_contact_form_is_inert() {
        let page = home_page().into_string();
        assert_eq!(page.matches("<form").count(), 1);
        assert!(!page.contains("action="));
    }
}
