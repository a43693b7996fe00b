use dioxus::prelude::*;

use crate::content::{CONTACT_EMAIL, SOCIAL_LINKS};

/// Page footer: social profile links and the contact email.
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            nav { class: "social-links",
                for link in SOCIAL_LINKS {
                    a {
                        key: "{link.name}",
                        class: "social-link",
                        href: link.url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        span { class: "social-icon", "{link.icon}" }
                        "{link.name}"
                    }
                }
            }
            p { class: "footer-contact", "Contact: {CONTACT_EMAIL}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_links_every_social_entry() {
        let html = dioxus_ssr::render_element(rsx! { Footer {} });
        for link in SOCIAL_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", link.url)));
            assert!(html.contains(link.name));
        }
        assert!(html.contains(CONTACT_EMAIL));
    }
}
