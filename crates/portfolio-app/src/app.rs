use dioxus::prelude::*;
use portfolio_ui::{ThemedRoot, SHARED_CSS};

use crate::components::{
    AboutSection, CertificationsSection, ContactForm, Footer, Header, ProjectsSection,
    SkillsSection,
};

/// Page CSS layered over the shared theme tokens (included at compile time).
const STYLE_CSS: &str = include_str!("../assets/style.css");

/// Root component for the portfolio page.
///
/// The whole tree is a pure function of the theme signal and the static
/// content tables; toggling the theme restyles header, sections and footer
/// in one render pass.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Style { {SHARED_CSS} }
        document::Style { {STYLE_CSS} }

        ThemedRoot {
            Header {}

            main { class: "page",
                AboutSection {}
                SkillsSection {}
                ProjectsSection {}
                CertificationsSection {}
                ContactForm {}
            }

            Footer {}
        }
    }
}
