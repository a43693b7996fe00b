use dioxus::prelude::*;

use crate::content::RELAY_ENDPOINT;

/// Contact form.
///
/// Submission is a plain browser POST to the relay endpoint: no `onsubmit`
/// handler, no response handling, no retry. Required-field enforcement is
/// left entirely to native browser validation, which blocks an empty
/// submission before any network request happens.
#[component]
pub fn ContactForm() -> Element {
    rsx! {
        section { class: "section reveal", id: "contact",
            h2 { class: "section-title", "Contact Me" }
            form {
                class: "contact-form",
                action: RELAY_ENDPOINT,
                method: "post",
                input {
                    class: "form-field",
                    r#type: "text",
                    name: "name",
                    placeholder: "Your Name",
                    required: true,
                }
                input {
                    class: "form-field",
                    r#type: "email",
                    name: "email",
                    placeholder: "Your Email",
                    required: true,
                }
                textarea {
                    class: "form-field",
                    name: "message",
                    rows: "5",
                    placeholder: "Your Message",
                    required: true,
                }
                button { class: "form-submit", r#type: "submit", "Send" }
            }
        }
    }
}
