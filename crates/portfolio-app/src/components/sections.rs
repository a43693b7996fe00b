use dioxus::prelude::*;

use crate::content::{Certification, Project, ABOUT, CERTIFICATIONS, PROJECTS, SKILLS};

/// About section: heading plus the biography paragraph.
#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { class: "section reveal", id: "about",
            h2 { class: "section-title", "About Me" }
            p { class: "about-text", "{ABOUT}" }
        }
    }
}

/// Skills section: one card per table entry, table order preserved.
#[component]
pub fn SkillsSection() -> Element {
    rsx! {
        section { class: "section reveal", id: "skills",
            h2 { class: "section-title", "Skills" }
            ul { class: "skill-grid",
                for skill in SKILLS {
                    li { key: "{skill}", class: "skill-card", "{skill}" }
                }
            }
        }
    }
}

/// Projects section: one card per table entry.
#[component]
pub fn ProjectsSection() -> Element {
    rsx! {
        section { class: "section reveal", id: "projects",
            h2 { class: "section-title", "Projects" }
            div { class: "card-grid",
                for project in PROJECTS {
                    ProjectCard { key: "{project.title}", project }
                }
            }
        }
    }
}

/// A single project card. The title is an anchor only when the project has
/// a link; otherwise it renders as plain text with no anchor at all.
#[component]
fn ProjectCard(project: &'static Project) -> Element {
    rsx! {
        div { class: "card project-card",
            if let Some(link) = project.link {
                a {
                    class: "card-title card-link",
                    href: link,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{project.title}"
                }
            } else {
                span { class: "card-title", "{project.title}" }
            }
            p { class: "card-body", "{project.description}" }
        }
    }
}

/// Certifications section: name, issuer and an optional verification link.
#[component]
pub fn CertificationsSection() -> Element {
    rsx! {
        section { class: "section reveal", id: "certifications",
            h2 { class: "section-title", "Certifications" }
            ul { class: "cert-list",
                for cert in CERTIFICATIONS {
                    CertificationRow { key: "{cert.name}", cert }
                }
            }
        }
    }
}

#[component]
fn CertificationRow(cert: &'static Certification) -> Element {
    rsx! {
        li { class: "cert-row",
            span { class: "cert-name", "{cert.name}" }
            span { class: "cert-issuer", "{cert.issuer}" }
            if let Some(link) = cert.link {
                a {
                    class: "cert-link",
                    href: link,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Verify"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(element: Element) -> String {
        dioxus_ssr::render_element(element)
    }

    #[test]
    fn test_one_skill_card_per_table_entry() {
        let html = render(rsx! { SkillsSection {} });
        assert_eq!(html.matches("skill-card").count(), SKILLS.len());
    }

    #[test]
    fn test_skills_render_in_table_order() {
        let html = render(rsx! { SkillsSection {} });
        let mut cursor = 0;
        for skill in SKILLS {
            let pos = html[cursor..]
                .find(skill)
                .unwrap_or_else(|| panic!("{skill} missing or out of order"));
            cursor += pos;
        }
    }

    #[test]
    fn test_linked_project_anchor_href_matches_table() {
        let project = &PROJECTS[0];
        let link = project.link.unwrap();
        let html = render(rsx! { ProjectCard { project } });
        assert!(html.contains(&format!("href=\"{link}\"")));
        assert!(html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_unlinked_project_renders_no_anchor() {
        let project = &PROJECTS[1];
        assert!(project.link.is_none());
        let html = render(rsx! { ProjectCard { project } });
        assert!(!html.contains("<a"));
        assert!(html.contains(project.title));
    }

    #[test]
    fn test_unlinked_certification_renders_no_anchor() {
        let cert = &CERTIFICATIONS[1];
        assert!(cert.link.is_none());
        let html = render(rsx! { CertificationRow { cert } });
        assert!(!html.contains("<a"));
        assert!(html.contains(cert.issuer));
    }

    #[test]
    fn test_linked_certification_anchor_href_matches_table() {
        let cert = &CERTIFICATIONS[0];
        let link = cert.link.unwrap();
        let html = render(rsx! { CertificationRow { cert } });
        assert!(html.contains(&format!("href=\"{link}\"")));
    }

    #[test]
    fn test_about_contains_biography() {
        let html = render(rsx! { AboutSection {} });
        assert!(html.contains("Frontend Developer"));
    }
}
