//! Static content tables for the portfolio.
//!
//! Everything here is authored data: defined at startup, never mutated.
//! Display order follows table order.

use portfolio_ui::Theme;

/// Name shown in the page header.
pub const NAME: &str = "Cristian Parrino";

/// Biography paragraph for the About section.
pub const ABOUT: &str = "I'm a passionate Frontend Developer with over 3 years \
    of experience crafting modern, performant web interfaces using technologies \
    like React, Angular, and TypeScript. I love creating engaging user \
    experiences and writing clean, maintainable code.";

/// Contact email shown in the footer.
pub const CONTACT_EMAIL: &str = "parrinocristian17@gmail.com";

/// External relay the contact form posts to. The page never reads the
/// response.
pub const RELAY_ENDPOINT: &str = "https://formspree.io/f/mgvklyqe";

/// Role phrases cycled under the name in the header.
pub const ROLES: &[&str] = &[
    "Frontend Developer",
    "Angular Specialist",
    "UI Enthusiast",
];

/// Avatar artwork per theme. The dark page gets the light-line drawing so
/// the figure stays visible against the background, and vice versa.
pub fn avatar_src(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "/cartoon-light.png",
        Theme::Light => "/cartoon-dark.png",
    }
}

/// A portfolio project. `link` is optional: projects without a public repo
/// render as plain cards with no anchor.
#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Habit Tracker",
        description: "A productivity app to manage daily habits with monthly \
            goals, streak tracking, and modern UI. Built using Angular \
            standalone components, NgRx and PrimeNG.",
        link: Some("https://github.com/crispa17/habit-tracker-angular"),
    },
    Project {
        title: "Portfolio Website",
        description: "A responsive portfolio built with React and Tailwind \
            CSS to showcase personal projects and skills.",
        link: None,
    },
    Project {
        title: "Dashboard App",
        description: "An interactive admin dashboard with charts and tables, \
            developed using Angular and TypeScript.",
        link: None,
    },
    Project {
        title: "E-commerce UI",
        description: "A modern e-commerce front-end prototype using React, \
            styled-components, and responsive design.",
        link: None,
    },
];

/// A certification with its issuer and an optional verification link.
#[derive(Debug, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub link: Option<&'static str>,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Advanced Angular Development",
        issuer: "Coursera",
        link: Some("https://www.coursera.org/account/accomplishments/verify/advanced-angular"),
    },
    Certification {
        name: "Angular for Front End Engineers",
        issuer: "Coursera",
        link: None,
    },
];

/// Skill tags, in display order. Uniqueness is not enforced.
pub const SKILLS: &[&str] = &[
    "HTML",
    "CSS",
    "JavaScript",
    "TypeScript",
    "React",
    "Angular",
    "Tailwind CSS",
    "Git",
    "Java",
    "Figma",
];

/// A social profile link shown in the footer.
#[derive(Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/crispa17",
        icon: "\u{f09b}",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/cristian-parrino-2573a",
        icon: "\u{f08c}",
    },
    SocialLink {
        name: "Email",
        url: "mailto:parrinocristian17@gmail.com",
        icon: "\u{2709}",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_flips_with_theme() {
        assert_ne!(avatar_src(Theme::Light), avatar_src(Theme::Dark));
        // The light page shows the dark-line drawing.
        assert!(avatar_src(Theme::Light).contains("dark"));
        assert!(avatar_src(Theme::Dark).contains("light"));
    }

    #[test]
    fn test_tables_are_populated() {
        assert_eq!(PROJECTS.len(), 4);
        assert_eq!(SKILLS.len(), 10);
        assert_eq!(CERTIFICATIONS.len(), 2);
        assert_eq!(SOCIAL_LINKS.len(), 3);
        assert!(!ROLES.is_empty());
    }

    #[test]
    fn test_linked_project_keeps_exact_url() {
        assert_eq!(
            PROJECTS[0].link,
            Some("https://github.com/crispa17/habit-tracker-angular")
        );
    }

    #[test]
    fn test_social_urls_are_absolute() {
        for link in SOCIAL_LINKS {
            assert!(
                link.url.starts_with("https://") || link.url.starts_with("mailto:"),
                "unexpected scheme for {}",
                link.name
            );
        }
    }
}
