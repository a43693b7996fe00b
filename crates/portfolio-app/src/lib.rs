//! Single-page personal portfolio.
//!
//! A Dioxus web app presenting biography, skills, projects, certifications,
//! social links and a contact form, themed light/dark through `portfolio-ui`.
//! Every component is a pure function of the theme signal and the static
//! content tables in [`content`].

pub mod app;
pub mod components;
pub mod content;

pub use app::App;
