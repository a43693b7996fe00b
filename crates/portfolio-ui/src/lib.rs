//! Shared theme system and design tokens for the portfolio site.
//!
//! Provides the light/dark `Theme` type, the global theme signal, and the
//! `ThemedRoot`/`ThemeToggle` components every page subtree reads from.

pub mod theme;

pub use theme::{use_theme, Theme, ThemeToggle, ThemedRoot, CURRENT_THEME};

/// Shared CSS containing design tokens and the light/dark theme definitions.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
