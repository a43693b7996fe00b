//! Theme system for the portfolio.
//!
//! Theming is CSS-variable driven: a wrapper div carries a `data-theme`
//! attribute and the stylesheet resolves every color token off it. The
//! current theme lives in one global signal with a single writer (the
//! toggle button) and is never persisted, so a reload starts at Light.

use dioxus::prelude::*;

/// Available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// All available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark]
    }
}

/// Global signal for the current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = Signal::global(Theme::default);

/// Hook returning the current theme and a closure that flips it.
///
/// With only two themes the toggle closure is the sole writer; there is
/// nothing else to set.
pub fn use_theme() -> (Theme, impl Fn()) {
    let theme = *CURRENT_THEME.read();
    let toggle = move || {
        let next = theme.toggled();
        tracing::debug!("theme switched to {}", next.css_value());
        *CURRENT_THEME.write() = next;
    };
    (theme, toggle)
}

/// Themed wrapper component.
///
/// Wraps children with the `data-theme` attribute; place it at the root of
/// the page so a toggle restyles every subtree in the same render pass.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": theme.css_value(),
            {children}
        }
    }
}

/// Theme toggle button.
///
/// The label names the mode the button switches to, not the current one.
#[component]
pub fn ThemeToggle() -> Element {
    let (theme, toggle) = use_theme();

    rsx! {
        button {
            class: "theme-toggle",
            onclick: move |_| toggle(),
            "{theme.toggled().display_name()} Mode"
        }
    }
}
