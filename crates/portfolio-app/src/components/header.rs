use dioxus::prelude::*;
use n0_future::time::{sleep, Duration};
use portfolio_ui::{ThemeToggle, CURRENT_THEME};

use crate::content::{avatar_src, NAME, ROLES};

/// Interval between role phrase changes.
const ROLE_INTERVAL_MS: u64 = 2400;

/// Page header: name, theme-variant avatar, cycling role phrase and the
/// theme toggle.
#[component]
pub fn Header() -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        header { class: "header",
            h1 { class: "header-name", "{NAME}" }
            img {
                class: "header-avatar",
                src: avatar_src(theme),
                alt: "Cartoon avatar of {NAME}",
            }
            RoleCycler {}
            ThemeToggle {}
        }
    }
}

/// Next position in a phrase table of `count` entries, wrapping at the end.
/// A single-entry table is a fixed point.
fn next_role_index(current: usize, count: usize) -> usize {
    (current + 1) % count
}

/// Cycles through the role phrases on a fixed interval, wrapping at the
/// end of the table.
#[component]
pub fn RoleCycler() -> Element {
    let mut index = use_signal(|| 0usize);

    use_future(move || async move {
        loop {
            sleep(Duration::from_millis(ROLE_INTERVAL_MS)).await;
            let next = next_role_index(index(), ROLES.len());
            index.set(next);
        }
    });

    rsx! {
        p { class: "header-role", "{ROLES[index()]}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_shows_name_and_first_role() {
        let html = dioxus_ssr::render_element(rsx! { Header {} });
        assert!(html.contains(NAME));
        assert!(html.contains(ROLES[0]));
    }

    #[test]
    fn test_role_index_wraps() {
        assert_eq!(next_role_index(0, ROLES.len()), 1);
        assert_eq!(next_role_index(ROLES.len() - 1, ROLES.len()), 0);
    }

    #[test]
    fn test_single_entry_table_never_advances() {
        assert_eq!(next_role_index(0, 1), 0);
    }

    #[test]
    fn test_avatar_follows_default_theme() {
        let html = dioxus_ssr::render_element(rsx! { Header {} });
        assert!(html.contains("src=\"/cartoon-dark.png\""));
    }
}
