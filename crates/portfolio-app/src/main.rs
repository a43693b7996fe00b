//! Entry point for the portfolio site.

use portfolio_app::App;

fn main() {
    // Initialize logging (routes tracing to the browser console on web)
    dioxus::logger::initialize_default();

    tracing::info!("Starting portfolio");

    dioxus::launch(App);
}
