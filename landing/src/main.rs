// NarvalFi Landing Page — Leptos 0.8 Edition
// NarvalFi (c)2025

mod config;
mod logging;
mod network;
mod sections;
mod styles;

use config::AppConfig;
use leptos::prelude::*;
use sections::*;
use tracing::Level;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    let level = config.max_level();
    logging::init(level.as_ref().copied().unwrap_or(Level::INFO));
    if let Err(err) = level {
        tracing::warn!(%err, "falling back to INFO");
    }

    tracing::info!(configured_network = ?config.network, "mounting landing page");
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <style>{styles::LANDING_CSS}</style>
        <Backdrop />
        <Hero />
        <main>
            <ProtocolHighlights />
            <ProtocolArchitecture />
            <CapitalEfficiency />
            <NetworkSupport />
        </main>
        <Footer />
    }
}
