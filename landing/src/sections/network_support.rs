//! Network support panel and the gate that drives it.

use leptos::prelude::*;

use super::Glass;
use crate::config::AppConfig;
use crate::network::{self, GateDecision, SUPPORTED_NETWORK_NAME, wallet};

#[component]
pub fn NetworkSupport() -> impl IntoView {
    view! {
        <section id="network" class="network-support">
            <Glass class="network-panel">
                <h3 class="network-title">"Network Support"</h3>
                <NetworkSupportChecker />
            </Glass>
        </section>
    }
}

/// Renders nothing on Sui Testnet, the switch-network banner otherwise.
///
/// Evaluated once at mount: the closure reads no signal, so a wallet injected
/// later is not picked up until the page reloads.
#[component]
pub fn NetworkSupportChecker() -> impl IntoView {
    let configured = use_context::<AppConfig>().and_then(|config| config.network);

    move || {
        let from_wallet = wallet::wallet_network();
        match network::evaluate(from_wallet.as_deref(), configured) {
            GateDecision::PassThrough => None,
            GateDecision::Advisory => Some(view! { <AdvisoryBanner /> }),
        }
    }
}

#[component]
fn AdvisoryBanner() -> impl IntoView {
    view! {
        <div class="advisory-wrap">
            <div class="advisory" role="alert">
                "Currently only "
                <span class="advisory-network">{SUPPORTED_NETWORK_NAME}</span>
                " is supported. Please switch your wallet to "
                {SUPPORTED_NETWORK_NAME}
                " network."
            </div>
        </div>
    }
}
