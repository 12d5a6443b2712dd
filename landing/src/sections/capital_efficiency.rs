use leptos::prelude::*;

use super::Glass;

const POINTS: [&str; 3] = [
    "Up to 95% LTV with ultra-low liquidation penalties",
    "Earn trading fees while using assets as collateral",
    "Composable liquidity across lending, vaults, and DEX",
];

#[component]
pub fn CapitalEfficiency() -> impl IntoView {
    view! {
        <section id="efficiency" class="efficiency">
            <div class="container">
                <Glass class="efficiency-panel">
                    <div class="efficiency-grid">
                        <div>
                            <h2 class="section-title-left gradient-text">"Unparalleled Capital Efficiency"</h2>
                            <p class="efficiency-copy">
                                "NarvalFi’s innovative architecture allows for up to liquidity through its Smart Collateral and Smart Debt mechanisms. "
                                "Users can simultaneously provide liquidity, earn trading fees, and leverage their positions."
                            </p>
                            <ul class="efficiency-points">
                                {POINTS
                                    .iter()
                                    .map(|point| {
                                        view! {
                                            <li>
                                                <span class="efficiency-arrow">"→"</span>
                                                <span>{*point}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div class="rings">
                            <div class="ring ring-outer">
                                <div class="ring ring-middle">
                                    <div class="ring ring-inner">
                                        <span class="ring-label gradient-text">"leverageX"</span>
                                    </div>
                                </div>
                            </div>
                            <div class="ring-glow"></div>
                        </div>
                    </div>
                </Glass>
            </div>
        </section>
    }
}
