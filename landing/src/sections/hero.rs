use leptos::prelude::*;

use super::icons::{ICON_GITHUB, Icon};
use super::{CONTRACT_SOURCES_URL, PrimaryButton, REPO_URL};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        "Live on Sui Testnet"
                    </div>
                    <h1 class="hero-title gradient-text">
                        "NarvalFi: The Unified Liquidity Layer for Next-Gen DeFi"
                    </h1>
                    <p class="hero-description">
                        "A groundbreaking DeFi protocol designed to solve liquidity fragmentation and maximize capital efficiency. "
                        "Built on Sui, it integrates lending, vaults, and DEX into a single, composable liquidity layer."
                    </p>
                    <div class="hero-actions">
                        <PrimaryButton href=CONTRACT_SOURCES_URL>
                            "Sui Move Contract Repository"
                        </PrimaryButton>
                        <a href=REPO_URL target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                            <Icon path=ICON_GITHUB size="16" />
                            "View on GitHub"
                        </a>
                    </div>
                </div>
            </div>
        </header>
    }
}
