//! Protocol architecture: one expandable card per core module.

use leptos::prelude::*;

use super::Sparkles;
use super::icons::{ICON_CHEVRON_DOWN, ICON_COINS, ICON_DROPLET, ICON_LAYERS, ICON_WALLET, Icon};

/// Label pair shown on a card's expand/collapse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToggleLabels {
    LearnMore,
    ShowDetails,
}

impl ToggleLabels {
    pub fn label(self, expanded: bool) -> &'static str {
        match (self, expanded) {
            (Self::LearnMore, false) => "Learn more",
            (Self::LearnMore, true) => "Show less",
            (Self::ShowDetails, false) => "Show details",
            (Self::ShowDetails, true) => "Hide details",
        }
    }
}

pub(crate) struct ProtocolModule {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub toggle: ToggleLabels,
    pub sparkles: u32,
}

pub(crate) static MODULES: [ProtocolModule; 5] = [
    ProtocolModule {
        id: "vault",
        icon: ICON_WALLET,
        title: "Vault Protocol",
        summary: "User-facing interface for borrowing with single-asset collateral and debt.",
        details: "Vault Protocol offers high Loan-to-Value (LTV) ratios with low liquidation penalties. The system is designed with deep integration capabilities for smart collateral and debt management. Users can borrow against their assets while maintaining optimal capital efficiency and minimizing risk exposure.",
        toggle: ToggleLabels::ShowDetails,
        sparkles: 12,
    },
    ProtocolModule {
        id: "lending",
        icon: ICON_COINS,
        title: "Lending Protocol",
        summary: "Standardized yield-bearing tokens that represent your share in the lending protocol.",
        details: "ERC4626 is a standard for tokenized vaults that provides a standardized API for yield-bearing tokens. Our fTokens implement this standard, making them easily composable with other DeFi protocols and applications.",
        toggle: ToggleLabels::LearnMore,
        sparkles: 12,
    },
    ProtocolModule {
        id: "dex",
        icon: ICON_LAYERS,
        title: "Narval DEX",
        summary: "Hybrid AMM, concentrated liquidity, allows collateral and debt to act as DEX liquidity, gas efficient, dynamic fees.",
        details: "Narval DEX uses a hybrid automated market maker model that intelligently allocates liquidity across different price ranges. This approach maximizes capital efficiency while maintaining deep liquidity for traders. Collateral and debt can act as DEX LP, earning trading fees while maximizing your leverage. Gas efficient and supports dynamic fees.",
        toggle: ToggleLabels::LearnMore,
        sparkles: 8,
    },
    ProtocolModule {
        id: "smart-collateral",
        icon: ICON_COINS,
        title: "Smart Collateral & Smart Debt",
        summary: "Maximize leverage effective liquidity with our innovative DeFi solution.",
        details: "Collateral and debt can act as DEX LP, earning trading fees while maximizing your leverage. This innovative approach enables up to 39x effective liquidity compared to traditional DeFi protocols, giving you more capital efficiency and higher potential returns.",
        toggle: ToggleLabels::LearnMore,
        sparkles: 12,
    },
    ProtocolModule {
        id: "liquidation",
        icon: ICON_DROPLET,
        title: "Liquidation Engine",
        summary: "Advanced liquidation mechanism inspired by Uniswap technology",
        details: "Our liquidation engine features batch/range liquidation capabilities, allowing for ultra-high LTV ratios with ultra-low penalties. The system is gas efficient and entirely market-driven, ensuring optimal performance even during high volatility periods.",
        toggle: ToggleLabels::ShowDetails,
        sparkles: 8,
    },
];

#[component]
pub fn ProtocolArchitecture() -> impl IntoView {
    view! {
        <section id="architecture" class="architecture">
            <div class="container">
                <h2 class="section-title gradient-text">"Narval Protocol Architecture"</h2>
                <p class="section-description">
                    "Explore the core modules powering Narval: unified liquidity, advanced vaults, lending, DEX, "
                    "smart collateral & debt, and a next-gen liquidation engine."
                </p>
                <div class="architecture-grid">
                    {MODULES.iter().map(|module| view! { <ModuleCard module=module /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ModuleCard(module: &'static ProtocolModule) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let toggle = module.toggle;

    view! {
        <article class=format!("module-card module-{}", module.id)>
            <div class="module-border"></div>
            <div class="module-row">
                <div class="module-icon">
                    <Icon path=module.icon size="22" />
                </div>
                <div class="module-body">
                    <h3 class="module-title">{module.title}</h3>
                    <p class="module-summary">{module.summary}</p>
                    <div class=move || details_class(expanded.get())>
                        <p>{module.details}</p>
                    </div>
                    <button
                        class="module-toggle"
                        aria-expanded=move || expanded.get().to_string()
                        on:click=move |_| set_expanded.update(|open| *open = !*open)
                    >
                        {move || toggle.label(expanded.get())}
                        <span class=move || chevron_class(expanded.get())>
                            <Icon path=ICON_CHEVRON_DOWN size="14" />
                        </span>
                    </button>
                </div>
            </div>
            <Sparkles count=module.sparkles />
        </article>
    }
}

fn details_class(expanded: bool) -> &'static str {
    if expanded { "module-details open" } else { "module-details" }
}

fn chevron_class(expanded: bool) -> &'static str {
    if expanded { "module-chevron flipped" } else { "module-chevron" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_label_pairs() {
        assert_eq!(ToggleLabels::LearnMore.label(false), "Learn more");
        assert_eq!(ToggleLabels::LearnMore.label(true), "Show less");
        assert_eq!(ToggleLabels::ShowDetails.label(false), "Show details");
        assert_eq!(ToggleLabels::ShowDetails.label(true), "Hide details");
    }

    #[test]
    fn five_modules_in_display_order() {
        let titles: Vec<_> = MODULES.iter().map(|m| m.title).collect();
        assert_eq!(
            titles,
            vec![
                "Vault Protocol",
                "Lending Protocol",
                "Narval DEX",
                "Smart Collateral & Smart Debt",
                "Liquidation Engine",
            ]
        );
    }

    #[test]
    fn module_ids_are_unique_css_tokens() {
        for (i, a) in MODULES.iter().enumerate() {
            assert!(a.id.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{}", a.id);
            for b in &MODULES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn details_extend_the_summary() {
        for m in &MODULES {
            assert!(!m.summary.is_empty());
            assert!(m.details.len() > m.summary.len(), "{}", m.title);
            assert!(m.sparkles > 0);
        }
    }

    #[test]
    fn collapsed_cards_hide_details() {
        assert_eq!(details_class(false), "module-details");
        assert_eq!(details_class(true), "module-details open");
        assert_eq!(chevron_class(true), "module-chevron flipped");
    }
}
