use leptos::prelude::*;

use super::Glass;

pub(crate) struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub(crate) static HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        icon: "🌊",
        title: "Unified Liquidity Layer",
        description: "A central liquidity pool powering lending, vaults, and DEX. All protocols share the same liquidity, eliminating fragmentation and enabling seamless composability.",
    },
    Highlight {
        icon: "🧠",
        title: "Smart Collateral & Smart Debt",
        description: "Collateral and debt positions can simultaneously act as AMM liquidity, allowing users to earn trading fees.",
    },
    Highlight {
        icon: "⚙️",
        title: "Batch Liquidation Engine",
        description: "Innovative batch/range liquidation inspired by Uniswap v3. Enables ultra-high LTV (up to 95%) and ultra-low penalty (as low as 0.1%), with gas-efficient, market-driven liquidations.",
    },
    Highlight {
        icon: "🛡️",
        title: "Modular & Secure Architecture",
        description: "Separation of core liquidity and protocol logic, automated risk limits, robust oracle integration, and multi-layered security for a scalable, safe DeFi ecosystem.",
    },
];

#[component]
pub fn ProtocolHighlights() -> impl IntoView {
    view! {
        <section id="highlights" class="highlights">
            <div class="container">
                <h2 class="section-title gradient-text">"Key Protocol Innovations"</h2>
                <div class="highlights-grid">
                    {HIGHLIGHTS
                        .iter()
                        .map(|h| {
                            view! {
                                <FeatureCard icon=h.icon title=h.title description=h.description />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <Glass class="feature-card lift-on-hover">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title gradient-text">{title}</h3>
            <p class="feature-description">{description}</p>
        </Glass>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_highlights_with_copy() {
        assert_eq!(HIGHLIGHTS.len(), 4);
        for h in &HIGHLIGHTS {
            assert!(!h.icon.is_empty());
            assert!(!h.title.is_empty());
            assert!(h.description.len() > 40, "{} description too short", h.title);
        }
    }

    #[test]
    fn liquidation_card_quotes_limits() {
        let engine = HIGHLIGHTS
            .iter()
            .find(|h| h.title == "Batch Liquidation Engine")
            .expect("liquidation highlight");
        assert!(engine.description.contains("95%"));
        assert!(engine.description.contains("0.1%"));
    }
}
