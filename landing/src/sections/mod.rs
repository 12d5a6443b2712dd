// Landing page sections
// NarvalFi (c)2025

/// Move contract sources linked from the hero.
pub const CONTRACT_SOURCES_URL: &str =
    "https://github.com/OlendDAO/Sui-Overflow2025-NarvalFi/tree/main/packages/contract/narval/sources";
pub const REPO_URL: &str = "https://github.com/Olenddao/Sui-Overflow2025-NarvalFi";
pub const COMMUNITY_REPO_URL: &str = "https://github.com/LaozpGZ/Sui-Overflow2025-NarvalFi";
pub const TWITTER_URL: &str = "https://x.com/narvalfinance";

mod architecture;
mod backdrop;
mod capital_efficiency;
mod footer;
mod hero;
mod highlights;
mod icons;
mod network_support;
mod primitives;

pub use architecture::ProtocolArchitecture;
pub use backdrop::Backdrop;
pub use capital_efficiency::CapitalEfficiency;
pub use footer::Footer;
pub use hero::Hero;
pub use highlights::ProtocolHighlights;
pub use network_support::NetworkSupport;
pub use primitives::{Glass, PrimaryButton, SocialLink, Sparkles};
