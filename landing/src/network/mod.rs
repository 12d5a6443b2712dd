//! Network compatibility gate.
//!
//! The page only works against Sui Testnet. The current network is taken
//! from the injected wallet when one exists, otherwise from the build-time
//! `SUI_NETWORK` value. Anything that is not an accepted
//! identifier, including "nothing at all", gets the advisory banner.

pub mod wallet;

/// Identifiers accepted as Sui Testnet. Compared exactly and case-sensitively.
pub const ACCEPTED_NETWORKS: [&str; 2] = ["testnet", "sui:testnet"];

/// Human name of the supported network, used in the advisory copy.
pub const SUPPORTED_NETWORK_NAME: &str = "Sui Testnet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkSource {
    Wallet,
    Configured,
    Unresolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedNetwork<'a> {
    pub id: &'a str,
    pub source: NetworkSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Supported network, render nothing.
    PassThrough,
    /// Show the switch-network banner.
    Advisory,
}

/// Pick the authoritative network identifier.
///
/// `wallet` is `Some` whenever a wallet is injected, with `""` standing for a
/// wallet that reports no network. A present wallet is always authoritative;
/// the configured value is only consulted when no wallet exists.
pub fn resolve_network<'a>(wallet: Option<&'a str>, configured: Option<&'a str>) -> ResolvedNetwork<'a> {
    if let Some(id) = wallet {
        return ResolvedNetwork {
            id,
            source: NetworkSource::Wallet,
        };
    }
    if let Some(id) = configured.filter(|id| !id.is_empty()) {
        return ResolvedNetwork {
            id,
            source: NetworkSource::Configured,
        };
    }
    ResolvedNetwork {
        id: "",
        source: NetworkSource::Unresolved,
    }
}

pub fn is_supported(id: &str) -> bool {
    ACCEPTED_NETWORKS.contains(&id)
}

pub fn evaluate(wallet: Option<&str>, configured: Option<&str>) -> GateDecision {
    let resolved = resolve_network(wallet, configured);
    let decision = if is_supported(resolved.id) {
        GateDecision::PassThrough
    } else {
        GateDecision::Advisory
    };
    tracing::debug!(
        network = resolved.id,
        source = ?resolved.source,
        ?decision,
        "network gate evaluated"
    );
    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepted_wallet_networks_pass() {
        for id in ACCEPTED_NETWORKS {
            assert_eq!(evaluate(Some(id), None), GateDecision::PassThrough);
            assert_eq!(evaluate(Some(id), Some("mainnet")), GateDecision::PassThrough);
        }
    }

    #[test]
    fn other_wallet_networks_get_advisory() {
        for id in ["mainnet", "devnet", "localnet", "sui:mainnet", "whatever", "Testnet", "TESTNET", "Sui:Testnet"] {
            assert_eq!(evaluate(Some(id), None), GateDecision::Advisory, "{id}");
        }
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert_eq!(evaluate(Some(" testnet"), None), GateDecision::Advisory);
        assert_eq!(evaluate(Some("testnet\n"), None), GateDecision::Advisory);
        assert_eq!(evaluate(None, Some("testnet ")), GateDecision::Advisory);
    }

    #[test]
    fn falls_back_to_configured_value() {
        assert_eq!(evaluate(None, Some("testnet")), GateDecision::PassThrough);
        assert_eq!(evaluate(None, Some("sui:testnet")), GateDecision::PassThrough);
        assert_eq!(evaluate(None, Some("mainnet")), GateDecision::Advisory);
    }

    #[test]
    fn nothing_resolved_fails_closed() {
        assert_eq!(evaluate(None, None), GateDecision::Advisory);
        assert_eq!(evaluate(Some(""), None), GateDecision::Advisory);
        assert_eq!(evaluate(Some(""), Some("")), GateDecision::Advisory);
    }

    #[test]
    fn wallet_wins_over_configured() {
        let resolved = resolve_network(Some("testnet"), Some("mainnet"));
        assert_eq!(
            resolved,
            ResolvedNetwork {
                id: "testnet",
                source: NetworkSource::Wallet,
            }
        );

        // and in the other direction
        assert_eq!(evaluate(Some("mainnet"), Some("testnet")), GateDecision::Advisory);
    }

    #[test]
    fn wallet_without_network_ignores_configured() {
        let resolved = resolve_network(Some(""), Some("sui:testnet"));
        assert_eq!(
            resolved,
            ResolvedNetwork {
                id: "",
                source: NetworkSource::Wallet,
            }
        );
        assert_eq!(evaluate(Some(""), Some("testnet")), GateDecision::Advisory);
    }

    #[test]
    fn unresolved_is_empty() {
        let resolved = resolve_network(None, None);
        assert_eq!(resolved.id, "");
        assert_eq!(resolved.source, NetworkSource::Unresolved);
        assert!(!is_supported(resolved.id));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let inputs = [
            (Some("testnet"), None),
            (None, Some("mainnet")),
            (None, None),
            (Some("Testnet"), Some("testnet")),
        ];
        for (wallet, configured) in inputs {
            let first = evaluate(wallet, configured);
            for _ in 0..3 {
                assert_eq!(evaluate(wallet, configured), first);
            }
        }
    }
}
