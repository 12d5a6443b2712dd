//! Read-only probe of the wallet object injected into `window`.

use js_sys::Reflect;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Global the wallet extension injects.
pub const WALLET_GLOBAL: &str = "suiWallet";
const NETWORK_FIELD: &str = "network";

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("failed to read `{property}`: {message}")]
    Reflect { property: &'static str, message: String },
    #[error("wallet `network` is not a string")]
    NotAString,
}

/// Network reported by the injected wallet.
///
/// `None` means no wallet (no window, or a falsy `window.suiWallet`).
/// A present wallet always yields `Some`; a missing, empty or unreadable
/// `network` field becomes `""` so the gate stays closed.
pub fn wallet_network() -> Option<String> {
    let wallet = match wallet_object() {
        Ok(wallet) => wallet?,
        Err(err) => {
            tracing::debug!(%err, "wallet lookup failed");
            return None;
        }
    };
    Some(network_or_empty(network_field(&wallet)))
}

fn wallet_object() -> Result<Option<JsValue>, WalletError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let wallet = read(&window, WALLET_GLOBAL)?;
    Ok(wallet.is_truthy().then_some(wallet))
}

fn network_field(wallet: &JsValue) -> Result<String, WalletError> {
    let network = read(wallet, NETWORK_FIELD)?;
    if network.is_undefined() || network.is_null() {
        return Ok(String::new());
    }
    network.as_string().ok_or(WalletError::NotAString)
}

fn network_or_empty(field: Result<String, WalletError>) -> String {
    field.unwrap_or_else(|err| {
        tracing::debug!(%err, "wallet network unreadable");
        String::new()
    })
}

fn read(target: &JsValue, property: &'static str) -> Result<JsValue, WalletError> {
    Reflect::get(target, &JsValue::from_str(property)).map_err(|e| WalletError::Reflect {
        property,
        message: e.as_string().unwrap_or_else(|| format!("{e:?}")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn readable_network_passes_through() {
        assert_eq!(network_or_empty(Ok("sui:testnet".into())), "sui:testnet");
    }

    #[test]
    fn unreadable_network_is_empty_not_absent() {
        assert_eq!(network_or_empty(Err(WalletError::NotAString)), "");
        let reflect = WalletError::Reflect {
            property: NETWORK_FIELD,
            message: "getter threw".into(),
        };
        assert_eq!(network_or_empty(Err(reflect)), "");
    }

    #[test]
    fn present_wallet_without_network_keeps_gate_closed() {
        use crate::network::{GateDecision, evaluate};

        let from_wallet = Some(network_or_empty(Err(WalletError::NotAString)));
        assert_eq!(evaluate(from_wallet.as_deref(), Some("testnet")), GateDecision::Advisory);
    }
}
