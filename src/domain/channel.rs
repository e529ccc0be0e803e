//! Payment channels used on the purchase and sale legs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// PaymentChannel describes how fiat enters or leaves the crypto exchange.
///
/// The wire identifiers are the same on both legs. The sale leg renders
/// the card channels with transposed labels (see [`PaymentChannel::sale_label`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaymentChannel {
    /// Direct peer-to-peer trade between users, no fee.
    P2P,
    /// Card or bank transfer straight into an exchange order.
    Card2CryptoExchange,
    /// Fiat deposit to the exchange wallet followed by a spot conversion.
    Card2Wallet2CryptoExchange,
    /// Any channel this client does not know; shown as-is.
    Other(String),
}

impl PaymentChannel {
    /// Returns the identifier used by the server.
    pub fn as_str(&self) -> &str {
        match self {
            PaymentChannel::P2P => "P2P",
            PaymentChannel::Card2CryptoExchange => "Card2CryptoExchange",
            PaymentChannel::Card2Wallet2CryptoExchange => "Card2Wallet2CryptoExchange",
            PaymentChannel::Other(raw) => raw,
        }
    }

    /// Returns the label shown for this channel on the sale leg.
    pub fn sale_label(&self) -> &str {
        match self {
            PaymentChannel::Card2CryptoExchange => "CryptoExchange2Card",
            PaymentChannel::Card2Wallet2CryptoExchange => "CryptoExchange2Wallet2Card",
            other => other.as_str(),
        }
    }

    /// Returns true if the channel needs a transaction method and fee.
    pub fn requires_transaction(&self) -> bool {
        matches!(
            self,
            PaymentChannel::Card2CryptoExchange | PaymentChannel::Card2Wallet2CryptoExchange
        )
    }
}

impl From<&str> for PaymentChannel {
    fn from(s: &str) -> Self {
        match s {
            "P2P" => PaymentChannel::P2P,
            "Card2CryptoExchange" => PaymentChannel::Card2CryptoExchange,
            "Card2Wallet2CryptoExchange" => PaymentChannel::Card2Wallet2CryptoExchange,
            other => PaymentChannel::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PaymentChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PaymentChannel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentChannel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The column is nullable on the server.
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(PaymentChannel::from)
            .unwrap_or_else(|| PaymentChannel::Other(String::new())))
    }
}
