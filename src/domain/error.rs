//! Route validation errors.

use rust_decimal::Decimal;
use std::fmt;

use super::PaymentChannel;

/// LegSide names the purchase or sale leg of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegSide {
    Purchase,
    Sale,
}

impl fmt::Display for LegSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegSide::Purchase => write!(f, "purchase"),
            LegSide::Sale => write!(f, "sale"),
        }
    }
}

/// RouteError is returned when a route breaks the data contract and cannot be narrated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    #[error("{side} leg: payment channel is missing")]
    MissingPaymentChannel { side: LegSide },

    #[error("{side} leg: channel {channel} requires a transaction method")]
    MissingTransactionMethod { side: LegSide, channel: PaymentChannel },

    #[error("{side} leg: channel {channel} requires a transaction fee")]
    MissingTransactionFee { side: LegSide, channel: PaymentChannel },

    #[error("{side} leg: channel {channel} requires an intra exchange rate")]
    MissingIntraExchange { side: LegSide, channel: PaymentChannel },

    #[error("{field}: spot fee is missing")]
    MissingSpotFee { field: &'static str },

    #[error("second interim conversion present without a first one")]
    SecondInterimWithoutInterim,

    #[error("bank exchange at {bank} matches neither the input nor the output bank")]
    ForeignBankExchange { bank: String },

    #[error("{field}: price must be positive, got {value}")]
    NonPositivePrice { field: &'static str, value: Decimal },

    #[error("{field}: fee must be within [0, 100), got {value}")]
    FeeOutOfRange { field: &'static str, value: Decimal },
}
