//! Domain models for arbitrage bundles.

mod channel;
mod error;
mod route;
mod update;

pub use channel::PaymentChannel;
pub use error::{LegSide, RouteError};
pub use route::{ArbitrageRoute, BankExchange, ExchangeLeg, Named, SpotRate};
pub use update::{Dynamics, Update};

#[cfg(test)]
pub(crate) mod fixtures;
