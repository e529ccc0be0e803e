//! Arbitrage route ("bundle") as delivered by the dashboard endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Dynamics, LegSide, PaymentChannel, RouteError, Update};

/// Named references a bank, crypto exchange or currency market by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named {
    pub name: String,
}

impl Named {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Fiat conversion performed inside one of the route's banks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankExchange {
    /// Bank the conversion happens in; decides whether it is the first or last step.
    pub bank: Named,
    pub from_fiat: String,
    pub to_fiat: String,
    pub price: Decimal,
    /// Reference market the bank converts through (e.g. an exchange-traded currency pair).
    #[serde(default)]
    pub currency_market: Option<Named>,
}

/// Spot conversion between two assets on the crypto exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotRate {
    pub from_asset: String,
    pub to_asset: String,
    pub price: Decimal,
    /// Spot fee, percent.
    #[serde(default)]
    pub spot_fee: Option<Decimal>,
}

/// ExchangeLeg is the purchase (fiat to asset) or sale (asset to fiat) leg of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeLeg {
    pub fiat: String,
    pub asset: String,
    /// Headline rate; for two-step channels it already includes every fee.
    pub price: Decimal,
    pub payment_channel: PaymentChannel,
    #[serde(default)]
    pub transaction_method: Option<String>,
    /// Transaction fee, percent.
    #[serde(default)]
    pub transaction_fee: Option<Decimal>,
    /// Spot step of the Card2Wallet2CryptoExchange channel.
    #[serde(default)]
    pub intra_crypto_exchange: Option<SpotRate>,
}

/// ArbitrageRoute is one row of the dashboard table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbitrageRoute {
    #[serde(default)]
    pub id: Option<i64>,
    pub crypto_exchange: Named,
    pub input_bank: Named,
    pub output_bank: Named,
    pub input_crypto_exchange: ExchangeLeg,
    #[serde(default)]
    pub interim_crypto_exchange: Option<SpotRate>,
    #[serde(default)]
    pub second_interim_crypto_exchange: Option<SpotRate>,
    pub output_crypto_exchange: ExchangeLeg,
    #[serde(default)]
    pub bank_exchange: Option<BankExchange>,
    pub marginality_percentage: Decimal,
    #[serde(default)]
    pub diagram: Option<String>,
    #[serde(default)]
    pub dynamics: Dynamics,
    #[serde(default)]
    pub new: Option<bool>,
    pub update: Update,
}

impl ArbitrageRoute {
    /// Returns the route label, empty when the server sent none.
    pub fn diagram(&self) -> &str {
        self.diagram.as_deref().unwrap_or_default()
    }

    /// Returns true if the bank exchange happens in the input bank and so
    /// precedes the purchase leg.
    pub fn bank_exchange_first(&self) -> bool {
        self.bank_exchange
            .as_ref()
            .is_some_and(|b| b.bank.name == self.input_bank.name)
    }

    /// Returns true if the row was created on the latest refresh.
    pub fn is_new(&self) -> bool {
        self.new.unwrap_or(false)
    }

    /// Checks every precondition narration relies on.
    pub fn validate(&self) -> Result<(), RouteError> {
        validate_leg(LegSide::Purchase, &self.input_crypto_exchange)?;
        validate_leg(LegSide::Sale, &self.output_crypto_exchange)?;

        match (&self.interim_crypto_exchange, &self.second_interim_crypto_exchange) {
            (None, Some(_)) => return Err(RouteError::SecondInterimWithoutInterim),
            (Some(first), second) => {
                validate_spot(first, "interim_crypto_exchange")?;
                if let Some(second) = second {
                    validate_spot(second, "second_interim_crypto_exchange")?;
                }
            }
            (None, None) => {}
        }

        if let Some(ref bank_exchange) = self.bank_exchange {
            let bank = &bank_exchange.bank.name;
            if *bank != self.input_bank.name && *bank != self.output_bank.name {
                return Err(RouteError::ForeignBankExchange { bank: bank.clone() });
            }
            check_price(bank_exchange.price, "bank_exchange.price")?;
        }

        Ok(())
    }
}

fn validate_leg(side: LegSide, leg: &ExchangeLeg) -> Result<(), RouteError> {
    let price_field = match side {
        LegSide::Purchase => "input_crypto_exchange.price",
        LegSide::Sale => "output_crypto_exchange.price",
    };
    check_price(leg.price, price_field)?;

    if let PaymentChannel::Other(ref raw) = leg.payment_channel {
        if raw.trim().is_empty() {
            return Err(RouteError::MissingPaymentChannel { side });
        }
    }

    if !leg.payment_channel.requires_transaction() {
        return Ok(());
    }

    if leg.transaction_method.as_deref().is_none_or(str::is_empty) {
        return Err(RouteError::MissingTransactionMethod {
            side,
            channel: leg.payment_channel.clone(),
        });
    }
    let fee = leg.transaction_fee.ok_or_else(|| RouteError::MissingTransactionFee {
        side,
        channel: leg.payment_channel.clone(),
    })?;
    check_fee(fee, "transaction_fee")?;

    if leg.payment_channel == PaymentChannel::Card2Wallet2CryptoExchange {
        let intra = leg
            .intra_crypto_exchange
            .as_ref()
            .ok_or_else(|| RouteError::MissingIntraExchange {
                side,
                channel: leg.payment_channel.clone(),
            })?;
        validate_spot(intra, "intra_crypto_exchange")?;
    }

    Ok(())
}

fn validate_spot(rate: &SpotRate, field: &'static str) -> Result<(), RouteError> {
    check_price(rate.price, field)?;
    let fee = rate.spot_fee.ok_or(RouteError::MissingSpotFee { field })?;
    check_fee(fee, field)
}

fn check_price(value: Decimal, field: &'static str) -> Result<(), RouteError> {
    if value <= Decimal::ZERO {
        return Err(RouteError::NonPositivePrice { field, value });
    }
    Ok(())
}

fn check_fee(value: Decimal, field: &'static str) -> Result<(), RouteError> {
    if value < Decimal::ZERO || value >= Decimal::ONE_HUNDRED {
        return Err(RouteError::FeeOutOfRange { field, value });
    }
    Ok(())
}
