//! Route builders shared by unit tests across modules.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use super::*;

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn p2p_leg(fiat: &str, asset: &str, price: &str) -> ExchangeLeg {
    ExchangeLeg {
        fiat: fiat.to_string(),
        asset: asset.to_string(),
        price: dec(price),
        payment_channel: PaymentChannel::P2P,
        transaction_method: None,
        transaction_fee: None,
        intra_crypto_exchange: None,
    }
}

pub fn card_leg(fiat: &str, asset: &str, price: &str, method: &str, fee: &str) -> ExchangeLeg {
    ExchangeLeg {
        fiat: fiat.to_string(),
        asset: asset.to_string(),
        price: dec(price),
        payment_channel: PaymentChannel::Card2CryptoExchange,
        transaction_method: Some(method.to_string()),
        transaction_fee: Some(dec(fee)),
        intra_crypto_exchange: None,
    }
}

pub fn wallet_leg(
    fiat: &str,
    asset: &str,
    price: &str,
    method: &str,
    fee: &str,
    intra: SpotRate,
) -> ExchangeLeg {
    ExchangeLeg {
        payment_channel: PaymentChannel::Card2Wallet2CryptoExchange,
        intra_crypto_exchange: Some(intra),
        ..card_leg(fiat, asset, price, method, fee)
    }
}

pub fn spot(from: &str, to: &str, price: &str, fee: &str) -> SpotRate {
    SpotRate {
        from_asset: from.to_string(),
        to_asset: to.to_string(),
        price: dec(price),
        spot_fee: Some(dec(fee)),
    }
}

pub fn bank_exchange(bank: &str, from: &str, to: &str, price: &str) -> BankExchange {
    BankExchange {
        bank: Named::new(bank),
        from_fiat: from.to_string(),
        to_fiat: to.to_string(),
        price: dec(price),
        currency_market: None,
    }
}

/// P2P purchase and sale on Binance between Tinkoff and Sberbank, nothing optional.
pub fn simple_route() -> ArbitrageRoute {
    ArbitrageRoute {
        id: Some(1),
        crypto_exchange: Named::new("Binance"),
        input_bank: Named::new("Tinkoff"),
        output_bank: Named::new("Sberbank"),
        input_crypto_exchange: p2p_leg("RUB", "USDT", "74.5"),
        interim_crypto_exchange: None,
        second_interim_crypto_exchange: None,
        output_crypto_exchange: p2p_leg("RUB", "USDT", "76.1"),
        bank_exchange: None,
        marginality_percentage: dec("2.15"),
        diagram: Some("Tinkoff ⇨ USDT ⇨ Sberbank".to_string()),
        dynamics: Dynamics::Neutral,
        new: Some(false),
        update: Update {
            updated: Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).unwrap(),
        },
    }
}
