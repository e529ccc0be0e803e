//! Тексты шагов связки.
//!
//! Each function describes one step as plain text. Lead-ins and numbering
//! are added by the narrator.

use rust_decimal::Decimal;

use super::Verbosity;
use super::format::{format_fee, format_rate};
use crate::domain::{ArbitrageRoute, BankExchange, ExchangeLeg, PaymentChannel, SpotRate};

/// Способ перевода и его комиссия
struct Transfer<'a> {
    method: &'a str,
    fee: Decimal,
}

fn transfer(leg: &ExchangeLeg) -> Option<Transfer<'_>> {
    Some(Transfer {
        method: leg.transaction_method.as_deref()?,
        fee: leg.transaction_fee?,
    })
}

fn spot_fee(rate: &SpotRate) -> String {
    format_fee(rate.spot_fee.unwrap_or_default())
}

// === Покупка ===

/// Описывает покупку актива за фиат
pub fn purchase(route: &ArbitrageRoute, leg: &ExchangeLeg, verbosity: Verbosity) -> String {
    let bank = &route.input_bank.name;
    let exchange = &route.crypto_exchange.name;
    let price = format_rate(leg.price);

    match (&leg.payment_channel, verbosity) {
        (PaymentChannel::P2P, Verbosity::Detailed) => format!(
            "со счёта {bank} нужно купить активы на криптобирже {exchange}. \
             За {fiat} следует купить {asset} методом P2P по курсу {price}. \
             P2P не облагается комиссией.",
            fiat = leg.fiat,
            asset = leg.asset,
        ),
        (PaymentChannel::P2P, Verbosity::Brief) => format!(
            "со счёта {bank} купить {asset} за {fiat} на {exchange} методом P2P \
             по курсу {price}, без комиссии.",
            fiat = leg.fiat,
            asset = leg.asset,
        ),
        (PaymentChannel::Card2CryptoExchange, _) => {
            let Some(t) = transfer(leg) else {
                return leg.payment_channel.to_string();
            };
            match verbosity {
                Verbosity::Detailed => format!(
                    "со счёта {bank} нужно купить активы на криптобирже {exchange}. \
                     За {fiat} следует купить {asset} методом Card2CryptoExchange \
                     через {method}, по курсу {price}. В стоимость включена \
                     комиссия биржи {fee}%.",
                    fiat = leg.fiat,
                    asset = leg.asset,
                    method = t.method,
                    fee = format_fee(t.fee),
                ),
                Verbosity::Brief => format!(
                    "со счёта {bank} купить {asset} за {fiat} на {exchange} методом \
                     Card2CryptoExchange через {method} по курсу {price} \
                     (комиссия {fee}% включена).",
                    fiat = leg.fiat,
                    asset = leg.asset,
                    method = t.method,
                    fee = format_fee(t.fee),
                ),
            }
        }
        (PaymentChannel::Card2Wallet2CryptoExchange, _) => {
            let (Some(t), Some(intra)) = (transfer(leg), leg.intra_crypto_exchange.as_ref())
            else {
                return leg.payment_channel.to_string();
            };
            match verbosity {
                Verbosity::Detailed => format!(
                    "со счёта {bank} нужно купить активы на криптобирже {exchange}. \
                     За {fiat} следует купить {asset} методом Card2Wallet2CryptoExchange \
                     по итоговому курсу с учётом всех комиссий - {price}. Этот метод \
                     состоит из двух транзакций: 1. Нужно перевести {fiat} на свой \
                     {exchange} кошелёк через {method}. Комиссия составит {fee}%. \
                     2. Далее, уже внутри биржи надо конвертировать через Спот {fiat} \
                     в {asset} по курсу {intra_price} с учётом комиссии {intra_fee}%.",
                    fiat = leg.fiat,
                    asset = leg.asset,
                    method = t.method,
                    fee = format_fee(t.fee),
                    intra_price = format_rate(intra.price),
                    intra_fee = spot_fee(intra),
                ),
                Verbosity::Brief => format!(
                    "со счёта {bank} купить {asset} за {fiat} на {exchange} методом \
                     Card2Wallet2CryptoExchange через {method} по итоговому курсу \
                     {price} (комиссии {fee}% и {intra_fee}% включены).",
                    fiat = leg.fiat,
                    asset = leg.asset,
                    method = t.method,
                    fee = format_fee(t.fee),
                    intra_fee = spot_fee(intra),
                ),
            }
        }
        (PaymentChannel::Other(raw), _) => raw.clone(),
    }
}

// === Промежуточный обмен ===

/// Описывает одну или две последовательные конвертации через Спот
pub fn interim(
    route: &ArbitrageRoute,
    first: &SpotRate,
    second: Option<&SpotRate>,
    verbosity: Verbosity,
) -> String {
    let exchange = &route.crypto_exchange.name;
    let price = format_rate(first.price);
    let fee = spot_fee(first);

    match (second, verbosity) {
        (None, Verbosity::Detailed) => format!(
            "Теперь внутри {exchange} через Спот надо конвертировать {from} в {to} \
             по курсу {price}. Комиссия биржи {fee}% включена в стоимость.",
            from = first.from_asset,
            to = first.to_asset,
        ),
        (None, Verbosity::Brief) => format!(
            "Теперь на {exchange} через Спот: {from} в {to} по курсу {price} \
             (комиссия {fee}%).",
            from = first.from_asset,
            to = first.to_asset,
        ),
        (Some(second), Verbosity::Detailed) => format!(
            "Теперь внутри {exchange} через Спот надо сначала конвертировать {from} \
             в {to} по курсу {price} (комиссия биржи {fee}%), а потом {to} в {to2} \
             по курсу {price2} (комиссия биржи {fee2}%). Все комиссии включены в \
             стоимость.",
            from = first.from_asset,
            to = first.to_asset,
            to2 = second.to_asset,
            price2 = format_rate(second.price),
            fee2 = spot_fee(second),
        ),
        (Some(second), Verbosity::Brief) => format!(
            "Теперь на {exchange} через Спот: {from} в {to} по курсу {price} \
             (комиссия {fee}%), затем {to} в {to2} по курсу {price2} \
             (комиссия {fee2}%).",
            from = first.from_asset,
            to = first.to_asset,
            to2 = second.to_asset,
            price2 = format_rate(second.price),
            fee2 = spot_fee(second),
        ),
    }
}

// === Продажа ===

/// Описывает продажу актива за фиат и вывод на счёт
pub fn sale(route: &ArbitrageRoute, leg: &ExchangeLeg, verbosity: Verbosity) -> String {
    let bank = &route.output_bank.name;
    let exchange = &route.crypto_exchange.name;
    let price = format_rate(leg.price);
    let label = leg.payment_channel.sale_label();

    match (&leg.payment_channel, verbosity) {
        (PaymentChannel::P2P, Verbosity::Detailed) => format!(
            "нужно перевести активы с {exchange} на счёт {bank} по методу {label}. \
             Перевести {asset} в {fiat} по курсу {price}. P2P не облагается \
             комиссией.",
            fiat = leg.fiat,
            asset = leg.asset,
        ),
        (PaymentChannel::P2P, Verbosity::Brief) => format!(
            "перевести {asset} в {fiat} с {exchange} на счёт {bank} методом {label} \
             по курсу {price}, без комиссии.",
            fiat = leg.fiat,
            asset = leg.asset,
        ),
        (PaymentChannel::Card2CryptoExchange, _) => {
            let Some(t) = transfer(leg) else {
                return leg.payment_channel.to_string();
            };
            match verbosity {
                Verbosity::Detailed => format!(
                    "нужно перевести активы с {exchange} на счёт {bank} по методу \
                     {label} через {method}. Перевести {asset} в {fiat} по курсу \
                     {price}. В стоимость включена комиссия биржи {fee}%.",
                    fiat = leg.fiat,
                    asset = leg.asset,
                    method = t.method,
                    fee = format_fee(t.fee),
                ),
                Verbosity::Brief => format!(
                    "перевести {asset} в {fiat} с {exchange} на счёт {bank} методом \
                     {label} через {method} по курсу {price} (комиссия {fee}% включена).",
                    fiat = leg.fiat,
                    asset = leg.asset,
                    method = t.method,
                    fee = format_fee(t.fee),
                ),
            }
        }
        (PaymentChannel::Card2Wallet2CryptoExchange, _) => {
            let (Some(t), Some(intra)) = (transfer(leg), leg.intra_crypto_exchange.as_ref())
            else {
                return leg.payment_channel.to_string();
            };
            match verbosity {
                Verbosity::Detailed => format!(
                    "нужно перевести активы с {exchange} на счёт {bank} по методу \
                     {label}. Перевести {asset} в {fiat} по итоговому курсу {price} с \
                     учётом всех комиссий. Этот метод состоит из двух транзакций: \
                     1. Нужно внутри биржи через Спот конвертировать {asset} в {fiat} \
                     на свой {exchange} кошелёк, по курсу {intra_price} с учётом \
                     комиссии {intra_fee}%. 2. Далее, нужно вывести с {exchange} \
                     кошелька {fiat} на свой {bank} счёт через {method}. Комиссия \
                     составит {fee}%.",
                    fiat = leg.fiat,
                    asset = leg.asset,
                    method = t.method,
                    fee = format_fee(t.fee),
                    intra_price = format_rate(intra.price),
                    intra_fee = spot_fee(intra),
                ),
                Verbosity::Brief => format!(
                    "перевести {asset} в {fiat} с {exchange} на счёт {bank} методом \
                     {label} через {method} по итоговому курсу {price} (комиссии \
                     {intra_fee}% и {fee}% включены).",
                    fiat = leg.fiat,
                    asset = leg.asset,
                    method = t.method,
                    fee = format_fee(t.fee),
                    intra_fee = spot_fee(intra),
                ),
            }
        }
        (PaymentChannel::Other(raw), _) => raw.clone(),
    }
}

// === Обмен в банке ===

/// Описывает обмен фиата внутри банка
pub fn bank_exchange(exchange: &BankExchange, verbosity: Verbosity) -> String {
    let bank = &exchange.bank.name;
    let from = &exchange.from_fiat;
    let to = &exchange.to_fiat;
    let price = format_rate(exchange.price);
    let market = exchange
        .currency_market
        .as_ref()
        .map(|m| format!(" через биржу {},", m.name))
        .unwrap_or_default();

    match verbosity {
        Verbosity::Detailed => format!(
            "внутри банка {bank} нужно поменять {from} на {to}{market} по курсу {price}, \
             с учётом комиссии."
        ),
        Verbosity::Brief => format!(
            "в банке {bank} поменять {from} на {to}{market} по курсу {price}, \
             комиссия включена."
        ),
    }
}
