//! Step planning: which parts of a route are narrated, and in what order.

use crate::domain::{ArbitrageRoute, BankExchange, ExchangeLeg, SpotRate};

/// Step is one narrated stage of a route, borrowing the record it describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step<'a> {
    /// Fiat conversion inside the input or output bank.
    Bank(&'a BankExchange),
    /// Fiat to asset on the crypto exchange.
    Purchase(&'a ExchangeLeg),
    /// One spot conversion, or two chained ones.
    Interim {
        first: &'a SpotRate,
        second: Option<&'a SpotRate>,
    },
    /// Asset to fiat on the crypto exchange.
    Sale(&'a ExchangeLeg),
}

impl Step<'_> {
    /// Returns a short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Step::Bank(_) => "bank",
            Step::Purchase(_) => "purchase",
            Step::Interim { .. } => "interim",
            Step::Sale(_) => "sale",
        }
    }
}

/// Orders the steps of a route in execution order.
///
/// A bank exchange held by the input bank comes first; any other bank
/// exchange comes last. The purchase, the optional interim conversion and the
/// sale always keep that relative order.
pub fn plan_steps(route: &ArbitrageRoute) -> Vec<Step<'_>> {
    let mut steps = Vec::with_capacity(4);
    let bank_first = route.bank_exchange_first();

    if bank_first {
        if let Some(ref bank_exchange) = route.bank_exchange {
            steps.push(Step::Bank(bank_exchange));
        }
    }

    steps.push(Step::Purchase(&route.input_crypto_exchange));

    if let Some(ref first) = route.interim_crypto_exchange {
        steps.push(Step::Interim {
            first,
            second: route.second_interim_crypto_exchange.as_ref(),
        });
    }

    steps.push(Step::Sale(&route.output_crypto_exchange));

    if !bank_first {
        if let Some(ref bank_exchange) = route.bank_exchange {
            steps.push(Step::Bank(bank_exchange));
        }
    }

    steps
}
