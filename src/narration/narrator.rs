//! Route narrator: numbered, human-readable instructions for a bundle.

use serde::Deserialize;
use tracing::trace;

use super::format::escape_html;
use super::legs;
use super::step::{Step, plan_steps};
use crate::domain::{ArbitrageRoute, RouteError};

/// Verbosity selects between the full instructions and a condensed form.
///
/// Both produce the same steps in the same order; `Brief` drops the
/// explanatory sentences and the per-transaction breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    #[default]
    Detailed,
    Brief,
}

/// Narration is the rendered instruction set for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    /// Route label, passed through unchanged.
    pub title: String,
    /// Numbered steps, e.g. "1. Сначала ...".
    pub steps: Vec<String>,
}

impl Narration {
    /// Joins the steps as HTML paragraphs for the modal body.
    pub fn to_modal_html(&self) -> String {
        self.steps
            .iter()
            .map(|step| format!("<p>{}</p>", escape_html(step)))
            .collect()
    }
}

/// Narrator turns routes into [`Narration`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct Narrator {
    verbosity: Verbosity,
}

impl Narrator {
    /// Creates a narrator with the given verbosity.
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Narrates a route the caller has already validated.
    ///
    /// A channel whose required details are missing is narrated as its bare
    /// label; use [`Narrator::narrate_checked`] to reject such routes instead.
    pub fn narrate(&self, route: &ArbitrageRoute) -> Narration {
        let steps = plan_steps(route);
        let total = steps.len();

        let steps = steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let text = self.describe(route, step);
                trace!(index, kind = step.kind(), "Step described");
                format!("{}. {}{}", index + 1, lead_in(index, total, step), text)
            })
            .collect::<Vec<_>>();

        trace!(diagram = %route.diagram(), steps = steps.len(), "Route narrated");

        Narration {
            title: route.diagram().to_string(),
            steps,
        }
    }

    /// Validates the route, then narrates it.
    pub fn narrate_checked(&self, route: &ArbitrageRoute) -> Result<Narration, RouteError> {
        route.validate()?;
        Ok(self.narrate(route))
    }

    /// Describes a single step without numbering or lead-in.
    pub fn describe(&self, route: &ArbitrageRoute, step: &Step<'_>) -> String {
        match *step {
            Step::Bank(exchange) => legs::bank_exchange(exchange, self.verbosity),
            Step::Purchase(leg) => legs::purchase(route, leg, self.verbosity),
            Step::Interim { first, second } => legs::interim(route, first, second, self.verbosity),
            Step::Sale(leg) => legs::sale(route, leg, self.verbosity),
        }
    }
}

/// Picks the connective that opens a step.
///
/// The first step opens with "Сначала", the last with "Последнее,". The
/// interim step text already opens with "Теперь" and takes no connective.
fn lead_in(index: usize, total: usize, step: &Step<'_>) -> &'static str {
    if index == 0 {
        "Сначала "
    } else if index + 1 == total {
        "Последнее, "
    } else if matches!(step, Step::Interim { .. }) {
        ""
    } else {
        "Далее, "
    }
}
