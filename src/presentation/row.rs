//! Rendered view of one table row.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{RowColor, RowHighlight, elapsed_seconds, update_age_seconds};
use crate::config::FreshnessConfig;
use crate::domain::ArbitrageRoute;
use crate::narration::{Narration, escape_html};

/// RowView holds everything the table and the instruction modal display for a bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub diagram: String,
    pub marginality: Decimal,
    pub color: RowColor,
    pub age_seconds: u64,
    pub highlight: RowHighlight,
    pub steps: Vec<String>,
    pub modal_title: String,
    pub modal_body: String,
}

impl RowView {
    /// Builds the view for a route and its narration at time `now`.
    pub fn build(
        route: &ArbitrageRoute,
        narration: &Narration,
        now: DateTime<Utc>,
        freshness: &FreshnessConfig,
    ) -> Self {
        let elapsed = elapsed_seconds(route.update.updated, now);
        let diagram = escape_html(&narration.title);

        Self {
            modal_title: format!("Инструкция к связке:<p><h5><b>{diagram}</b></h5></p>"),
            modal_body: format!("<h5>{}</h5>", narration.to_modal_html()),
            diagram: narration.title.clone(),
            marginality: route.marginality_percentage,
            color: RowColor::from_marginality(route.marginality_percentage),
            age_seconds: update_age_seconds(route.update.updated, now),
            highlight: RowHighlight::classify(route, elapsed, freshness),
            steps: narration.steps.clone(),
        }
    }

    /// Marginality column text, e.g. "1.27%".
    pub fn marginality_label(&self) -> String {
        format!("{}%", self.marginality.normalize())
    }

    /// Age column text, e.g. "< 3 сек.".
    pub fn age_label(&self) -> String {
        format!("< {} сек.", self.age_seconds)
    }

    /// Plain-text block for terminal output.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "[{}] {} | {} | {}",
            self.color,
            self.marginality_label(),
            self.diagram,
            self.age_label()
        );
        if let Some(class) = self.highlight.css() {
            out.push_str(" | ");
            out.push_str(class);
        }
        for step in &self.steps {
            out.push_str("\n  ");
            out.push_str(step);
        }
        out
    }
}
