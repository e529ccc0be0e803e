//! Table row presentation: colour, freshness and modal content.

mod freshness;
mod row;

pub use freshness::{MAX_AGE_SECONDS, RowColor, RowHighlight, elapsed_seconds, update_age_seconds};
pub use row::RowView;
