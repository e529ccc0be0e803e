//! Route narration: step planning, leg descriptions and rendering.

mod format;
mod legs;
mod narrator;
mod step;

pub use format::{escape_html, format_fee, format_rate, round_to_two};
pub use narrator::{Narration, Narrator, Verbosity};
pub use step::{Step, plan_steps};
