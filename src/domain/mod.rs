mod grid;
mod patterns;
mod rules;
mod view;

pub use grid::{Grid, DEFAULT_SEED_PROBABILITY};
pub use patterns::{Pattern, presets};
pub use rules::next_state;
pub use view::GridView;
