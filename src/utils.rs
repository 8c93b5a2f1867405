pub mod persist_tags;
pub mod rank_frequencies;
pub mod render_tags;

pub use persist_tags::persist_tags;
pub use rank_frequencies::rank_frequencies;
pub use render_tags::{render_display, render_tags};
