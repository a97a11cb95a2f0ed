// Score aggregation over the detail payload's skill taxonomy, and the
// per-skill comparison matrix built from the same traversal.

pub mod aggregate;
pub mod heatmap;

pub use heatmap::{build_heatmap, Heatmap};
