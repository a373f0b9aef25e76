pub mod metrics;

pub use metrics::{FontMetrics, ScaledFontMetrics};
