pub mod chart;
pub mod project;
pub mod window;

pub use chart::{chart_config, ranked_slices, PALETTE};
pub use project::extract_project_name;
pub use window::TimeWindow;
