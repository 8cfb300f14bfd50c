//! Command implementations

pub mod check;
pub mod play;
pub mod scores;

pub use check::{ConfigReport, check_config, print_config_report};
pub use play::{PlayOptions, SessionEnd, SessionSummary, play_session, run_play};
pub use scores::{run_scores, top_scores};
