//! Stat counter module
//!
//! Animates statistic displays from zero to the value authored in their text,
//! formatting every intermediate value the way the final value will be
//! formatted. The format is inferred once from the authored text; each
//! display gets one run driven by its own interval timer, and the containing
//! section is marked so a second visibility notification never restarts it.

mod counter_state;
mod format;
mod interval;
mod run;

// Re-export public types
pub use counter_state::{CounterState, DISPLAY_SELECTOR, STATS_SELECTOR};
pub use format::{StatFormat, format_magnitude, infer_format};
pub use interval::IntervalTimer;
pub use run::{CounterRun, RunPhase};

/// Class marking a stats container whose displays have already been started
pub const COUNTED_CLASS: &str = "counted";
