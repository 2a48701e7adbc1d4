//! Configuration types and defaults
//!
//! Every field has a default so a partial config file only overrides what it
//! names. Durations are in milliseconds, distances in terminal rows.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub motion: MotionConfig,
    pub counter: CounterConfig,
    pub reveal: RevealConfig,
    pub navbar: NavbarConfig,
    pub parallax: ParallaxConfig,
}

/// Global motion switch
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Skip animations and render final values immediately
    pub reduce: bool,
}

/// Stat counter timing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    /// Total duration of a magnitude (M/K) count-up
    pub duration_ms: u64,
    /// Tick period for magnitude count-ups
    pub magnitude_tick_ms: u64,
    /// Tick period for plus-count count-ups
    pub plus_tick_ms: u64,
    /// Increment per tick for plus-count count-ups
    pub plus_step: u64,
    /// Fraction of the stats container that must be visible to trigger
    pub trigger_threshold: f32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            magnitude_tick_ms: 16,
            plus_tick_ms: 30,
            plus_step: 10,
            trigger_threshold: 0.5,
        }
    }
}

/// Scroll reveal tuning
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Fraction of a block that must be visible to reveal it
    pub threshold: f32,
    /// Rows shaved off the bottom of the viewport before testing visibility
    pub bottom_margin_rows: u16,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            bottom_margin_rows: 2,
        }
    }
}

/// Navbar shadow tuning
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarConfig {
    /// Scroll offset (rows) past which the bar renders with a shadow
    pub shadow_after_rows: u16,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            shadow_after_rows: 4,
        }
    }
}

/// Parallax hero tuning
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallaxConfig {
    /// Rows of scroll over which the hero fades out completely
    pub fade_rows: u16,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { fade_rows: 20 }
    }
}
