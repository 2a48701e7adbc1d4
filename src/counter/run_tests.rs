use std::time::{Duration, Instant};

use super::*;
use crate::config::CounterConfig;
use proptest::prelude::*;

fn tuning() -> CounterConfig {
    CounterConfig::default()
}

/// Drive a run tick by tick until Done, collecting every rendered text
fn drain(run: &mut CounterRun) -> Vec<String> {
    let mut renders = Vec::new();
    while let Some(text) = run.tick() {
        renders.push(text);
    }
    renders
}

#[test]
fn test_magnitude_run_finishes_at_exact_target() {
    let mut run = CounterRun::magnitude(10_000_000.0, &tuning(), Instant::now());
    let renders = drain(&mut run);

    // 2000ms / 16ms = 125 ticks to reach the target
    assert_eq!(renders.len(), 125);
    assert_eq!(renders.last().unwrap(), "10M");
    assert!(run.is_done());
    assert_eq!(run.current(), 10_000_000.0);
}

#[test]
fn test_magnitude_intermediates_pass_through_rule() {
    let mut run = CounterRun::magnitude(10_000_000.0, &tuning(), Instant::now());
    // first tick: 80,000 renders as 80K
    assert_eq!(run.tick().unwrap(), "80K");
    assert_eq!(run.tick().unwrap(), "160K");
}

#[test]
fn test_half_million_example_rounds_final_to_2m() {
    // The "1.5M" display: intermediates render through the rule and the
    // final text is the rounded exact target, not the authored string.
    let mut run = CounterRun::magnitude(1_500_000.0, &tuning(), Instant::now());
    let renders = drain(&mut run);
    assert_eq!(renders.last().unwrap(), "2M");
    assert!(renders.iter().all(|r| r.ends_with('M') || r.ends_with('K')));
}

#[test]
fn test_plus_run_steps_by_ten_and_never_overshoots() {
    let mut run = CounterRun::plus(505, &tuning(), Instant::now());
    let renders = drain(&mut run);

    let values: Vec<u64> = renders
        .iter()
        .map(|r| r.trim_end_matches('+').parse().unwrap())
        .collect();

    // steps of exactly 10 except the final forced step
    for pair in values.windows(2) {
        assert!(pair[1] > pair[0]);
        assert!(pair[1] - pair[0] <= 10);
    }
    assert!(values.iter().all(|&v| v <= 505));
    assert_eq!(renders.last().unwrap(), "505+");
}

#[test]
fn test_plus_run_exact_multiple_lands_on_target() {
    let mut run = CounterRun::plus(500, &tuning(), Instant::now());
    let renders = drain(&mut run);
    assert_eq!(renders.len(), 50);
    assert_eq!(renders.last().unwrap(), "500+");
}

#[test]
fn test_zero_target_completes_on_first_tick() {
    let mut run = CounterRun::magnitude(0.0, &tuning(), Instant::now());
    assert_eq!(run.tick().unwrap(), "0");
    assert!(run.is_done());

    let mut run = CounterRun::plus(0, &tuning(), Instant::now());
    assert_eq!(run.tick().unwrap(), "0+");
    assert!(run.is_done());
}

#[test]
fn test_done_is_absorbing_and_releases_timer() {
    let mut run = CounterRun::plus(10, &tuning(), Instant::now());
    assert!(run.has_timer());
    drain(&mut run);
    assert!(run.is_done());
    assert!(!run.has_timer());
    assert_eq!(run.tick(), None);
    assert_eq!(run.poll(Instant::now() + Duration::from_secs(10)), None);
}

#[test]
fn test_poll_respects_tick_cadence() {
    let start = Instant::now();
    let mut run = CounterRun::plus(500, &tuning(), start);

    // nothing due before the 30ms period
    assert_eq!(run.poll(start + Duration::from_millis(10)), None);
    // one period: one step
    assert_eq!(
        run.poll(start + Duration::from_millis(30)),
        Some("10+".to_string())
    );
    // a stalled loop catches up, rendering the latest value
    assert_eq!(
        run.poll(start + Duration::from_millis(120)),
        Some("40+".to_string())
    );
}

#[test]
fn test_finish_jumps_straight_to_final_text() {
    let mut run = CounterRun::magnitude(1_500_000.0, &tuning(), Instant::now());
    assert_eq!(run.finish(), "2M");
    assert!(run.is_done());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any whole-million target, the final rendered text is "<n>M".
    #[test]
    fn prop_magnitude_final_text(n in 1u32..500) {
        let mut run = CounterRun::magnitude(n as f64 * 1_000_000.0, &tuning(), Instant::now());
        let renders = drain(&mut run);
        prop_assert_eq!(renders.last().unwrap(), &format!("{}M", n));
    }

    // For any plus target, rendered values are non-decreasing, bounded by the
    // target, and the last render is exactly "<n>+".
    #[test]
    fn prop_plus_monotone_and_exact(n in 0u64..5000) {
        let mut run = CounterRun::plus(n, &tuning(), Instant::now());
        let renders = drain(&mut run);
        let values: Vec<u64> = renders
            .iter()
            .map(|r| r.trim_end_matches('+').parse().unwrap())
            .collect();

        prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(values.iter().all(|&v| v <= n));
        prop_assert_eq!(renders.last().unwrap(), &format!("{}+", n));
    }

    // The run's internal value never decreases over its lifetime.
    #[test]
    fn prop_current_is_non_decreasing(target in 0.0f64..10_000_000.0) {
        let mut run = CounterRun::magnitude(target, &tuning(), Instant::now());
        let mut last = run.current();
        while run.tick().is_some() {
            prop_assert!(run.current() >= last);
            last = run.current();
        }
        prop_assert_eq!(run.current(), target);
    }
}
