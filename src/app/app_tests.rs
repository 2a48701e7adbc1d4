use std::time::{Duration, Instant};

use super::*;
use crate::config::Config;
use crate::counter::{COUNTED_CLASS, STATS_SELECTOR};
use crate::page::demo_page;
use crate::reveal::ACTIVE_CLASS;

fn ready_app() -> App {
    let mut app = App::new(demo_page(), &Config::default());
    // simulate the first render's geometry: 22 page rows
    app.scroll.update_bounds(app.page.total_rows(), 22);
    app
}

/// Run ticks over simulated time until nothing is animating
fn settle(app: &mut App, start: Instant) -> Instant {
    let mut now = start;
    for _ in 0..600 {
        now += Duration::from_millis(16);
        app.on_tick(now);
        if !app.scroll.is_gliding() && app.counters.active_runs() == 0 {
            break;
        }
    }
    now
}

#[test]
fn test_first_tick_reveals_visible_blocks_only() {
    let mut app = ready_app();
    app.on_tick(Instant::now());

    let heading = app.page.select_blocks(".section-heading")[0];
    assert!(app.page.block(heading).has_class(ACTIVE_CLASS));

    // the process heading is far below the first viewport
    let last_heading = *app.page.select_blocks(".section-heading").last().unwrap();
    assert!(!app.page.block(last_heading).has_class(ACTIVE_CLASS));
}

#[test]
fn test_scrolling_to_stats_runs_counters_to_completion() {
    let mut app = ready_app();
    let start = Instant::now();
    app.on_tick(start);
    assert_eq!(app.counters.active_runs(), 0);

    // jump so the stats section fills the viewport
    app.scroll.jump_to_bottom();
    app.on_tick(start + Duration::from_millis(16));
    assert!(app.counters.active_runs() > 0);

    let container = app.page.select_sections(STATS_SELECTOR)[0];
    assert!(app.page.section(container).has_class(COUNTED_CLASS));

    settle(&mut app, start);
    let displays = app.page.select_within(container, ".stat-number");
    assert_eq!(app.page.block(displays[0]).text(), "10M");
    assert_eq!(app.page.block(displays[1]).text(), "500+");
    assert_eq!(app.page.block(displays[2]).text(), "₹0");
}

#[test]
fn test_leaving_and_returning_does_not_restart_counters() {
    let mut app = ready_app();
    let start = Instant::now();
    app.on_tick(start);

    app.scroll.jump_to_bottom();
    app.on_tick(start + Duration::from_millis(16));
    let end = settle(&mut app, start);

    // scroll away and back
    app.scroll.jump_to_top();
    app.on_tick(end + Duration::from_millis(16));
    app.scroll.jump_to_bottom();
    app.on_tick(end + Duration::from_millis(32));

    assert_eq!(app.counters.active_runs(), 0);
    let container = app.page.select_sections(STATS_SELECTOR)[0];
    let displays = app.page.select_within(container, ".stat-number");
    assert_eq!(app.page.block(displays[0]).text(), "10M");
}

#[test]
fn test_navbar_shadow_follows_scroll() {
    let mut app = ready_app();
    app.on_tick(Instant::now());
    assert!(!app.navbar.has_shadow());

    app.scroll.scroll_down(10);
    app.on_tick(Instant::now());
    assert!(app.navbar.has_shadow());

    app.scroll.jump_to_top();
    app.on_tick(Instant::now());
    assert!(!app.navbar.has_shadow());
}

#[test]
fn test_parallax_applies_during_tick() {
    let mut app = ready_app();
    app.scroll.scroll_down(10);
    app.on_tick(Instant::now());

    let hero = app.page.select_blocks(".hero-content")[0];
    assert_eq!(app.page.block(hero).style.offset_rows, 5);
    assert_eq!(app.page.block(hero).style.fade, 50);
}

#[test]
fn test_glide_advances_one_step_per_tick() {
    let mut app = ready_app();
    app.glide_to_anchor("process");
    let before = app.scroll.offset;

    app.on_tick(Instant::now());
    assert!(app.scroll.offset > before);

    settle(&mut app, Instant::now());
    let process = app.page.anchor_target("process").unwrap();
    assert_eq!(app.scroll.offset, app.page.section_extent(process).top);
}

#[test]
fn test_tick_marks_dirty_only_when_something_changed() {
    let mut app = ready_app();
    let start = Instant::now();
    app.on_tick(start);
    app.clear_dirty();

    // nothing in motion, nothing crossing a threshold
    app.on_tick(start + Duration::from_millis(16));
    assert!(!app.should_render());

    app.scroll.scroll_down(10);
    app.on_tick(start + Duration::from_millis(32));
    assert!(app.should_render());
}

#[test]
fn test_anchors_are_in_document_order() {
    let app = ready_app();
    assert_eq!(
        app.anchors(),
        vec!["home", "products", "process", "why", "contact"]
    );
}
