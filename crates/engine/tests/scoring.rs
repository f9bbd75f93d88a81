//! Integration test: OvershootEngine with the reference collaborators
//!
//! Covers the full path:
//! 1. Ticks feed the sliding window (momentum, volume, median)
//! 2. Trades and books feed the order-flow engine (confidence)
//! 3. Score fuses both and collapses failures to "no value"

use chrono::{DateTime, Duration, TimeZone, Utc};
use overshoot_engine::{OrderBookLevel, OvershootConfig, OvershootEngine};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap()
}

fn engine() -> OvershootEngine {
    OvershootEngine::new(0.2, Duration::seconds(60), 100)
}

/// Engine with two ticks at 100 x 10 and 101 x 5
fn primed_engine() -> OvershootEngine {
    let mut engine = engine();
    engine.add_tick(100.0, 10.0, t0());
    engine.add_tick(101.0, 5.0, t0() + Duration::seconds(1));
    engine
}

#[test]
fn test_two_tick_scenario() {
    let _ = env_logger::try_init();

    let engine = primed_engine();

    assert_eq!(engine.total_vol(), 15.0);
    assert!(engine.momentum().is_some());
    assert_eq!(engine.mid_price(), Some(100.5));

    // EMA 100 -> 100.2, median 100.5: price sits below the median
    let momentum = engine.momentum().unwrap();
    assert!((momentum - (100.2 - 100.5) / 100.5).abs() < 1e-12);
}

#[test]
fn test_fresh_engine_cannot_score() {
    let _ = env_logger::try_init();

    let engine = engine();
    assert_eq!(engine.score(0.0), None);
    assert_eq!(engine.score_or_zero(0.0), (0.0, false));
    assert_eq!(engine.score_failures().insufficient_data, 2);
}

#[test]
fn test_engine_usable_after_failure() {
    let _ = env_logger::try_init();

    let mut engine = engine();
    assert_eq!(engine.score_or_zero(0.0), (0.0, false));

    engine.add_tick(100.0, 10.0, t0());
    engine.add_tick(101.0, 5.0, t0() + Duration::seconds(1));

    let (score, ok) = engine.score_or_zero(0.0);
    assert!(ok);
    assert!(score.is_finite());
    assert!(score > 0.0, "last trade above VWAP should score upward, got {score}");
}

#[test]
fn test_trades_and_books_do_not_touch_volume() {
    let _ = env_logger::try_init();

    let mut engine = primed_engine();
    engine.add_trade(true, 101.0, 1_000.0, t0() + Duration::seconds(2));
    engine.add_trade(false, 100.0, 500.0, t0() + Duration::seconds(3));
    engine.add_order_book(
        t0() + Duration::seconds(4),
        [
            OrderBookLevel::bid(100.0, 50.0, 5.0),
            OrderBookLevel::ask(101.0, 40.0, 4.0),
        ],
    );

    assert_eq!(engine.total_vol(), 15.0);
    assert_eq!(engine.mid_price(), Some(100.5));
}

#[test]
fn test_confidence_read_after_book_update() {
    let _ = env_logger::try_init();

    let mut engine = primed_engine();
    let before = engine.score(0.0).unwrap();

    // Bid depth 3 vs ask depth 1: imbalance 0.5, so confidence 0.5
    engine.add_order_book(
        t0() + Duration::seconds(2),
        [
            OrderBookLevel::bid(100.0, 3.0, 1.0),
            OrderBookLevel::ask(101.0, 1.0, 1.0),
        ],
    );
    assert_eq!(engine.flow().confidence(), 0.5);

    let after = engine.score(0.0).unwrap();
    assert!((after - before * 0.5).abs() < 1e-12);
}

#[test]
fn test_full_confidence_suppresses_score() {
    let _ = env_logger::try_init();

    let mut engine = primed_engine();
    engine.add_trade(true, 101.0, 2.0, t0() + Duration::seconds(2));

    assert_eq!(engine.flow().confidence(), 1.0);
    assert_eq!(engine.score(0.05), Some(0.0));
}

#[test]
fn test_set_scale_last_wins() {
    let _ = env_logger::try_init();

    let mut chained = primed_engine();
    chained.set_scale(1.0, 1.0).set_scale(0.001, 0.002);
    assert_eq!(chained.scales(), (0.001, 0.002));

    let mut repeated = primed_engine();
    repeated.set_scale(0.001, 0.002).set_scale(0.001, 0.002);
    assert_eq!(repeated.scales(), chained.scales());

    assert_eq!(chained.score(0.0001), repeated.score(0.0001));
}

#[test]
fn test_negative_scale_flips_sign() {
    let _ = env_logger::try_init();

    let mut engine = primed_engine();
    let (dir, mom) = engine.scales();
    let upright = engine.score(0.001).unwrap();

    engine.set_scale(-dir, -mom);
    let flipped = engine.score(0.001).unwrap();

    assert!((upright + flipped).abs() < 1e-12);
}

#[test]
fn test_zero_scale_collapses() {
    let _ = env_logger::try_init();

    let mut engine = primed_engine();
    engine.set_scale(0.0, 0.00033251);

    assert_eq!(engine.score_or_zero(0.001), (0.0, false));
    assert_eq!(engine.score_failures().zero_scale, 1);
    assert_eq!(engine.score_failures().total(), 1);
}

#[test]
fn test_stale_ticks_leave_window() {
    let _ = env_logger::try_init();

    let mut engine = primed_engine();
    engine.add_tick(102.0, 1.0, t0() + Duration::seconds(120));

    // Both earlier ticks are more than 60s older than the newest one
    assert_eq!(engine.total_vol(), 1.0);
    assert!(engine.momentum().is_none());
}

#[test]
fn test_engine_from_config_json() {
    let _ = env_logger::try_init();

    let config = OvershootConfig::from_json(
        r#"{
            "ema_alpha": 0.5,
            "window_duration_ms": 1000,
            "window_capacity": 3,
            "book_depth": 2
        }"#,
    )
    .unwrap();
    let mut engine = OvershootEngine::from_config(&config).unwrap();

    for i in 0..5 {
        engine.add_tick(100.0 + i as f64, 1.0, t0() + Duration::milliseconds(100 * i));
    }

    assert_eq!(engine.window().len(), 3);
    assert_eq!(engine.total_vol(), 3.0);
    assert_eq!(engine.book_depth(), 2);
    assert_eq!(engine.scales(), (0.00005920, 0.00033251));
}
