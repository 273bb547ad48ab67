//! Unit tests for pipeline stage timing.

use sheetchart::perf::ScopedTimer;
use std::thread;
use std::time::Duration;

#[test]
fn test_timer_measures_elapsed_time() {
    let timer = ScopedTimer::new("sleep", 10_000.0);
    thread::sleep(Duration::from_millis(5));
    assert!(timer.elapsed_ms() >= 5.0);
}

#[test]
fn test_slow_stage_drop_does_not_panic() {
    // Zero threshold forces the warning path
    let timer = ScopedTimer::new("slow", 0.0);
    thread::sleep(Duration::from_millis(1));
    drop(timer);
}
