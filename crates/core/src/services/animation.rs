//! Eased animation progress as a pure function of elapsed time.
//!
//! The host drives these from its own frame clock; nothing here holds a
//! timer or mutates state.

/// Donut chart sweep-in.
pub const DONUT_DURATION_MS: u64 = 700;
/// Return-analysis bar grow-in.
pub const BAR_DURATION_MS: u64 = 600;
/// Delay between consecutive bars.
pub const BAR_STAGGER_MS: u64 = 100;

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Progress in `[0, 1]` after `elapsed_ms` of a `duration_ms` animation.
pub fn progress(elapsed_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    let t = (elapsed_ms as f64 / duration_ms as f64).min(1.0);
    ease_out_cubic(t)
}

/// Progress of the `index`-th element of a staggered group. Stays at 0
/// until `index * stagger_ms` has elapsed.
pub fn staggered_progress(elapsed_ms: u64, index: usize, stagger_ms: u64, duration_ms: u64) -> f64 {
    let delay = (index as u64).saturating_mul(stagger_ms);
    match elapsed_ms.checked_sub(delay) {
        Some(local) => progress(local, duration_ms),
        None => 0.0,
    }
}

/// True once every element of a staggered group of `count` has finished.
pub fn is_complete(elapsed_ms: u64, count: usize, stagger_ms: u64, duration_ms: u64) -> bool {
    let last_delay = (count.saturating_sub(1) as u64).saturating_mul(stagger_ms);
    elapsed_ms >= last_delay.saturating_add(duration_ms)
}
