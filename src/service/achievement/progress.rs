//! Pure progress arithmetic for the achievement calculator.

/// Progress percentage from a current value against a target.
///
/// Uses integer division, so progress only reaches 100 once the target is
/// actually met.
pub fn from_ratio(current: i64, target: i64) -> i32 {
    if target <= 0 {
        return 100;
    }

    let progress = current.saturating_mul(100) / target;

    progress.min(100) as i32
}

/// Resolves the new stored progress from the existing value and an optional
/// freshly computed one. Progress never decreases; `None` leaves it unchanged.
pub fn resolve(existing: i32, computed: Option<i32>) -> i32 {
    match computed {
        Some(computed) => existing.max(computed).clamp(0, 100),
        None => existing.clamp(0, 100),
    }
}
