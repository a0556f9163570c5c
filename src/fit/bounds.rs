//! Asymmetric uncertainty bounds around the best step
//!
//! The bounds are the widest run of consecutive steps around the best one that
//! fit exactly as many measured points as the best step does:
//!
//! ```text
//! counts  3 3 4 5 5 5 5 4 3
//!               ^ ^ ^ ^
//!           lower best  upper
//! ```
//!
//! Both scans start at the best step itself, so `lower <= best <= upper`
//! always holds.

/// Last step after `best` that still has the best step's match count
///
/// Scans `best..counts.len()`; returns `counts.len()` (the iteration count)
/// when the count never changes.
pub fn upper_bound_step(counts: &[usize], best: usize) -> usize {
    let reference = counts[best];
    (best..counts.len())
        .find(|&j| counts[j] != reference)
        .map(|j| j - 1)
        .unwrap_or(counts.len())
}

/// First step before `best` that still has the best step's match count
///
/// Scans from `best` down to step 0 inclusive; returns 0 when the count never
/// changes.
pub fn lower_bound_step(counts: &[usize], best: usize) -> usize {
    let reference = counts[best];
    (0..=best)
        .rev()
        .find(|&j| counts[j] != reference)
        .map(|j| j + 1)
        .unwrap_or(0)
}

// =================================================================================================
// Tests
// =================================================================================================
