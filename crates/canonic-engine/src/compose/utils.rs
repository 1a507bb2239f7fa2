//! Index arithmetic shared by the composer paths.

/// `min(hi, max(lo, value))`: when the bounds cross, the upper bound wins.
pub(crate) fn clamp_i64(value: i64, lo: i64, hi: i64) -> i64 {
    hi.min(lo.max(value))
}

/// Scale length as a signed bound, saturating at `i64::MAX`.
fn signed_len(scale_length: usize) -> i64 {
    i64::try_from(scale_length).unwrap_or(i64::MAX)
}

/// Clamps a raw index into `[0, scale_length - 1]`.
///
/// `scale_length` is at least 1 for every caller.
pub(crate) fn clamp_index(value: i64, scale_length: usize) -> usize {
    let top = signed_len(scale_length).saturating_sub(1);
    usize::try_from(clamp_i64(value, 0, top)).unwrap_or(0)
}

/// Anchor for a position: `base - trend`, kept one step inside the scale edges.
///
/// Scales shorter than 3 entries have no interior; the anchor then lands on
/// the top entry like the crossed-bounds clamp dictates, and never below 0.
pub(crate) fn anchor_index(base_scale_index: i32, trend_value: i32, scale_length: usize) -> i64 {
    let len = signed_len(scale_length);
    let raw = i64::from(base_scale_index) - i64::from(trend_value);
    let anchor = clamp_i64(raw, 1, len.saturating_sub(2));
    clamp_i64(anchor, 0, len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_upper_bound_wins() {
        assert_eq!(clamp_i64(5, 1, 3), 3);
        assert_eq!(clamp_i64(-2, 1, 3), 1);
        assert_eq!(clamp_i64(2, 1, 0), 0);
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(-4, 15), 0);
        assert_eq!(clamp_index(20, 15), 14);
        assert_eq!(clamp_index(7, 15), 7);
        assert_eq!(clamp_index(3, 1), 0);
        assert_eq!(clamp_index(i64::MAX, 15), 14);
        assert_eq!(clamp_index(i64::MAX, usize::MAX), i64::MAX as usize - 1);
    }

    #[test]
    fn test_anchor_index() {
        assert_eq!(anchor_index(10, 2, 15), 8);
        assert_eq!(anchor_index(10, 12, 15), 1);
        assert_eq!(anchor_index(20, 0, 15), 13);
        assert_eq!(anchor_index(0, 0, 2), 0);
        assert_eq!(anchor_index(5, 0, 1), 0);
        assert_eq!(anchor_index(i32::MAX, i32::MIN, 15), 13);
    }
}
