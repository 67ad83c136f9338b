//! Conway's Game of Life (B3/S23) transition rule.

/// Compute a cell's next state from its current state and its count of
/// alive Moore neighbors:
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn next_state(alive_now: bool, neighbors: u8) -> bool {
    match (alive_now, neighbors) {
        (true, 2 | 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
    }

    #[test]
    fn test_survival() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert!(!next_state(true, n), "alive cell with {} neighbors", n);
        }
    }

    #[test]
    fn test_reproduction() {
        assert!(next_state(false, 3));
    }

    #[test]
    fn test_full_rule_table() {
        for alive in [true, false] {
            for n in 0..=8u8 {
                let expected = if alive { n == 2 || n == 3 } else { n == 3 };
                assert_eq!(
                    next_state(alive, n),
                    expected,
                    "alive={} neighbors={}", alive, n
                );
            }
        }
    }
}
