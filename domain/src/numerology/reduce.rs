//! Digit reduction to a single digit or a master number.

/// Returns `true` for the master numbers 11 and 22.
///
/// Master numbers are never reduced further.
pub fn is_master_number(n: u64) -> bool {
    n == 11 || n == 22
}

/// Reduce a number to a single digit (1-9) or a master number (11, 22).
///
/// The master-number check happens before any digit summing, and again on
/// every intermediate sum, so `29` stops at `11` instead of becoming `2`.
/// `0` reduces to `0`.
///
/// ```
/// use numawise_domain::numerology::reduce;
///
/// assert_eq!(reduce(1990), 1);
/// assert_eq!(reduce(29), 11);
/// assert_eq!(reduce(22), 22);
/// ```
pub fn reduce(n: u64) -> u32 {
    if is_master_number(n) {
        return n as u32;
    }

    let sum = digit_sum(n);
    if is_master_number(sum) || sum <= 9 {
        sum as u32
    } else {
        reduce(sum)
    }
}

fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_numbers_short_circuit() {
        assert_eq!(reduce(11), 11);
        assert_eq!(reduce(22), 22);
    }

    #[test]
    fn test_intermediate_master_numbers_stop() {
        assert_eq!(reduce(29), 11);
        assert_eq!(reduce(38), 11);
        assert_eq!(reduce(47), 11);
        assert_eq!(reduce(499), 22);
        // 1+9+9+9 = 28 -> 10 -> 1
        assert_eq!(reduce(1999), 1);
    }

    #[test]
    fn test_single_digits_unchanged() {
        for n in 1..=9 {
            assert_eq!(reduce(n), n as u32);
        }
    }

    #[test]
    fn test_zero_stays_zero() {
        assert_eq!(reduce(0), 0);
    }

    #[test]
    fn test_multi_step_reduction() {
        // 1+9+9+0 = 19 -> 10 -> 1
        assert_eq!(reduce(1990), 1);
        assert_eq!(reduce(2000), 2);
        assert_eq!(reduce(10), 1);
        assert_eq!(reduce(33), 6);
        assert_eq!(reduce(u64::MAX), reduce(digit_sum(u64::MAX)));
    }

    #[test]
    fn test_reduce_is_idempotent_and_in_domain() {
        for n in 0..5000u64 {
            let once = reduce(n);
            assert_eq!(reduce(once as u64), once, "reduce not idempotent for {}", n);
            assert!(
                once <= 9 || once == 11 || once == 22,
                "reduce({}) = {} outside domain",
                n,
                once
            );
        }
    }

    #[test]
    fn test_is_master_number() {
        assert!(is_master_number(11));
        assert!(is_master_number(22));
        assert!(!is_master_number(33));
        assert!(!is_master_number(2));
    }
}
