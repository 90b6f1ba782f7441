//! # Checksum — Alternating-Weight Mod-10
//!
//! The Luhn variant used by Swedish personal identity numbers: the digits
//! of the short form (year, month, day, serial, check digit — the century
//! never participates) are weighted alternately 2 and 1, weight-2 digits
//! are folded through a substitution table, and the sum must be divisible
//! by ten.
//!
//! The checksum always runs over the digits exactly as encoded. For a
//! coordination number that means the day still carries its +60 offset
//! here; only the calendar validation works with the de-offset day.

/// Substitution table for weight-2 positions: `digit * 2`, with digit sums
/// above 9 reduced by 9 (e.g. `7 * 2 = 14 -> 5`).
const DOUBLED: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Returns true when the digit slice passes the mod-10 check.
///
/// Which positions receive weight 2 follows the oddness of the slice
/// length, so the check digit in last position always carries weight 1.
/// Digits must already be in `0..=9`.
pub(crate) fn valid_checksum(digits: &[u8]) -> bool {
    let odd = digits.len() & 1;

    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            if i & 1 == odd {
                DOUBLED[d as usize]
            } else {
                u32::from(d)
            }
        })
        .sum();

    sum % 10 == 0
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Compute the check digit that completes a 9-digit prefix.
    fn complete(prefix: &[u8]) -> u8 {
        for check in 0..10u8 {
            let mut full = prefix.to_vec();
            full.push(check);
            if valid_checksum(&full) {
                return check;
            }
        }
        unreachable!("one of the ten digits always completes the sum");
    }

    proptest! {
        /// Every 9-digit prefix has exactly one completing check digit.
        #[test]
        fn exactly_one_check_digit(prefix in proptest::collection::vec(0u8..10, 9)) {
            let count = (0..10u8)
                .filter(|&check| {
                    let mut full = prefix.clone();
                    full.push(check);
                    valid_checksum(&full)
                })
                .count();
            prop_assert_eq!(count, 1);
        }

        /// The checksum detects every single-digit substitution.
        #[test]
        fn detects_single_digit_errors(
            prefix in proptest::collection::vec(0u8..10, 9),
            position in 0usize..10,
            replacement in 0u8..10,
        ) {
            let mut full = prefix.clone();
            full.push(complete(&prefix));
            prop_assume!(full[position] != replacement);

            full[position] = replacement;
            prop_assert!(!valid_checksum(&full));
        }
    }
}
