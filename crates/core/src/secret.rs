//! Secret generation.
//!
//! A secret is the first `num_digits` entries of a uniformly shuffled digit
//! pool, so digits never repeat and every ordered selection is equally likely.

use crate::config::{check_num_digits, ConfigError};
use crate::rng::SimpleRng;
use crate::types::{Secret, MAX_NUM_DIGITS};

const DIGIT_POOL: [u8; MAX_NUM_DIGITS] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Generate a secret of `num_digits` distinct digits.
///
/// Fails with [`ConfigError::NumDigitsOutOfRange`] when `num_digits` is 0 or
/// larger than the digit pool.
pub fn generate(num_digits: usize, rng: &mut SimpleRng) -> Result<Secret, ConfigError> {
    check_num_digits(num_digits)?;

    let mut pool = DIGIT_POOL;
    rng.partial_shuffle(&mut pool, num_digits);

    Secret::from_digits(&pool[..num_digits]).ok_or(ConfigError::NumDigitsOutOfRange(num_digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_every_valid_length() {
        let mut rng = SimpleRng::new(2024);
        for n in 1..=MAX_NUM_DIGITS {
            for _ in 0..50 {
                let secret = generate(n, &mut rng).unwrap();
                assert_eq!(secret.len(), n);

                let mut seen = [false; MAX_NUM_DIGITS];
                for &d in secret.digits() {
                    assert!(d <= 9);
                    assert!(!seen[d as usize], "repeated digit in {}", secret);
                    seen[d as usize] = true;
                }
                assert!(secret.to_string().chars().all(|c| c.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn test_generate_rejects_zero_and_eleven() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(generate(0, &mut rng), Err(ConfigError::NumDigitsOutOfRange(0)));
        assert_eq!(generate(11, &mut rng), Err(ConfigError::NumDigitsOutOfRange(11)));
    }

    #[test]
    fn test_generate_same_seed_same_secret() {
        let mut a = SimpleRng::new(77);
        let mut b = SimpleRng::new(77);
        for _ in 0..20 {
            assert_eq!(generate(3, &mut a), generate(3, &mut b));
        }
    }

    #[test]
    fn test_generate_full_length_is_permutation() {
        let mut rng = SimpleRng::new(5);
        let secret = generate(10, &mut rng).unwrap();
        let mut digits: Vec<u8> = secret.digits().to_vec();
        digits.sort_unstable();
        assert_eq!(digits, DIGIT_POOL.to_vec());
    }

    #[test]
    fn test_generate_first_digit_roughly_uniform() {
        let mut rng = SimpleRng::new(31337);
        let mut counts = [0u32; MAX_NUM_DIGITS];
        for _ in 0..10_000 {
            let secret = generate(3, &mut rng).unwrap();
            counts[secret.digits()[0] as usize] += 1;
        }
        for (digit, count) in counts.iter().enumerate() {
            assert!(
                (800..1200).contains(count),
                "digit {} led {} secrets",
                digit,
                count
            );
        }
    }
}
