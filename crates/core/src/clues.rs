//! Clue engine - compares a guess against the secret.
//!
//! Per position: same digit in the same place is `Fermi`, a digit found
//! elsewhere in the secret is `Pico`, anything else contributes nothing.
//! Tokens are returned sorted so their order says nothing about positions.

use arrayvec::ArrayVec;

use crate::types::{Clue, ClueResult, Guess, Secret, MAX_NUM_DIGITS};

/// Compute the clues for `guess` against `secret`.
///
/// Both are expected to have the same length; extra positions on either side
/// are ignored.
///
/// # Examples
///
/// ```
/// use bagels_core::clues::compute_clues;
/// use bagels_core::types::{Guess, Secret};
///
/// let secret = Secret::parse("248").unwrap();
/// let guess = Guess::from_digits(&[8, 4, 3]).unwrap();
/// assert_eq!(compute_clues(&guess, &secret).to_string(), "Fermi Pico");
/// ```
pub fn compute_clues(guess: &Guess, secret: &Secret) -> ClueResult {
    debug_assert_eq!(guess.len(), secret.len());

    if guess.matches(secret) {
        return ClueResult::Exact;
    }

    let mut clues: ArrayVec<Clue, MAX_NUM_DIGITS> = ArrayVec::new();
    for (&g, &s) in guess.digits().iter().zip(secret.digits()) {
        if g == s {
            clues.push(Clue::Fermi);
        } else if secret.contains(g) {
            // Repeated guess digits each earn a Pico.
            clues.push(Clue::Pico);
        }
    }

    ClueResult::from_clues(clues)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(s: &str) -> Guess {
        let digits: Vec<u8> = s.bytes().map(|b| b - b'0').collect();
        Guess::from_digits(&digits).unwrap()
    }

    fn secret(s: &str) -> Secret {
        Secret::parse(s).unwrap()
    }

    #[test]
    fn test_worked_example() {
        assert_eq!(
            compute_clues(&guess("843"), &secret("248")).to_string(),
            "Fermi Pico"
        );
    }

    #[test]
    fn test_no_match_is_bagels() {
        assert_eq!(compute_clues(&guess("456"), &secret("123")), ClueResult::Bagels);
    }

    #[test]
    fn test_exact_match() {
        let result = compute_clues(&guess("123"), &secret("123"));
        assert_eq!(result, ClueResult::Exact);
        assert_eq!(result.to_string(), "You got it!");
    }

    #[test]
    fn test_all_digits_wrong_place() {
        assert_eq!(
            compute_clues(&guess("312"), &secret("123")).to_string(),
            "Pico Pico Pico"
        );
    }

    #[test]
    fn test_fermi_sorted_before_pico() {
        // Pico at position 0, Fermi at position 2.
        let result = compute_clues(&guess("213"), &secret("123"));
        assert_eq!(result.clues(), &[Clue::Fermi, Clue::Pico, Clue::Pico]);
    }

    #[test]
    fn test_repeated_guess_digit_not_deduplicated() {
        // '1' is Fermi at position 0 and Pico at positions 1 and 2.
        assert_eq!(
            compute_clues(&guess("111"), &secret("123")).to_string(),
            "Fermi Pico Pico"
        );
        assert_eq!(
            compute_clues(&guess("333"), &secret("123")).to_string(),
            "Fermi Pico Pico"
        );
    }

    #[test]
    fn test_single_digit_game() {
        assert_eq!(compute_clues(&guess("7"), &secret("7")), ClueResult::Exact);
        assert_eq!(compute_clues(&guess("6"), &secret("7")), ClueResult::Bagels);
    }

    #[test]
    fn test_ten_digit_reversal() {
        let result = compute_clues(&guess("9876543210"), &secret("0123456789"));
        assert_eq!(result.clues().len(), 10);
        assert!(result.clues().iter().all(|&c| c == Clue::Pico));
    }

    #[test]
    fn test_idempotent() {
        let g = guess("905");
        let s = secret("590");
        assert_eq!(compute_clues(&g, &s), compute_clues(&g, &s));
    }
}
