//! Round state and solution checking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::expr::{self, CheckError};
use super::solver::{self, TARGET, TOLERANCE};
use crate::core::GameRng;

/// Verdict on a well-formed expression that uses the right numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CheckOutcome {
    /// The expression reaches 24 within tolerance.
    Correct,
    /// The expression evaluates to something else; the value is carried for
    /// the frontend message.
    WrongValue(f64),
}

/// One round of twenty-four: four numbers in `[1, 13]`, fixed for the
/// round's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwentyFourGame {
    numbers: [i32; 4],
}

impl TwentyFourGame {
    /// Start a round with freshly generated numbers, guaranteed solvable.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let numbers = solver::generate(rng);
        debug!(?numbers, "new round");
        Self { numbers }
    }

    /// Start a round from caller-chosen numbers, for fixed puzzles.
    ///
    /// No solvability check is applied; an unsolvable round simply has no
    /// accepted answer.
    #[must_use]
    pub fn from_numbers(numbers: [i32; 4]) -> Self {
        Self { numbers }
    }

    /// The four numbers of this round.
    #[must_use]
    pub fn numbers(&self) -> [i32; 4] {
        self.numbers
    }

    /// Check a submitted expression against this round.
    ///
    /// The expression must use exactly the round's four numbers (as a
    /// multiset, in any order) and is evaluated with standard operator
    /// precedence and parentheses.
    ///
    /// # Errors
    ///
    /// - [`CheckError::InvalidCharacters`] for characters outside digits,
    ///   operators, parentheses, and whitespace.
    /// - [`CheckError::MalformedExpression`] if the expression does not
    ///   parse.
    /// - [`CheckError::NumberMismatch`] if its literals differ from the
    ///   round's numbers.
    /// - [`CheckError::DivisionByZero`] if evaluation divides by zero.
    pub fn check_solution(&self, expression: &str) -> Result<CheckOutcome, CheckError> {
        let parsed = expr::parse(expression)?;

        let mut found = parsed.literals();
        found.sort_unstable();
        let mut expected = self.numbers.to_vec();
        expected.sort_unstable();
        if found != expected {
            return Err(CheckError::NumberMismatch { expected, found });
        }

        let value = parsed.eval()?;
        if (value - TARGET).abs() < TOLERANCE {
            Ok(CheckOutcome::Correct)
        } else {
            Ok(CheckOutcome::WrongValue(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_is_solvable() {
        let mut rng = GameRng::new(42);
        let game = TwentyFourGame::new(&mut rng);
        assert!(solver::has_solution(&game.numbers()));
    }

    #[test]
    fn test_correct_solution_accepted() {
        let game = TwentyFourGame::from_numbers([4, 4, 8, 8]);
        assert_eq!(
            game.check_solution("(8 - 4) * 4 + 8"),
            Ok(CheckOutcome::Correct)
        );
        // Order of use doesn't matter, only the multiset.
        assert_eq!(
            game.check_solution("8 + 4 * (8 - 4)"),
            Ok(CheckOutcome::Correct)
        );
    }

    #[test]
    fn test_wrong_value_reports_result() {
        let game = TwentyFourGame::from_numbers([4, 4, 8, 8]);
        match game.check_solution("4 * 4 * 8 / 8") {
            Ok(CheckOutcome::WrongValue(value)) => assert!((value - 16.0).abs() < 1e-9),
            other => panic!("expected WrongValue, got {other:?}"),
        }
    }

    #[test]
    fn test_number_mismatch_rejected() {
        let game = TwentyFourGame::from_numbers([4, 4, 8, 8]);

        // Arithmetic reaches 24 but uses only three of the numbers.
        assert_eq!(
            game.check_solution("4 * 4 + 8"),
            Err(CheckError::NumberMismatch {
                expected: vec![4, 4, 8, 8],
                found: vec![4, 4, 8],
            })
        );

        // Right count, wrong values.
        assert_eq!(
            game.check_solution("3 + 4 * 5 + 1"),
            Err(CheckError::NumberMismatch {
                expected: vec![4, 4, 8, 8],
                found: vec![1, 3, 4, 5],
            })
        );

        // Reusing a number counts as a different multiset.
        assert_eq!(
            game.check_solution("4 + 4 + 8 + 8 + 8"),
            Err(CheckError::NumberMismatch {
                expected: vec![4, 4, 8, 8],
                found: vec![4, 4, 8, 8, 8],
            })
        );
    }

    #[test]
    fn test_precedence_is_honored() {
        // Left-to-right this would be ((3 + 4) * 5) - 1 = 34; with real
        // precedence it is 3 + 20 - 1 = 22.
        let game = TwentyFourGame::from_numbers([1, 3, 4, 5]);
        match game.check_solution("3 + 4 * 5 - 1") {
            Ok(CheckOutcome::WrongValue(value)) => assert!((value - 22.0).abs() < 1e-9),
            other => panic!("expected WrongValue, got {other:?}"),
        }
    }

    #[test]
    fn test_division_by_zero_reported() {
        let game = TwentyFourGame::from_numbers([4, 4, 8, 8]);
        assert_eq!(
            game.check_solution("8 / (4 - 4) + 8"),
            Err(CheckError::DivisionByZero)
        );
    }

    #[test]
    fn test_invalid_characters_reported() {
        let game = TwentyFourGame::from_numbers([4, 4, 8, 8]);
        assert_eq!(
            game.check_solution("4 + 4 + 8 + eight"),
            Err(CheckError::InvalidCharacters)
        );
    }

    #[test]
    fn test_malformed_expression_reported() {
        let game = TwentyFourGame::from_numbers([4, 4, 8, 8]);
        assert_eq!(
            game.check_solution("4 + * 4 8 8"),
            Err(CheckError::MalformedExpression)
        );
    }

    #[test]
    fn test_fractional_intermediates_within_tolerance() {
        // 8 / (3 - 8 / 3) = 24 exactly only in rational arithmetic; the
        // float result must still land inside the 1e-4 window.
        let game = TwentyFourGame::from_numbers([3, 3, 8, 8]);
        assert_eq!(
            game.check_solution("8 / (3 - 8 / 3)"),
            Ok(CheckOutcome::Correct)
        );
    }

    #[test]
    fn test_round_trip_serde() {
        let game = TwentyFourGame::from_numbers([1, 2, 3, 4]);
        let json = serde_json::to_string(&game).unwrap();
        let restored: TwentyFourGame = serde_json::from_str(&json).unwrap();
        assert_eq!(game, restored);
    }
}
