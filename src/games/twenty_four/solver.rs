//! Exhaustive solvability search over four-number sets.

use tracing::debug;

use crate::core::GameRng;

/// The value every round aims for.
pub const TARGET: f64 = 24.0;

/// Tolerance for floating-point comparison against [`TARGET`].
pub const TOLERANCE: f64 = 1e-4;

/// Smallest operand a round may contain (ace).
pub const MIN_NUMBER: i32 = 1;

/// Largest operand a round may contain (king).
pub const MAX_NUMBER: i32 = 13;

/// The four arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub(super) const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    /// Apply the operator; `None` on division by zero.
    pub(super) fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Op::Add => Some(lhs + rhs),
            Op::Sub => Some(lhs - rhs),
            Op::Mul => Some(lhs * rhs),
            Op::Div => (rhs != 0.0).then(|| lhs / rhs),
        }
    }

}

/// Whether some arrangement of `numbers` reaches 24.
///
/// Tries every permutation of the four numbers and every ordered triple of
/// operators, evaluated strictly left-to-right as
/// `((n0 op0 n1) op1 n2) op2 n3` - 24 orderings x 64 operator triples. A
/// combination that divides by zero is skipped, not an error, so sets whose
/// only near-misses pass through a zero divisor are still judged
/// unsolvable. Deterministic for a fixed input.
#[must_use]
pub fn has_solution(numbers: &[i32; 4]) -> bool {
    let nums = numbers.map(f64::from);

    for a in 0..4 {
        for b in 0..4 {
            if b == a {
                continue;
            }
            for c in 0..4 {
                if c == a || c == b {
                    continue;
                }
                let d = 6 - a - b - c;
                let ordered = [nums[a], nums[b], nums[c], nums[d]];

                for op0 in Op::ALL {
                    for op1 in Op::ALL {
                        for op2 in Op::ALL {
                            if let Some(value) = eval_left_to_right(ordered, [op0, op1, op2]) {
                                if (value - TARGET).abs() < TOLERANCE {
                                    return true;
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    false
}

/// Evaluate `((n0 op0 n1) op1 n2) op2 n3`; `None` if any step divides by
/// zero.
fn eval_left_to_right(nums: [f64; 4], ops: [Op; 3]) -> Option<f64> {
    let first = ops[0].apply(nums[0], nums[1])?;
    let second = ops[1].apply(first, nums[2])?;
    ops[2].apply(second, nums[3])
}

/// Draw uniform numbers in `[MIN_NUMBER, MAX_NUMBER]` until a solvable set
/// appears.
///
/// Unbounded in the worst case, but most four-number sets in range are
/// solvable, so in practice a handful of draws suffices.
pub fn generate(rng: &mut GameRng) -> [i32; 4] {
    loop {
        let numbers: [i32; 4] = std::array::from_fn(|_| rng.gen_range(MIN_NUMBER..MAX_NUMBER + 1));
        if has_solution(&numbers) {
            debug!(?numbers, "generated solvable set");
            return numbers;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solvable_sets() {
        // ((8 - 4) * 4) + 8 = 24.
        assert!(has_solution(&[4, 4, 8, 8]));
        // 1 * 2 * 3 * 4 = 24.
        assert!(has_solution(&[1, 2, 3, 4]));
        // (6 * 6) - (6 + 6) = 24 left-to-right as ((6 * 6) - 6) - 6.
        assert!(has_solution(&[6, 6, 6, 6]));
        // 13 + 13 - 1 - 1 = 24.
        assert!(has_solution(&[13, 13, 1, 1]));
    }

    #[test]
    fn test_unsolvable_sets() {
        assert!(!has_solution(&[1, 1, 1, 1]));
        // The classic 3 3 8 8 solution 8 / (3 - 8/3) needs nesting no
        // left-to-right chain can express.
        assert!(!has_solution(&[3, 3, 8, 8]));
    }

    #[test]
    fn test_has_solution_is_deterministic() {
        for numbers in [[4, 4, 8, 8], [1, 1, 1, 1], [5, 7, 9, 11]] {
            assert_eq!(has_solution(&numbers), has_solution(&numbers));
        }
    }

    #[test]
    fn test_division_by_zero_is_skipped_not_fatal() {
        // Every set containing zeros would divide by zero in many
        // combinations; the search must survive them. (Zeros are outside
        // the generated range but has_solution accepts any integers.)
        assert!(has_solution(&[0, 8, 3, 1]));
        assert!(!has_solution(&[0, 0, 0, 0]));
    }

    #[test]
    fn test_generate_only_returns_solvable() {
        for seed in 0..10 {
            let mut rng = GameRng::new(seed);
            let numbers = generate(&mut rng);
            assert!(has_solution(&numbers));
            for n in numbers {
                assert!((MIN_NUMBER..=MAX_NUMBER).contains(&n));
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);
        assert_eq!(generate(&mut rng1), generate(&mut rng2));
    }

    #[test]
    fn test_op_apply() {
        assert_eq!(Op::Add.apply(2.0, 3.0), Some(5.0));
        assert_eq!(Op::Sub.apply(2.0, 3.0), Some(-1.0));
        assert_eq!(Op::Mul.apply(2.0, 3.0), Some(6.0));
        assert_eq!(Op::Div.apply(3.0, 2.0), Some(1.5));
        assert_eq!(Op::Div.apply(3.0, 0.0), None);
    }
}
