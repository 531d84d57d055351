//! The four mask-evaluation penalty rules (JIS X 0510 §8.8.2), scored against
//! a fully drawn and masked [`Matrix`].

use crate::finder_penalty::FinderPenalty;
use crate::matrix::Matrix;

const PENALTY_N1: i32 = 3;
const PENALTY_N2: i32 = 3;
const PENALTY_N3: i32 = 40;
const PENALTY_N4: i32 = 10;

/// Computes `P1 + P2 + P3 + P4` for the matrix's current (masked) state.
pub fn score(matrix: &Matrix) -> i32 {
    let mut result = 0;
    let size = matrix.size();

    // P1 (row runs) and P3 (row finder-like patterns).
    for y in 0..size {
        let mut run_color = false;
        let mut run_len = 0;
        let mut history = FinderPenalty::new(size);
        for x in 0..size {
            if matrix.get(x, y) == run_color {
                run_len += 1;
                if run_len == 5 {
                    result += PENALTY_N1;
                } else if run_len > 5 {
                    result += 1;
                }
            } else {
                history.add_history(run_len);
                if !run_color {
                    result += history.count_patterns() * PENALTY_N3;
                }
                run_color = matrix.get(x, y);
                run_len = 1;
            }
        }
        result += history.terminate_and_count(run_color, run_len) * PENALTY_N3;
    }

    // P1 (column runs) and P3 (column finder-like patterns).
    for x in 0..size {
        let mut run_color = false;
        let mut run_len = 0;
        let mut history = FinderPenalty::new(size);
        for y in 0..size {
            if matrix.get(x, y) == run_color {
                run_len += 1;
                if run_len == 5 {
                    result += PENALTY_N1;
                } else if run_len > 5 {
                    result += 1;
                }
            } else {
                history.add_history(run_len);
                if !run_color {
                    result += history.count_patterns() * PENALTY_N3;
                }
                run_color = matrix.get(x, y);
                run_len = 1;
            }
        }
        result += history.terminate_and_count(run_color, run_len) * PENALTY_N3;
    }

    // P2: 2x2 same-color blocks.
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let color = matrix.get(x, y);
            if color == matrix.get(x + 1, y)
                && color == matrix.get(x, y + 1)
                && color == matrix.get(x + 1, y + 1)
            {
                result += PENALTY_N2;
            }
        }
    }

    // P4: dark/light balance.
    let mut dark = 0i32;
    for y in 0..size {
        for x in 0..size {
            dark += i32::from(matrix.get(x, y));
        }
    }
    let total = size * size;
    let k = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
    debug_assert!((0..=9).contains(&k));
    result += k * PENALTY_N4;

    result
}
