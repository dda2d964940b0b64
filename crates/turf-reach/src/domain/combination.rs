//! Combination enumeration
//!
//! Index-based generator of k-subsets of `0..n` in lexicographic order.
//! Indices inside each combination are increasing, so mapping them back onto
//! the selected columns keeps the selection order as the reveal order.

/// Lexicographic k-combinations of `0..n`
///
/// Restartable: `clone()` or build a new one to enumerate again.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    /// Create a generator of all `k`-subsets of `0..n`
    ///
    /// Yields nothing when `k > n`, and a single empty combination when `k == 0`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }

    /// Advance `indices` to the next combination; false when exhausted
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        // Rightmost position that can still move right
        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] != i + self.n - k) else {
            return false;
        };
        self.indices[pos] += 1;
        for i in pos + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        self.done = !self.advance();
        Some(current)
    }
}

/// Binomial coefficient C(n, k)
///
/// Returns `None` if the result does not fit in a `u64`.
pub fn combination_count(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut count: u128 = 1;
    for i in 0..k {
        // Exact at every step: the running product is C(n, i + 1)
        count = count * (n - i) as u128 / (i + 1) as u128;
        if count > u64::MAX as u128 {
            return None;
        }
    }
    Some(count as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinations_lexicographic() {
        let all: Vec<_> = Combinations::new(4, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_combinations_full_size() {
        let all: Vec<_> = Combinations::new(3, 3).collect();
        assert_eq!(all, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_combinations_singletons() {
        let all: Vec<_> = Combinations::new(3, 1).collect();
        assert_eq!(all, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_combinations_k_zero() {
        let all: Vec<_> = Combinations::new(3, 0).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_combinations_k_exceeds_n() {
        assert_eq!(Combinations::new(2, 3).count(), 0);
    }

    #[test]
    fn test_combinations_restartable() {
        let combos = Combinations::new(5, 3);
        let first: Vec<_> = combos.clone().collect();
        let second: Vec<_> = combos.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_combinations_match_count() {
        for n in 0..9 {
            for k in 0..=n {
                let count = Combinations::new(n, k).count() as u64;
                assert_eq!(Some(count), combination_count(n, k), "n={} k={}", n, k);
            }
        }
    }

    #[test]
    fn test_combination_count_values() {
        assert_eq!(combination_count(5, 2), Some(10));
        assert_eq!(combination_count(30, 5), Some(142_506));
        assert_eq!(combination_count(52, 26), Some(495_918_532_948_104));
        assert_eq!(combination_count(3, 4), Some(0));
    }

    #[test]
    fn test_combination_count_overflow() {
        assert_eq!(combination_count(200, 100), None);
    }
}
