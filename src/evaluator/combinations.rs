/// Iterates every 5-element index subset of `0..n` in lexicographic order.
///
/// `n` below 5 yields nothing; the evaluator only calls it with 5, 6 or 7.
pub struct FiveCardSubsets {
    n: usize,
    indices: [usize; 5],
    done: bool,
}

impl FiveCardSubsets {
    pub fn new(n: usize) -> Self {
        Self { n, indices: [0, 1, 2, 3, 4], done: n < 5 }
    }
}

impl Iterator for FiveCardSubsets {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices;

        // rightmost slot that still has room to advance
        match (0..5).rev().find(|&i| self.indices[i] < self.n - 5 + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..5 {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(current)
    }
}
