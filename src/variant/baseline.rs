//! # baseline
//!
//! the producer loop inlined into the consumer, nothing suspends
//!

use super::Variant;
use crate::rt::Result;

/// direct loop variant
#[derive(Debug, Clone)]
pub struct Baseline {
    x: i64,
    y: i64,
}

impl Baseline {
    /// create a producer at the start of the sequence
    pub fn new() -> Self {
        Baseline { x: 0, y: 1 }
    }
}

impl Default for Baseline {
    fn default() -> Self {
        Self::new()
    }
}

impl Variant for Baseline {
    const NAME: &'static str = "baseline";
    const BASE_ITERATIONS: u64 = 1_000_000_000;

    #[inline]
    fn next_value(&mut self) -> Result<i64> {
        let x = self.x;
        self.x = self.y;
        self.y = self.y.wrapping_add(x);
        Ok(x)
    }

    fn for_each_value<F: FnMut(i64)>(&mut self, n: u64, mut f: F) -> Result<()> {
        let (mut x, mut y) = (self.x, self.y);
        for _ in 0..n {
            f(x);
            let z = x.wrapping_add(y);
            x = y;
            y = z;
        }
        self.x = x;
        self.y = y;
        Ok(())
    }

    fn sum(&mut self, n: u64) -> Result<i64> {
        let (mut x, mut y) = (self.x, self.y);
        let mut sum = 0i64;
        for _ in 0..n {
            sum = sum.wrapping_add(x);
            let z = x.wrapping_add(y);
            x = y;
            y = z;
        }
        self.x = x;
        self.y = y;
        Ok(sum)
    }
}
