//! # sequence
//!
//! the standard library's lazy iterator machinery, consumed through
//! iterator adapters
//!

use std::iter::{self, Successors};

use super::{take_count, Variant};
use crate::rt::{Error, Result};

type Pair = (i64, i64);
type Pairs = Successors<Pair, fn(&Pair) -> Option<Pair>>;

#[inline]
fn advance(&(x, y): &Pair) -> Option<Pair> {
    Some((y, x.wrapping_add(y)))
}

/// lazy iterator variant
#[derive(Debug, Clone)]
pub struct Sequence {
    pairs: Pairs,
}

impl Sequence {
    /// create a producer at the start of the sequence
    pub fn new() -> Self {
        Sequence {
            pairs: iter::successors(Some((0, 1)), advance as fn(&Pair) -> Option<Pair>),
        }
    }

    /// the remaining values as an iterator
    pub fn values(&mut self) -> impl Iterator<Item = i64> + '_ {
        self.pairs.by_ref().map(|(x, _)| x)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Variant for Sequence {
    const NAME: &'static str = "sequence";
    const BASE_ITERATIONS: u64 = 100_000_000;

    #[inline]
    fn next_value(&mut self) -> Result<i64> {
        self.values().next().ok_or(Error::Done)
    }

    fn for_each_value<F: FnMut(i64)>(&mut self, n: u64, f: F) -> Result<()> {
        let n = take_count(n)?;
        self.values().take(n).for_each(f);
        Ok(())
    }

    fn sum(&mut self, n: u64) -> Result<i64> {
        let n = take_count(n)?;
        Ok(self
            .values()
            .take(n)
            .fold(0i64, |sum, x| sum.wrapping_add(x)))
    }
}
