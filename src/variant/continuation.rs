//! # continuation
//!
//! the Fibonacci routine driven through the generator engine, one resume
//! per value
//!

use super::Variant;
use crate::fib::FibRoutine;
use crate::gen_impl::{Generator, Gn};
use crate::generator::Routine;
use crate::rt::Result;

/// generator engine variant
#[derive(Debug)]
pub struct Continuation<R: Routine<Item = i64> = FibRoutine> {
    gen: Generator<R>,
}

impl Continuation {
    /// create a variant around a fresh Fibonacci routine
    pub fn new() -> Self {
        Self::with_routine(FibRoutine::new())
    }
}

impl Default for Continuation {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Routine<Item = i64>> Continuation<R> {
    /// create a variant around any `i64` routine
    pub fn with_routine(routine: R) -> Self {
        Continuation {
            gen: Gn::new(routine),
        }
    }

    /// the underlying generator
    pub fn generator(&self) -> &Generator<R> {
        &self.gen
    }
}

impl<R: Routine<Item = i64>> Variant for Continuation<R> {
    const NAME: &'static str = "continuation";
    const BASE_ITERATIONS: u64 = 100_000_000;

    #[inline]
    fn next_value(&mut self) -> Result<i64> {
        self.gen.resume()
    }
}
