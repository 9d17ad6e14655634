//! # generator
//!
//! closure based routine
//!

use std::fmt;

use crate::generator::{Routine, Step};

/// a routine driven by a closure
///
/// the closure owns the locals that live across yield points, so each call
/// picks up where the previous one left off
pub struct FnRoutine<F> {
    f: F,
}

impl<F> FnRoutine<F> {
    /// wrap a closure as a routine
    pub fn new(f: F) -> Self {
        FnRoutine { f }
    }
}

impl<T, F> Routine for FnRoutine<F>
where
    F: FnMut() -> Step<T>,
{
    type Item = T;

    #[inline]
    fn step(&mut self) -> Step<T> {
        (self.f)()
    }
}

impl<F> fmt::Debug for FnRoutine<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FnRoutine {{ ... }}")
    }
}
