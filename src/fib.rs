//! # fibonacci producer
//!
//! The producer is the loop
//!
//! ```text
//! x = 0; y = 1
//! loop { yield x; (x, y) = (y, x + y) }
//! ```
//!
//! unrolled into a state machine with one program point per place the loop
//! can be resumed from.
//!

use crate::gen_impl::{Generator, Gn};
use crate::generator::{Routine, Step};

// where the routine continues on the next step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Point {
    // before the locals are initialized
    Entry,
    // right after `yield x`
    AfterYield,
}

/// Fibonacci routine, yields 0, 1, 1, 2, 3, 5, ... forever
///
/// additions wrap on overflow
#[derive(Debug, Clone)]
pub struct FibRoutine {
    point: Point,
    x: i64,
    y: i64,
}

impl FibRoutine {
    /// create a routine positioned at its entry
    pub fn new() -> Self {
        FibRoutine {
            point: Point::Entry,
            x: 0,
            y: 0,
        }
    }

    /// the two most recent values, `(x, y)`
    pub fn locals(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}

impl Default for FibRoutine {
    fn default() -> Self {
        Self::new()
    }
}

impl Routine for FibRoutine {
    type Item = i64;

    #[inline]
    fn step(&mut self) -> Step<i64> {
        match self.point {
            Point::Entry => {
                self.x = 0;
                self.y = 1;
                self.point = Point::AfterYield;
            }
            Point::AfterYield => {
                let z = self.x.wrapping_add(self.y);
                self.x = self.y;
                self.y = z;
            }
        }
        Step::Yield(self.x)
    }
}

/// create a Fibonacci generator
pub fn fibonacci() -> Generator<FibRoutine> {
    Gn::new(FibRoutine::new())
}
