//! # generator
//!
//! routine trait
//!
//! A routine is a producer written as an explicit state machine. Each call to
//! [`Routine::step`] continues from the program point saved by the previous
//! call and runs until the next yield point or until the routine finishes.
//!

/// the outcome of running a routine up to its next suspension point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<T> {
    /// the routine suspended and handed out a value
    Yield(T),
    /// the routine ran to completion
    Complete,
}

/// routine trait
pub trait Routine {
    /// the type handed to the consumer at each yield point
    type Item;

    /// resume from the saved program point and run to the next yield point
    ///
    /// must not be called again after it returned [`Step::Complete`]
    fn step(&mut self) -> Step<Self::Item>;
}

impl<R: Routine + ?Sized> Routine for Box<R> {
    type Item = R::Item;

    #[inline]
    fn step(&mut self) -> Step<R::Item> {
        (**self).step()
    }
}
