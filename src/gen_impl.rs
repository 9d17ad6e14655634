//! # generator
//!
//! Rust generator implementation
//!
//! The generator never switches stacks. All the state a routine needs across
//! a suspension lives inside the routine value, so resuming is a plain method
//! call on the caller's stack and the captured state has a fixed size no
//! matter how many values were produced.
//!

use std::fmt;

use crate::fn_gen::FnRoutine;
use crate::generator::{Routine, Step};
use crate::rt::{Error, Result};

/// the lifecycle of a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// created, the routine has not run yet
    NotStarted,
    /// parked at a yield point with a value waiting for the consumer
    Suspended,
    /// the routine finished, no more values
    Completed,
}

/// Generator helper
#[derive(Debug)]
pub struct Gn;

impl Gn {
    /// create a generator for the routine, nothing runs until it is resumed
    pub fn new<R: Routine>(routine: R) -> Generator<R> {
        Generator {
            routine,
            state: GeneratorState::NotStarted,
            ret: None,
        }
    }

    /// create a generator from a closure that returns a [`Step`] per call
    pub fn from_fn<T, F>(f: F) -> Generator<FnRoutine<F>>
    where
        F: FnMut() -> Step<T>,
    {
        Self::new(FnRoutine::new(f))
    }

    /// create a generator and run it to its first yield point
    pub fn start<R: Routine>(routine: R) -> Handle<R> {
        let mut g = Self::new(routine);
        g.start();
        Handle { inner: g }
    }
}

/// single threaded pull based generator
pub struct Generator<R: Routine> {
    // the producer, including its saved program point and locals
    routine: R,
    state: GeneratorState,
    // the value produced at the current suspension point
    ret: Option<R::Item>,
}

impl<R: Routine> Generator<R> {
    /// run the routine to its first yield point
    ///
    /// the yielded value is held back until the first [`resume`](Self::resume),
    /// calling this on a generator that already started does nothing
    pub fn start(&mut self) {
        if self.state == GeneratorState::NotStarted {
            trace!("generator started");
            self.advance();
        }
    }

    #[inline]
    fn advance(&mut self) {
        match self.routine.step() {
            Step::Yield(v) => {
                self.ret = Some(v);
                self.state = GeneratorState::Suspended;
            }
            Step::Complete => {
                self.ret = None;
                self.state = GeneratorState::Completed;
            }
        }
    }

    /// hand out the value at the current suspension point and run the
    /// routine on to its next one
    ///
    /// a generator that was never started is started first, resuming a
    /// completed generator returns [`Error::Done`]
    #[inline]
    pub fn resume(&mut self) -> Result<R::Item> {
        match self.state {
            GeneratorState::Suspended => {}
            GeneratorState::NotStarted => self.start(),
            GeneratorState::Completed => {
                #[cold]
                fn done() -> Error {
                    error!("resume called on a completed generator");
                    Error::Done
                }
                return Err(done());
            }
        }

        let v = self.ret.take().ok_or(Error::Done)?;
        self.advance();
        Ok(v)
    }

    /// current lifecycle state
    #[inline]
    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// is finished
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state == GeneratorState::Completed
    }

    /// convert into a handle that is replaced on every resume
    pub fn into_handle(mut self) -> Handle<R> {
        self.start();
        Handle { inner: self }
    }
}

impl<R: Routine> Iterator for Generator<R> {
    type Item = R::Item;

    // a completed generator ends the iteration instead of reporting an error
    #[inline]
    fn next(&mut self) -> Option<R::Item> {
        if self.is_done() {
            return None;
        }
        self.resume().ok()
    }
}

impl<R: Routine> fmt::Debug for Generator<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Generator<{}> {{ state: {:?} }}",
            std::any::type_name::<R>(),
            self.state
        )
    }
}

/// a generator parked at a suspension point
///
/// each handle is consumed by [`resume`](Handle::resume), which hands back
/// the next handle along with the value
#[derive(Debug)]
pub struct Handle<R: Routine> {
    inner: Generator<R>,
}

impl<R: Routine> Handle<R> {
    /// take the value at this suspension point and the handle for the next one
    #[inline]
    pub fn resume(mut self) -> Result<(R::Item, Handle<R>)> {
        let v = self.inner.resume()?;
        Ok((v, self))
    }

    /// is finished
    #[inline]
    pub fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    /// current lifecycle state, never [`GeneratorState::NotStarted`]
    #[inline]
    pub fn state(&self) -> GeneratorState {
        self.inner.state()
    }

    /// go back to the `&mut` driven generator
    pub fn into_generator(self) -> Generator<R> {
        self.inner
    }
}
