//! # fibgen
//!
//! single threaded cooperative generators, and a benchmark comparing them
//! with other ways of producing the Fibonacci sequence
//!
//! A producer is written as a [`Routine`]: a state machine whose
//! [`step`](Routine::step) continues from the saved program point and stops
//! at the next yield. [`Gn::new`] wraps it into a [`Generator`] the consumer
//! pulls from with [`resume`](Generator::resume).
//!
//! ```
//! use fibgen::fib::fibonacci;
//!
//! let mut g = fibonacci();
//! assert_eq!(g.resume(), Ok(0));
//! assert_eq!(g.resume(), Ok(1));
//! assert_eq!(g.take(4).collect::<Vec<_>>(), [1, 2, 3, 5]);
//! ```
//!
//! The [`variant`] module puts four producers behind one pull contract, the
//! [`driver`] drains them and the [`oracle`] checks the sums.
//!

#![deny(missing_docs)]

#[macro_use]
extern crate log;

mod fn_gen;
mod gen_impl;
mod generator;
mod rt;

pub mod config;
pub mod driver;
pub mod fib;
pub mod oracle;
pub mod variant;

pub use crate::config::{BenchConfig, IterationBudget};
pub use crate::fn_gen::FnRoutine;
pub use crate::gen_impl::{Generator, GeneratorState, Gn, Handle};
pub use crate::generator::{Routine, Step};
pub use crate::rt::{Error, Result};
pub use crate::variant::{Variant, VariantKind};
