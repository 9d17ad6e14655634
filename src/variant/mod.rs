//! # variants
//!
//! the four producer strategies behind one pull contract
//!
//! | variant        | producer                                   | base count |
//! |----------------|--------------------------------------------|------------|
//! | `baseline`     | plain loop, nothing suspends               | 10^9       |
//! | `continuation` | [`Generator`](crate::Generator) engine     | 10^8       |
//! | `sequence`     | std lazy iterator                          | 10^8       |
//! | `flow`         | async task pushing into a one slot channel | 10^7       |
//!

use std::fmt;
use std::str::FromStr;

use crate::rt::{Error, Result};

mod baseline;
mod continuation;
mod flow;
mod sequence;

pub use self::baseline::Baseline;
pub use self::continuation::Continuation;
pub use self::flow::Flow;
pub use self::sequence::Sequence;

/// a Fibonacci producer the benchmark driver can pull from
///
/// the bulk methods have loop based defaults on top of
/// [`next_value`](Variant::next_value), a variant overrides them when its
/// host facility has a native way to consume `n` items
pub trait Variant {
    /// display name
    const NAME: &'static str;
    /// iteration count for a multiplier of 1
    const BASE_ITERATIONS: u64;

    /// pull the next value
    fn next_value(&mut self) -> Result<i64>;

    /// pull `n` values and feed each to `f`
    fn for_each_value<F: FnMut(i64)>(&mut self, n: u64, mut f: F) -> Result<()> {
        for _ in 0..n {
            f(self.next_value()?);
        }
        Ok(())
    }

    /// pull `n` values and return their wrapping sum
    fn sum(&mut self, n: u64) -> Result<i64> {
        let mut sum = 0i64;
        for _ in 0..n {
            sum = sum.wrapping_add(self.next_value()?);
        }
        Ok(sum)
    }
}

// pull count for the `take(n)` adapters, refused when it does not fit in usize
pub(crate) fn take_count(n: u64) -> Result<usize> {
    usize::try_from(n)
        .map_err(|_| Error::InvalidArgument(format!("pull count {n} does not fit in usize")))
}

/// the variants known to the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    /// [`Baseline`]
    Baseline,
    /// [`Continuation`]
    Continuation,
    /// [`Sequence`]
    Sequence,
    /// [`Flow`]
    Flow,
}

impl VariantKind {
    /// every variant, in report order
    pub const ALL: [VariantKind; 4] = [
        VariantKind::Baseline,
        VariantKind::Continuation,
        VariantKind::Sequence,
        VariantKind::Flow,
    ];

    /// display name
    pub fn name(self) -> &'static str {
        match self {
            VariantKind::Baseline => Baseline::NAME,
            VariantKind::Continuation => <Continuation>::NAME,
            VariantKind::Sequence => Sequence::NAME,
            VariantKind::Flow => Flow::NAME,
        }
    }

    /// iteration count for a multiplier of 1
    pub fn base_iterations(self) -> u64 {
        match self {
            VariantKind::Baseline => Baseline::BASE_ITERATIONS,
            VariantKind::Continuation => <Continuation>::BASE_ITERATIONS,
            VariantKind::Sequence => Sequence::BASE_ITERATIONS,
            VariantKind::Flow => Flow::BASE_ITERATIONS,
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for VariantKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        VariantKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown variant `{s}`")))
    }
}
