//! # benchmark driver
//!
//! pulls a fixed number of values out of a variant, either handing each one
//! to an opaque sink or summing them and checking the sum with the oracle
//!
//! Two loop shapes are provided: the plain `drain_*` functions consume
//! `0..n` through the variant's bulk methods, the `*_countdown` ones pull one
//! value at a time in a `while i > 0` loop.
//!

use std::hint::black_box;

use crate::oracle;
use crate::rt::Result;
use crate::variant::{Baseline, Continuation, Flow, Sequence, Variant, VariantKind};

/// pull `n` values and discard them
pub fn drain_discard<V: Variant>(variant: &mut V, n: u64) -> Result<()> {
    debug!("{}: discard {n}", V::NAME);
    if n == 0 {
        return Ok(());
    }
    variant.for_each_value(n, |x| {
        black_box(x);
    })
}

/// pull `n` values and return their wrapping sum, checked against the oracle
pub fn drain_sum<V: Variant>(variant: &mut V, n: u64) -> Result<i64> {
    debug!("{}: sum {n}", V::NAME);
    if n == 0 {
        return Ok(0);
    }
    let sum = variant.sum(n)?;
    oracle::verify(n, sum)?;
    debug!("{}: sum {n} = {sum}", V::NAME);
    Ok(sum)
}

/// [`drain_discard`] with a count down loop around single pulls
pub fn drain_discard_countdown<V: Variant>(variant: &mut V, n: u64) -> Result<()> {
    debug!("{}: discard {n} (countdown)", V::NAME);
    let mut i = n;
    while i > 0 {
        black_box(variant.next_value()?);
        i -= 1;
    }
    Ok(())
}

/// [`drain_sum`] with a count down loop around single pulls
pub fn drain_sum_countdown<V: Variant>(variant: &mut V, n: u64) -> Result<i64> {
    debug!("{}: sum {n} (countdown)", V::NAME);
    let mut sum = 0i64;
    let mut i = n;
    while i > 0 {
        sum = sum.wrapping_add(variant.next_value()?);
        i -= 1;
    }
    oracle::verify(n, sum)?;
    Ok(sum)
}

/// [`drain_sum`] on a fresh variant of the given kind
pub fn run_sum(kind: VariantKind, n: u64) -> Result<i64> {
    match kind {
        VariantKind::Baseline => drain_sum(&mut Baseline::new(), n),
        VariantKind::Continuation => drain_sum(&mut Continuation::new(), n),
        VariantKind::Sequence => drain_sum(&mut Sequence::new(), n),
        VariantKind::Flow => drain_sum(&mut Flow::new()?, n),
    }
}

/// [`drain_discard`] on a fresh variant of the given kind
pub fn run_discard(kind: VariantKind, n: u64) -> Result<()> {
    match kind {
        VariantKind::Baseline => drain_discard(&mut Baseline::new(), n),
        VariantKind::Continuation => drain_discard(&mut Continuation::new(), n),
        VariantKind::Sequence => drain_discard(&mut Sequence::new(), n),
        VariantKind::Flow => drain_discard(&mut Flow::new()?, n),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rt::Error;

    // yields the wrong value once, at index `at`
    struct Faulty {
        inner: Baseline,
        at: u64,
        pulled: u64,
    }

    impl Variant for Faulty {
        const NAME: &'static str = "faulty";
        const BASE_ITERATIONS: u64 = 10;

        fn next_value(&mut self) -> Result<i64> {
            let v = self.inner.next_value()?;
            self.pulled += 1;
            Ok(if self.pulled == self.at + 1 { v + 1 } else { v })
        }
    }

    #[test]
    fn test_faulty_variant_is_caught() {
        let mut v = Faulty {
            inner: Baseline::new(),
            at: 4,
            pulled: 0,
        };
        assert_eq!(
            drain_sum(&mut v, 10),
            Err(Error::ChecksumMismatch {
                n: 10,
                expected: 88,
                actual: 89
            })
        );
    }

    #[test]
    fn test_countdown_matches_bulk() {
        for kind in VariantKind::ALL {
            let bulk = run_sum(kind, 1000).unwrap();
            let countdown = match kind {
                VariantKind::Baseline => drain_sum_countdown(&mut Baseline::new(), 1000),
                VariantKind::Continuation => drain_sum_countdown(&mut Continuation::new(), 1000),
                VariantKind::Sequence => drain_sum_countdown(&mut Sequence::new(), 1000),
                VariantKind::Flow => drain_sum_countdown(&mut Flow::new().unwrap(), 1000),
            };
            assert_eq!(countdown, Ok(bulk), "{kind}");
        }
    }

    #[test]
    fn test_discard_advances() {
        let mut v = Continuation::new();
        drain_discard(&mut v, 5).unwrap();
        drain_discard_countdown(&mut v, 5).unwrap();
        assert_eq!(v.next_value(), Ok(55));
    }
}
