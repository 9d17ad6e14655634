//! # flow
//!
//! an async producer task pushing into a channel with a single slot
//!
//! The consumer blocks on the channel through a local executor. Each time it
//! waits the executor polls the producer, which fills the slot and parks on
//! the next send until the consumer drains it. Both sides run on the calling
//! thread and take strict turns.
//!

use std::fmt;

use futures::channel::mpsc;
use futures::executor::LocalPool;
use futures::future;
use futures::task::LocalSpawnExt;
use futures::{SinkExt, StreamExt};

use super::{take_count, Variant};
use crate::rt::{Error, Result};

// the producer task, ends once the consumer side is dropped
async fn produce(mut tx: mpsc::Sender<i64>) {
    let (mut x, mut y) = (0i64, 1i64);
    loop {
        if tx.send(x).await.is_err() {
            break;
        }
        let z = x.wrapping_add(y);
        x = y;
        y = z;
    }
}

/// async push stream variant
pub struct Flow {
    pool: LocalPool,
    rx: mpsc::Receiver<i64>,
}

impl Flow {
    /// schedule a producer task, it does not run until a value is pulled
    pub fn new() -> Result<Self> {
        let pool = LocalPool::new();
        // one slot per sender, no extra buffer
        let (tx, rx) = mpsc::channel(0);
        pool.spawner().spawn_local(produce(tx))?;
        Ok(Flow { pool, rx })
    }
}

impl fmt::Debug for Flow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Flow {{ ... }}")
    }
}

impl Variant for Flow {
    const NAME: &'static str = "flow";
    const BASE_ITERATIONS: u64 = 10_000_000;

    #[inline]
    fn next_value(&mut self) -> Result<i64> {
        self.pool.run_until(self.rx.next()).ok_or(Error::Done)
    }

    fn for_each_value<F: FnMut(i64)>(&mut self, n: u64, mut f: F) -> Result<()> {
        let values = (&mut self.rx).take(take_count(n)?);
        self.pool.run_until(values.for_each(|x| {
            f(x);
            future::ready(())
        }));
        Ok(())
    }

    fn sum(&mut self, n: u64) -> Result<i64> {
        let values = (&mut self.rx).take(take_count(n)?);
        Ok(self
            .pool
            .run_until(values.fold(0i64, |sum, x| future::ready(sum.wrapping_add(x)))))
    }
}
