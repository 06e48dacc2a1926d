use std::any::Any;

use futures::{channel::mpsc, lock::Mutex, StreamExt};

/// A type-erased message in flight between the two parties.
pub(crate) type Item = Box<dyn Any + Send>;

/// Which of the two parties a channel speaks for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The ordered stream shared by the two parties of one session: a directed
/// FIFO lane per direction, so a party can only ever pop messages its
/// counterpart pushed.
pub(crate) struct Transport {
    lanes: [Lane; 2],
}

struct Lane {
    tx: mpsc::UnboundedSender<Item>,
    rx: Mutex<mpsc::UnboundedReceiver<Item>>,
}

impl Lane {
    fn new() -> Self {
        let (tx, rx) = mpsc::unbounded();
        Lane {
            tx,
            rx: Mutex::new(rx),
        }
    }
}

pub(crate) struct Closed;

impl Transport {
    pub fn new() -> Self {
        Transport {
            lanes: [Lane::new(), Lane::new()],
        }
    }

    /// Queues a message from `from` to its counterpart. Buffered; never waits.
    pub fn push(&self, from: Side, item: Item) -> Result<(), Closed> {
        self.lanes[from.index()]
            .tx
            .unbounded_send(item)
            .map_err(|_| Closed)
    }

    /// Waits for the next message addressed to `to`. Yields `None` once the
    /// transport is closed and the lane has been drained.
    pub async fn next(&self, to: Side) -> Option<Item> {
        self.lanes[to.other().index()].rx.lock().await.next().await
    }

    /// Ends the stream in both directions, waking every pending
    /// [`next`](Self::next). Idempotent.
    pub fn close(&self) {
        for lane in &self.lanes {
            lane.tx.close_channel();
        }
    }
}
