//! The single-use step over a session's transport.
//!
//! A [`Channel`] guards exactly one communication step: the first `send` or
//! `recv` on it consumes it, and any further operation on the same object is
//! a broken linearity contract. Multi-step protocols continue by deriving a
//! fresh channel over the same transport with the guard reset.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::transport::{Item, Side, Transport};

pub(crate) struct Channel {
    transport: Arc<Transport>,
    side: Side,
    used: AtomicBool,
}

impl Channel {
    /// The two initial channels of a session, over a fresh transport.
    pub fn pair() -> (Channel, Channel) {
        let transport = Arc::new(Transport::new());
        (
            Channel {
                transport: Arc::clone(&transport),
                side: Side::Left,
                used: AtomicBool::new(false),
            },
            Channel {
                transport,
                side: Side::Right,
                used: AtomicBool::new(false),
            },
        )
    }

    /// A fresh channel for the next step: same transport, same side, guard
    /// reset.
    pub fn derive(&self) -> Channel {
        Channel {
            transport: Arc::clone(&self.transport),
            side: self.side,
            used: AtomicBool::new(false),
        }
    }

    pub fn send(&self, item: Item) {
        self.consume("send");
        if self.transport.push(self.side, item).is_err() {
            panic!("cannot send: session already closed");
        }
    }

    pub async fn recv(&self) -> Item {
        self.consume("recv");
        match self.transport.next(self.side).await {
            Some(item) => item,
            None => panic!("cannot recv: session closed before the protocol finished"),
        }
    }

    pub fn close(&self) {
        self.transport.close();
    }

    /// Flips the one-shot guard. A second flip means the step ran twice; the
    /// transport is torn down first so the counterpart fails fast instead of
    /// waiting forever.
    fn consume(&self, op: &str) {
        if self.used.swap(true, Ordering::SeqCst) {
            self.close();
            panic!("cannot {op}: channel already used for this step");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    #[should_panic(expected = "already used")]
    fn second_send_panics() {
        let (a, _b) = Channel::pair();
        a.send(Box::new(1i32));
        a.send(Box::new(2i32));
    }

    #[test]
    #[should_panic(expected = "already used")]
    fn recv_after_send_on_same_channel_panics() {
        let (a, _b) = Channel::pair();
        a.send(Box::new(1i32));
        block_on(a.recv());
    }

    #[test]
    #[should_panic(expected = "already used")]
    fn send_after_recv_on_same_channel_panics() {
        let (a, b) = Channel::pair();
        b.send(Box::new(1i32));
        block_on(a.recv());
        a.send(Box::new(2i32));
    }

    #[test]
    #[should_panic(expected = "already used")]
    fn second_recv_panics() {
        let (a, b) = Channel::pair();
        b.send(Box::new(1i32));
        b.derive().send(Box::new(2i32));
        block_on(async {
            a.recv().await;
            a.recv().await;
        });
    }

    #[test]
    fn derived_channels_reset_the_guard_and_keep_order() {
        let (a, b) = Channel::pair();

        let mut sender = a;
        for n in 0..4i32 {
            sender.send(Box::new(n));
            sender = sender.derive();
        }

        block_on(async {
            let mut receiver = b;
            for n in 0..4i32 {
                let item = receiver.recv().await;
                assert_eq!(*item.downcast::<i32>().unwrap(), n);
                receiver = receiver.derive();
            }
        });
    }

    #[test]
    #[should_panic(expected = "already closed")]
    fn send_after_close_panics() {
        let (a, _b) = Channel::pair();
        a.close();
        a.derive().send(Box::new(1i32));
    }

    #[test]
    #[should_panic(expected = "before the protocol finished")]
    fn recv_after_close_panics() {
        let (a, b) = Channel::pair();
        a.close();
        block_on(b.recv());
    }

    #[test]
    fn violation_tears_the_transport_down() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let (a, b) = Channel::pair();
        a.send(Box::new(1i32));
        let outcome = catch_unwind(AssertUnwindSafe(|| a.send(Box::new(2i32))));
        assert!(outcome.is_err());

        // the counterpart still drains the first message, then sees the end
        block_on(async {
            let item = b.recv().await;
            assert_eq!(*item.downcast::<i32>().unwrap(), 1);
            assert!(b.transport.next(Side::Right).await.is_none());
        });
    }
}
