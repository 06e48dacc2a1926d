//! Typed endpoints into an ongoing session, in direct style. Every operation
//! consumes the endpoint and returns the continuation, so each protocol step
//! can happen at most once and in the agreed order.
//!
//! An endpoint [`Endpoint<S, R>`] pairs one single-use channel with two
//! protocol shapes: `S`, what this party sends next, and `R`, what it
//! receives next. Shapes are built from three forms:
//!
//! - [`Empty`] -- nothing more happens on this side;
//! - `(T, Endpoint<S2, R2>)` -- a value of type `T` is exchanged, after which
//!   the *receiving* party continues as `Endpoint<S2, R2>`;
//! - [`Or<A, B>`] -- the protocol forks into endpoint type `A` or `B`; the
//!   embedded endpoints are the continuations of the party *offering* the
//!   choice.
//!
//! The counterpart of an `Endpoint<S, R>` is an `Endpoint<R, S>`: duality is
//! a parameter swap, recursively established by the embedded shapes. The two
//! handles of a session come exclusively from [`pair`] (or from `create` in
//! [`runtimes`](super::runtimes)), which mints them dual by construction.
//!
//! # Blocking and `.await`
//!
//! Sending is buffered and never blocks, so [`send`](Endpoint::send),
//! [`left`](Endpoint::left) and [`right`](Endpoint::right) are plain
//! functions and several of them may run before the counterpart catches up.
//! Only [`recv`](Endpoint::recv) and [`branch`](Endpoint::branch) suspend,
//! until the counterpart's matching step arrives.
//!
//! ```
//! use seance::{pair, Dual, Empty, Endpoint};
//!
//! type Greeting = Endpoint<(String, Endpoint<Empty, Empty>), Empty>;
//!
//! let (tell, hear): (Greeting, Dual<Greeting>) = pair();
//! let done = tell.send("hello".to_string());
//! futures::executor::block_on(async move {
//!     let (word, heard) = hear.recv().await;
//!     assert_eq!(word, "hello");
//!     heard.close();
//!     done.close();
//! });
//! ```
//!
//! # Linearity at run time
//!
//! Because operations take `self`, reusing an endpoint does not compile. The
//! single-use guard underneath still watches each step at run time: if a
//! channel is driven twice anyway, or after the session was closed, the
//! transport is torn down and the offending call panics. Such a panic is a
//! broken protocol contract, not a recoverable error.

use std::{any::type_name, marker::PhantomData};

use crate::{chan::Channel, Session};

/// The protocol shapes: [`Empty`], [`Or`], and the payload step
/// `(T, Endpoint<S, R>)`.
pub trait Shape: Send + 'static {}

/// No further action on this side. A session whose endpoint reaches
/// `Endpoint<Empty, Empty>` can only be closed.
pub struct Empty;

impl Shape for Empty {}

/// A fork in the protocol: continue as endpoint type `A` (left) or `B`
/// (right). One boolean flag is exchanged to settle the branch, `true` for
/// left.
pub struct Or<A, B> {
    _branches: PhantomData<fn() -> (A, B)>,
}

impl<A: Session, B: Session> Shape for Or<A, B> {}

impl<T: Send + 'static, S: Shape, R: Shape> Shape for (T, Endpoint<S, R>) {}

/// One party's view of an ongoing session: sends shaped by `S`, receives
/// shaped by `R`.
#[must_use]
pub struct Endpoint<S: Shape, R: Shape> {
    chan: Channel,
    _protocol: PhantomData<fn() -> (S, R)>,
}

impl<S: Shape, R: Shape> Session for Endpoint<S, R> {
    type Dual = Endpoint<R, S>;
}

/// The two dual endpoints of a fresh session, sharing one transport.
///
/// This is the runtime-agnostic way to start a session: hand one endpoint to
/// anything that will drive it concurrently and keep the other. The
/// [`runtimes`](super::runtimes) module wraps this with task spawning.
#[must_use]
pub fn pair<S: Shape, R: Shape>() -> (Endpoint<S, R>, Endpoint<R, S>) {
    let (left, right) = Channel::pair();
    (Endpoint::over(left), Endpoint::over(right))
}

impl<S: Shape, R: Shape> Endpoint<S, R> {
    fn over(chan: Channel) -> Self {
        Endpoint {
            chan,
            _protocol: PhantomData,
        }
    }

    /// The next step over the same transport, with the guard reset.
    fn advance<S2: Shape, R2: Shape>(self) -> Endpoint<S2, R2> {
        Endpoint::over(self.chan.derive())
    }
}

impl<T, S, R> Endpoint<(T, Endpoint<S, R>), Empty>
where
    T: Send + 'static,
    S: Shape,
    R: Shape,
{
    /// Sends `payload` to the counterpart and advances past this step.
    pub fn send(self, payload: T) -> Endpoint<R, S> {
        self.chan.send(Box::new(payload));
        self.advance()
    }
}

impl<T, S, R> Endpoint<Empty, (T, Endpoint<S, R>)>
where
    T: Send + 'static,
    S: Shape,
    R: Shape,
{
    /// Waits for the counterpart's value, returning it with the continuation.
    #[must_use]
    pub async fn recv(self) -> (T, Endpoint<S, R>) {
        let item = self.chan.recv().await;
        match item.downcast::<T>() {
            Ok(payload) => (*payload, self.advance()),
            Err(_) => {
                self.chan.close();
                panic!("cannot recv: expected a {}", type_name::<T>());
            }
        }
    }
}

impl<SL, RL, SR, RR> Endpoint<Or<Endpoint<SL, RL>, Endpoint<SR, RR>>, Empty>
where
    SL: Shape,
    RL: Shape,
    SR: Shape,
    RR: Shape,
{
    /// Settles the choice on the left branch and continues there.
    pub fn left(self) -> Endpoint<RL, SL> {
        self.chan.send(Box::new(true));
        self.advance()
    }

    /// Settles the choice on the right branch and continues there.
    pub fn right(self) -> Endpoint<RR, SR> {
        self.chan.send(Box::new(false));
        self.advance()
    }
}

impl<SL, RL, SR, RR> Endpoint<Empty, Or<Endpoint<SL, RL>, Endpoint<SR, RR>>>
where
    SL: Shape,
    RL: Shape,
    SR: Shape,
    RR: Shape,
{
    /// Waits for the counterpart to settle the choice, then surfaces the
    /// branch taken.
    #[must_use]
    pub async fn branch(self) -> Branch<Endpoint<SL, RL>, Endpoint<SR, RR>> {
        let item = self.chan.recv().await;
        match item.downcast::<bool>() {
            Ok(flag) if *flag => Branch::Left(self.advance()),
            Ok(_) => Branch::Right(self.advance()),
            Err(_) => {
                self.chan.close();
                panic!("cannot branch: expected a choice flag");
            }
        }
    }
}

impl Endpoint<Empty, Empty> {
    /// Ends the session, waking any receive still pending on the transport.
    /// The last thing either party does once both shapes are [`Empty`].
    pub fn close(self) {
        self.chan.close()
    }
}

/// The branch taken by the counterpart, from
/// [`Endpoint::branch`](Endpoint::branch).
#[must_use]
pub enum Branch<L, R> {
    Left(L),
    Right(R),
}
