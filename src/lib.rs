//! Binary session types for two concurrent parties, with the linearity
//! contract watched at run time. A protocol -- the sequence of typed messages
//! and binary choices two parties agreed on in advance -- is spelled in an
//! endpoint's type, and every communication step happens exactly once, in the
//! agreed order, or fails loudly.
//!
//! The host type system here describes the *shape* of the protocol: what is
//! exchanged, in which order, and where it forks. Consuming operations take
//! care of most of linearity (a used endpoint is moved away and cannot be
//! touched again), and a one-shot guard underneath catches whatever the type
//! system cannot see, such as driving a session after it was closed.
//!
//! # Endpoints and duality
//!
//! Communication involves two opposite points of view: one party's send is
//! the other party's receive. An [`Endpoint<S, R>`] is a handle to one of the
//! two viewpoints -- `S` describes what this party sends next, `R` what it
//! receives next. The other viewpoint is the same pair, swapped: the dual of
//! `Endpoint<S, R>` is `Endpoint<R, S>`. The [`Session`] trait captures this,
//! and [`Dual<S>`] is a convenient alias for it, so a protocol is usually
//! declared once and its counterpart derived:
//!
//! ```
//! use seance::{Dual, Empty, Endpoint};
//!
//! type Finish = Endpoint<Empty, Empty>;
//! type Client = Endpoint<(i64, Endpoint<(bool, Finish), Empty>), Empty>;
//! type Server = Dual<Client>; // Endpoint<Empty, (i64, Endpoint<(bool, Finish), Empty>)>
//! ```
//!
//! Here the client sends a number, the server answers whether it is even, and
//! both sides finish. A payload step `(T, Endpoint<S2, R2>)` embeds the
//! continuation of the *receiving* party; [`Empty`] marks a side with nothing
//! more to do.
//!
//! Both endpoints of a session are created together, over one shared
//! transport, so that they are dual by construction: with [`pair`] for the
//! bare handles, or through [`runtimes`] to put the counterpart on its own
//! concurrent task right away.
//!
//! # Driving a protocol
//!
//! Operations consume the endpoint and return the continuation, so steps
//! chain. Sending is buffered and never blocks; receiving suspends until the
//! counterpart's value arrives.
//!
//! ```
//! use seance::{runtimes::tokio::create, Dual, Empty, Endpoint};
//! # type Finish = Endpoint<Empty, Empty>;
//! # type Client = Endpoint<(i64, Endpoint<(bool, Finish), Empty>), Empty>;
//! # type Server = Dual<Client>;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let client: Client = create(|server: Server| async move {
//!     let (number, server) = server.recv().await;
//!     server.send(number % 2 == 0).close();
//! });
//!
//! let (even, client) = client.send(42).recv().await;
//! client.close();
//! assert!(even);
//! # });
//! ```
//!
//! The same protocol can be driven through the closure combinators in
//! [`session`], which mirror the nesting of the protocol type instead of
//! flattening it; see that module for the continuation-passing style.
//!
//! # Branching
//!
//! [`Or<A, B>`] marks a fork in the protocol. The party holding it on the
//! send side settles the choice with [`left`](Endpoint::left) or
//! [`right`](Endpoint::right); the party holding it on the receive side reacts
//! with [`branch`](Endpoint::branch) (or [`session::offer`]) and continues as
//! whichever endpoint the counterpart picked. The embedded endpoint types are
//! the continuations of the reacting party.
//!
//! ```
//! use seance::{runtimes::tokio::create, Branch, Dual, Empty, Endpoint, Or};
//!
//! type Finish = Endpoint<Empty, Empty>;
//! type Granted = Endpoint<Empty, (String, Finish)>;
//! type Denied = Endpoint<Empty, (String, Finish)>;
//! type Client = Endpoint<(u32, Endpoint<Or<Granted, Denied>, Empty>), Empty>;
//! type Server = Dual<Client>;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let client: Client = create(|server: Server| async move {
//!     let (pin, server) = server.recv().await;
//!     if pin == 1234 {
//!         server.left().send("welcome".to_string()).close();
//!     } else {
//!         server.right().send("try again".to_string()).close();
//!     }
//! });
//!
//! match client.send(1234).branch().await {
//!     Branch::Left(client) => {
//!         let (message, client) = client.recv().await;
//!         client.close();
//!         assert_eq!(message, "welcome");
//!     }
//!     Branch::Right(_) => unreachable!("the pin was right"),
//! }
//! # });
//! ```
//!
//! Domain-level failures are modelled exactly like this -- as a branch of the
//! protocol -- never as a panic thrown across the session.
//!
//! # Linearity violations
//!
//! Reusing an endpoint does not compile. What remains reachable at run time
//! -- driving a session after [`close`](Endpoint::close), or a receive cut
//! short because the counterpart tore the session down -- closes the
//! transport and panics. Such a panic is a bug in the protocol code, not an
//! error to recover from; closing the transport first makes the counterpart
//! fail fast too instead of waiting forever.

pub mod endpoint;
pub mod runtimes;
pub mod session;

mod chan;
mod transport;

pub use endpoint::{pair, Branch, Empty, Endpoint, Or, Shape};

/// A handle to one of the two viewpoints of a session, tied to the opposite
/// viewpoint through [`Dual`](Session::Dual).
pub trait Session: Send + 'static {
    type Dual: Session<Dual = Self>;
}

pub type Dual<S> = <S as Session>::Dual;
