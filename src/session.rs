//! The session combinators in continuation-passing style. Each function
//! performs one protocol step on the given endpoint, then hands the
//! continuation endpoint to a closure, so an implementation of a protocol
//! nests the way the protocol's type reads.
//!
//! These are thin drivers over the direct-style operations on
//! [`Endpoint`](crate::Endpoint); pick whichever style fits the caller. The
//! two compose freely -- a party may be written in one style and its
//! counterpart in the other, or switch styles mid-protocol.
//!
//! ```
//! use seance::{pair, session, Dual, Empty, Endpoint};
//!
//! type Finish = Endpoint<Empty, Empty>;
//! type Asker = Endpoint<(i64, Endpoint<(i64, Finish), Empty>), Empty>;
//!
//! futures::executor::block_on(async {
//!     let (ask, reply): (Asker, Dual<Asker>) = pair();
//!     futures::join!(
//!         session::send(21, ask, |ask| async move {
//!             session::recv(ask, |doubled, ask| async move {
//!                 session::close(ask);
//!                 assert_eq!(doubled, 42);
//!             })
//!             .await;
//!         }),
//!         session::recv(reply, |n, reply| async move {
//!             session::send(n * 2, reply, |reply| async move {
//!                 session::close(reply);
//!             })
//!             .await;
//!         }),
//!     );
//! });
//! ```

use futures::Future;

use crate::endpoint::{Branch, Empty, Endpoint, Or, Shape};

/// Sends `payload` on the endpoint, then runs `continuation` with the
/// advanced endpoint.
pub async fn send<T, S, R, F, Fut>(
    payload: T,
    endpoint: Endpoint<(T, Endpoint<S, R>), Empty>,
    continuation: F,
) where
    T: Send + 'static,
    S: Shape,
    R: Shape,
    F: FnOnce(Endpoint<R, S>) -> Fut,
    Fut: Future<Output = ()>,
{
    continuation(endpoint.send(payload)).await
}

/// Waits for a value on the endpoint, then runs `continuation` with it and
/// the advanced endpoint.
pub async fn recv<T, S, R, F, Fut>(endpoint: Endpoint<Empty, (T, Endpoint<S, R>)>, continuation: F)
where
    T: Send + 'static,
    S: Shape,
    R: Shape,
    F: FnOnce(T, Endpoint<S, R>) -> Fut,
    Fut: Future<Output = ()>,
{
    let (payload, next) = endpoint.recv().await;
    continuation(payload, next).await
}

/// Lets the counterpart settle the choice, then runs exactly one of the two
/// closures with the endpoint of the branch taken.
pub async fn offer<SL, RL, SR, RR, FL, FutL, FR, FutR>(
    endpoint: Endpoint<Empty, Or<Endpoint<SL, RL>, Endpoint<SR, RR>>>,
    on_left: FL,
    on_right: FR,
) where
    SL: Shape,
    RL: Shape,
    SR: Shape,
    RR: Shape,
    FL: FnOnce(Endpoint<SL, RL>) -> FutL,
    FutL: Future<Output = ()>,
    FR: FnOnce(Endpoint<SR, RR>) -> FutR,
    FutR: Future<Output = ()>,
{
    match endpoint.branch().await {
        Branch::Left(next) => on_left(next).await,
        Branch::Right(next) => on_right(next).await,
    }
}

/// Settles the choice on the left branch, then runs `continuation` there.
pub async fn left<SL, RL, SR, RR, F, Fut>(
    endpoint: Endpoint<Or<Endpoint<SL, RL>, Endpoint<SR, RR>>, Empty>,
    continuation: F,
) where
    SL: Shape,
    RL: Shape,
    SR: Shape,
    RR: Shape,
    F: FnOnce(Endpoint<RL, SL>) -> Fut,
    Fut: Future<Output = ()>,
{
    continuation(endpoint.left()).await
}

/// Settles the choice on the right branch, then runs `continuation` there.
pub async fn right<SL, RL, SR, RR, F, Fut>(
    endpoint: Endpoint<Or<Endpoint<SL, RL>, Endpoint<SR, RR>>, Empty>,
    continuation: F,
) where
    SL: Shape,
    RL: Shape,
    SR: Shape,
    RR: Shape,
    F: FnOnce(Endpoint<RR, SR>) -> Fut,
    Fut: Future<Output = ()>,
{
    continuation(endpoint.right()).await
}

/// Ends a fully consumed session.
pub fn close(endpoint: Endpoint<Empty, Empty>) {
    endpoint.close()
}
