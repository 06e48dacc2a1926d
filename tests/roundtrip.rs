use seance::runtimes::tokio::create;
use seance::{pair, session, Dual, Empty, Endpoint};

type Finish = Endpoint<Empty, Empty>;

// the client asks whether its number is even; the server answers and both finish
type IsEvenClient = Endpoint<(i64, Endpoint<(bool, Finish), Empty>), Empty>;
type IsEvenServer = Dual<IsEvenClient>;

#[tokio::test]
async fn round_trip_parity_check() {
    let client: IsEvenClient = create(|server: IsEvenServer| async move {
        let (number, server) = server.recv().await;
        server.send(number % 2 == 0).close();
    });

    let (verdict, client) = client.send(42).recv().await;
    client.close();
    assert!(verdict);
}

#[tokio::test]
async fn round_trip_with_continuations() {
    let client: IsEvenClient = create(|server: IsEvenServer| async move {
        session::recv(server, |number, server| async move {
            session::send(number % 2 == 0, server, |server| async move {
                session::close(server);
            })
            .await;
        })
        .await;
    });

    session::send(43, client, |client| async move {
        session::recv(client, |verdict, client| async move {
            session::close(client);
            assert!(!verdict);
        })
        .await;
    })
    .await;
}

type Consumer =
    Endpoint<Empty, (i64, Endpoint<Empty, (i64, Endpoint<Empty, (i64, Finish)>)>)>;
type Producer = Dual<Consumer>;

#[test]
fn fifo_delivery_across_steps() {
    let (producer, consumer): (Producer, Consumer) = pair();

    // sending is buffered, so the producer runs to completion on its own
    producer.send(1).send(2).send(3).close();

    futures::executor::block_on(async move {
        let (first, consumer) = consumer.recv().await;
        let (second, consumer) = consumer.recv().await;
        let (third, consumer) = consumer.recv().await;
        consumer.close();
        assert_eq!((first, second, third), (1, 2, 3));
    });
}

#[test]
fn runs_on_a_plain_futures_executor() {
    use futures::executor::LocalPool;
    use seance::runtimes::local_spawn::Create as _;

    let mut pool = LocalPool::new();
    let client: IsEvenClient = pool.spawner().create(|server: IsEvenServer| async move {
        let (number, server) = server.recv().await;
        server.send(number % 2 == 0).close();
    });

    pool.run_until(async move {
        let (verdict, client) = client.send(7).recv().await;
        client.close();
        assert!(!verdict);
    });
}
