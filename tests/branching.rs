use std::cell::Cell;

use seance::runtimes::tokio::create;
use seance::{session, Branch, Dual, Empty, Endpoint, Or};

type Finish = Endpoint<Empty, Empty>;

// the machine checks the pin and settles which way the session continues
type Granted = Endpoint<Empty, (String, Finish)>;
type Denied = Endpoint<Empty, (String, Finish)>;
type PinClient = Endpoint<(u32, Endpoint<Or<Granted, Denied>, Empty>), Empty>;
type PinServer = Dual<PinClient>;

fn boot_server() -> PinClient {
    create(|server: PinServer| async move {
        let (pin, server) = server.recv().await;
        if pin == 1234 {
            server.left().send("VALID PIN".to_string()).close();
        } else {
            server.right().send("INVALID PIN".to_string()).close();
        }
    })
}

#[tokio::test]
async fn valid_pin_takes_the_granted_branch() {
    let client = boot_server().send(1234);
    match client.branch().await {
        Branch::Left(client) => {
            let (message, client) = client.recv().await;
            client.close();
            assert_eq!(message, "VALID PIN");
        }
        Branch::Right(_) => panic!("a valid pin must not be denied"),
    }
}

#[tokio::test]
async fn invalid_pin_takes_the_denied_branch() {
    let client = boot_server().send(9999);
    match client.branch().await {
        Branch::Left(_) => panic!("an invalid pin must not be granted"),
        Branch::Right(client) => {
            let (message, client) = client.recv().await;
            client.close();
            assert_eq!(message, "INVALID PIN");
        }
    }
}

#[tokio::test]
async fn offer_runs_exactly_one_closure() {
    let granted = Cell::new(false);
    let denied = Cell::new(false);
    let granted_flag = &granted;
    let denied_flag = &denied;

    session::offer(
        boot_server().send(1234),
        |client| async move {
            granted_flag.set(true);
            let (message, client) = client.recv().await;
            client.close();
            assert_eq!(message, "VALID PIN");
        },
        |client| async move {
            denied_flag.set(true);
            let (_message, client) = client.recv().await;
            client.close();
        },
    )
    .await;

    assert!(granted.get());
    assert!(!denied.get());

    session::offer(
        boot_server().send(9999),
        |client| async move {
            granted_flag.set(false);
            let (_message, client) = client.recv().await;
            client.close();
        },
        |client| async move {
            denied_flag.set(true);
            let (message, client) = client.recv().await;
            client.close();
            assert_eq!(message, "INVALID PIN");
        },
    )
    .await;

    assert!(granted.get(), "the denied branch must leave the granted run untouched");
    assert!(denied.get());
}
