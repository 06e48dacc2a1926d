use seance::runtimes::tokio::create;
use seance::{session, Dual, Empty, Endpoint};

type Finish = Endpoint<Empty, Empty>;
type Client = Endpoint<(i64, Endpoint<(bool, Finish), Empty>), Empty>;
type Server = Dual<Client>; // Endpoint<Empty, (i64, Endpoint<(bool, Finish), Empty>)>

#[tokio::main]
async fn main() {
    // the server side in continuation-passing style
    let client: Client = create(|server: Server| async move {
        session::recv(server, |number, server| async move {
            session::send(number % 2 == 0, server, |server| async move {
                session::close(server);
                println!("server: answered for {number}");
            })
            .await;
        })
        .await;
    });

    // the client side in direct style
    let (verdict, client) = client.send(42).recv().await;
    client.close();
    println!("client: 42 is even: {verdict}");
}
