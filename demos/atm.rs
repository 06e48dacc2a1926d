use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use seance::runtimes::tokio::create;
use seance::{Branch, Dual, Empty, Endpoint, Or};

struct BankAccount {
    owner: String,
    balance: f64,
}

type Finish = Endpoint<Empty, Empty>;

// endings of a withdrawal, as the client awaiting the verdict sees them
type PaidOut = Endpoint<Empty, (f64, Finish)>;
type Refused = Endpoint<Empty, (String, Finish)>;

// machine side of each operation, entered once the client picks one
type TakeDeposit = Endpoint<Empty, (f64, Endpoint<(f64, Finish), Empty>)>;
type TakeWithdrawal = Endpoint<Empty, (f64, Endpoint<Or<PaidOut, Refused>, Empty>)>;

// once the pin checks out the client learns the balance, then picks an operation
type Menu = Endpoint<Empty, (f64, Endpoint<Or<TakeDeposit, TakeWithdrawal>, Empty>)>;
type Rejected = Endpoint<Empty, (String, Finish)>;

type Client = Endpoint<(u32, Endpoint<Or<Menu, Rejected>, Empty>), Empty>;
type Atm = Dual<Client>;

fn boot_atm(accounts: Arc<HashMap<u32, BankAccount>>) -> Client {
    create(|atm: Atm| async move {
        let (pin, atm) = atm.recv().await;
        let Some(account) = accounts.get(&pin) else {
            return atm.right().send("INVALID PIN".to_string()).close();
        };
        println!("atm: {} authenticated", account.owner);

        let atm = atm.left().send(account.balance);
        match atm.branch().await {
            Branch::Left(deposit) => {
                let (amount, deposit) = deposit.recv().await;
                deposit.send(account.balance + amount).close();
            }
            Branch::Right(withdraw) => {
                let (amount, withdraw) = withdraw.recv().await;
                if amount <= account.balance {
                    withdraw.left().send(account.balance - amount).close();
                } else {
                    withdraw
                        .right()
                        .send(format!("insufficient funds to withdraw {amount:.2}"))
                        .close();
                }
            }
        }
    })
}

async fn deposit(client: Client, pin: u32, amount: f64) {
    match client.send(pin).branch().await {
        Branch::Left(menu) => {
            let (balance, menu) = menu.recv().await;
            println!("client: balance is {balance:.2}");
            let (new_balance, done) = menu.left().send(amount).recv().await;
            done.close();
            println!("client: deposited {amount:.2}, balance is now {new_balance:.2}");
        }
        Branch::Right(rejected) => {
            let (reason, done) = rejected.recv().await;
            done.close();
            println!("client: {reason}");
        }
    }
}

async fn withdraw(client: Client, pin: u32, amount: f64) {
    match client.send(pin).branch().await {
        Branch::Left(menu) => {
            let (balance, menu) = menu.recv().await;
            println!("client: balance is {balance:.2}");
            match menu.right().send(amount).branch().await {
                Branch::Left(paid) => {
                    let (new_balance, done) = paid.recv().await;
                    done.close();
                    println!("client: withdrew {amount:.2}, balance is now {new_balance:.2}");
                }
                Branch::Right(refused) => {
                    let (reason, done) = refused.recv().await;
                    done.close();
                    println!("client: {reason}");
                }
            }
        }
        Branch::Right(rejected) => {
            let (reason, done) = rejected.recv().await;
            done.close();
            println!("client: {reason}");
        }
    }
}

#[tokio::main]
async fn main() {
    let accounts = Arc::new(HashMap::from([
        (
            1234,
            BankAccount {
                owner: "John Doe".to_string(),
                balance: 100.0,
            },
        ),
        (
            5678,
            BankAccount {
                owner: "Jane Smith".to_string(),
                balance: 200.0,
            },
        ),
    ]));

    deposit(boot_atm(Arc::clone(&accounts)), 1234, 50.0).await;
    withdraw(boot_atm(Arc::clone(&accounts)), 5678, 120.0).await;
    withdraw(boot_atm(Arc::clone(&accounts)), 5678, 950.0).await;
    deposit(boot_atm(Arc::clone(&accounts)), 9999, 10.0).await;

    tokio::time::sleep(Duration::from_millis(100)).await;
}
