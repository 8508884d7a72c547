//! Buffered channel example
//!
//! A producer fills a capacity-3 channel and closes it; the consumer
//! performs a single read. After both tasks finish, the coordinator
//! drains the leftover buffered messages, showing that a closed
//! channel yields its buffer until empty.
//!
//! # Environment Variables
//!
//! - `GCH_LOG_LEVEL=debug` - Show lifecycle logging on stderr
//! - `GCH_FLUSH_EPRINT=1` - Flush debug output immediately

use gochan::{channel, go, kdebug, kerror, kwarn, Receiver, Sender, WaitGroup};

fn produce(tx: Sender<String>) {
    println!("[S] Sending...");
    for msg in ["Hello", "World", "Bye"] {
        if let Err(e) = tx.send(msg.to_string()) {
            kerror!("send failed: {}", e);
            return;
        }
    }
    println!("[S] Done");
    tx.close();
}

fn consume_one(rx: Receiver<String>) {
    match rx.recv() {
        Ok(msg) => println!("[R] {}", msg),
        Err(_) => kwarn!("channel closed before the first read"),
    }
}

fn main() {
    let wg = WaitGroup::new();
    let (tx, rx) = channel::<String>(3);
    let leftovers = rx.clone();

    let done = wg.guard();
    go(move || {
        let _done = done;
        consume_one(rx);
    });

    let done = wg.guard();
    go(move || {
        let _done = done;
        produce(tx);
    });

    wg.wait();

    // Buffered messages survive closure; drain what the single-read
    // consumer left behind.
    for msg in leftovers.iter() {
        println!("[Z] {}", msg);
    }
    kdebug!("channel {}", leftovers.state());
}
