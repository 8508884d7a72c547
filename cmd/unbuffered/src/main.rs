//! Unbuffered channel example
//!
//! A producer and a consumer exchange messages over a rendezvous
//! channel. The consumer drains until it observes closure; the
//! coordinator waits on both through a WaitGroup.
//!
//! # Environment Variables
//!
//! - `GCH_LOG_LEVEL=debug` - Show lifecycle logging on stderr
//! - `GCH_FLUSH_EPRINT=1` - Flush debug output immediately

use gochan::{channel, go, kdebug, kerror, Receiver, Sender, WaitGroup};

fn produce(tx: Sender<String>) {
    println!("[S] Sending...");
    for i in 0..5 {
        if let Err(e) = tx.send(format!("Hello {}", i)) {
            kerror!("send failed: {}", e);
            return;
        }
    }
    println!("[S] Done");
    tx.close();
}

fn consume(rx: Receiver<String>) {
    loop {
        match rx.recv() {
            Ok(msg) => println!("[R] {}", msg),
            Err(_) => {
                println!("* channel closed");
                break;
            }
        }
    }
}

fn main() {
    let wg = WaitGroup::new();
    let (tx, rx) = channel::<String>(0);

    let done = wg.guard();
    go(move || {
        let _done = done;
        consume(rx);
    });

    let done = wg.guard();
    go(move || {
        let _done = done;
        produce(tx);
    });

    wg.wait();
    kdebug!("both tasks completed");
}
