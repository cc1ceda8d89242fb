#![allow(non_snake_case)]

use std::sync::Arc;
use std::thread;
use SyncQueueMini::core::buildcore::WorkQueueSystem;
use SyncQueueMini::core::log::append_logs;

fn main() {
    let system = Arc::new(WorkQueueSystem::<i64>::new("counter".to_string()));

    // Consumer: drain until the queue reports completion.
    let consumer = {
        let system = system.clone();
        thread::spawn(move || {
            while let Some(item) = system.get() {
                println!("{}", item);
            }
            println!("done thread");
        })
    };

    // Producer: push a batch, then close the queue and wait for the
    // consumer to drain it.
    for i in 1..=10 {
        if !system.push(i * 111) {
            eprintln!("queue refused item {}", i);
        }
    }
    system.join();

    consumer.join().unwrap();

    // Append the operation log as NDJSON
    append_logs(&system.logs(), "output.ndjson").expect("Failed to append logs");
}
