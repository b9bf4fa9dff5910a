use std::env;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use handover::ChannelBuilder;

fn main() {
    let args: Vec<String> = env::args().collect();
    let num_messages: usize = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100_000);
    let capacity: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1024);

    println!(
        "Producer/consumer: {} messages through a buffered channel of {}",
        num_messages, capacity
    );

    let chan = Arc::new(ChannelBuilder::new().with_capacity(capacity).build::<usize>());

    let start = Instant::now();

    let producer = {
        let chan = Arc::clone(&chan);
        thread::spawn(move || {
            for i in 0..num_messages {
                if chan.send(i).is_err() {
                    eprintln!("Producer: channel closed early at message {}", i);
                    return;
                }
            }
            chan.close();
        })
    };

    let consumer = {
        let chan = Arc::clone(&chan);
        thread::spawn(move || {
            let mut next_expected = 0usize;
            while let Ok(value) = chan.receive() {
                assert_eq!(value, next_expected, "out-of-order delivery");
                next_expected += 1;
                if next_expected % 10_000 == 0 {
                    println!("Received {} messages", next_expected);
                }
            }
            next_expected
        })
    };

    producer.join().expect("producer panicked");
    let received = consumer.join().expect("consumer panicked");

    let elapsed = start.elapsed();
    println!("Done: {} messages in {:.2?}", received, elapsed);
    println!(
        "Throughput: {:.2} messages/sec",
        received as f64 / elapsed.as_secs_f64()
    );
}
