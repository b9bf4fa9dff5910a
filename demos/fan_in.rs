use std::env;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use handover::ChannelBuilder;

const PRODUCERS: usize = 4;

fn main() {
    let args: Vec<String> = env::args().collect();
    let per_producer: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(25_000);

    println!(
        "Fan-in: {} producers x {} messages over a channel of 64",
        PRODUCERS, per_producer
    );

    let chan = Arc::new(ChannelBuilder::new().with_capacity(64).build::<(usize, usize)>());

    let start = Instant::now();

    let mut producers = Vec::with_capacity(PRODUCERS);
    for id in 0..PRODUCERS {
        let chan = Arc::clone(&chan);
        producers.push(thread::spawn(move || {
            for seq in 0..per_producer {
                chan.send((id, seq)).expect("channel closed while producing");
            }
        }));
    }

    let consumer = {
        let chan = Arc::clone(&chan);
        thread::spawn(move || {
            let mut last_seq = [None::<usize>; PRODUCERS];
            let mut received = 0usize;
            while let Ok((id, seq)) = chan.receive() {
                if let Some(prev) = last_seq[id] {
                    assert!(seq > prev, "per-producer order violated");
                }
                last_seq[id] = Some(seq);
                received += 1;
            }
            received
        })
    };

    for handle in producers {
        handle.join().expect("producer panicked");
    }
    chan.close();

    let received = consumer.join().expect("consumer panicked");
    let elapsed = start.elapsed();

    assert_eq!(received, PRODUCERS * per_producer);
    println!("All {} messages accounted for in {:.2?}", received, elapsed);
    println!(
        "Throughput: {:.2} messages/sec",
        received as f64 / elapsed.as_secs_f64()
    );
}
