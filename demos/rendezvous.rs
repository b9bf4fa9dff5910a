use std::sync::Arc;
use std::thread;
use std::time::Duration;

use handover::ChannelBuilder;

fn main() {
    let chan = Arc::new(ChannelBuilder::new().build::<u64>());

    // Ctrl+C closes the channel; both sides observe it and wind down.
    {
        let chan = Arc::clone(&chan);
        ctrlc::set_handler(move || {
            chan.close();
        })
        .expect("Error setting Ctrl+C handler");
    }

    println!("Rendezvous pair streaming ticks; press Ctrl+C to stop");

    let producer = {
        let chan = Arc::clone(&chan);
        thread::spawn(move || {
            let mut tick = 0u64;
            while chan.send(tick).is_ok() {
                tick += 1;
                thread::sleep(Duration::from_millis(250));
            }
            println!("Producer: channel closed after {} ticks", tick);
        })
    };

    let consumer = {
        let chan = Arc::clone(&chan);
        thread::spawn(move || {
            let mut received = 0u64;
            while let Ok(tick) = chan.receive() {
                println!("Received tick {}", tick);
                received += 1;
            }
            println!("Consumer: end of stream after {} ticks", received);
        })
    };

    producer.join().expect("producer panicked");
    consumer.join().expect("consumer panicked");
}
