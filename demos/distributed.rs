use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::{rng, Rng};
use seqid::IdGenerator;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut handles = vec![];

    // Each "process" gets its own node identity
    for node in [101u32, 2_102, 7_003] {
        let generator = Arc::new(IdGenerator::new(node).unwrap());
        for worker in 0..2 {
            let generator = Arc::clone(&generator);
            handles.push(thread::spawn(move || {
                let mut rng = rng();
                let mut ids = Vec::new();
                for _ in 0..5 {
                    let id = generator.generate("JOB");
                    println!("node {node} worker {worker}: {id}");
                    ids.push(id.into_string());
                    thread::sleep(Duration::from_millis(rng.random_range(0..=9)));
                }
                ids
            }));
        }
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(all_ids.insert(id), "Duplicate ID generated!");
        }
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
}
