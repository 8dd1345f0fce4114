#[cfg(test)]
mod tests {
    use crate::tests::test_utils::assert_unique;
    use crate::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_concurrent_generation() {
        let generator = Arc::new(IdGenerator::new(7).unwrap());
        let num_threads = 8;
        let ids_per_thread = 2_500;
        let barrier = Arc::new(Barrier::new(num_threads));
        let mut handles = Vec::with_capacity(num_threads);

        for _ in 0..num_threads {
            let generator = Arc::clone(&generator);
            let barrier = Arc::clone(&barrier);
            handles.push(thread::spawn(move || {
                barrier.wait();
                (0..ids_per_thread)
                    .map(|_| generator.generate("X").into_string())
                    .collect::<Vec<_>>()
            }));
        }

        let mut all_ids = Vec::with_capacity(num_threads * ids_per_thread);
        for h in handles {
            all_ids.extend(h.join().expect("thread panicked"));
        }

        assert_unique(&all_ids, num_threads * ids_per_thread);
    }

    #[test]
    fn test_sustained_generation_has_no_duplicates() {
        let generator = Arc::new(IdGenerator::new(23).unwrap());
        let stop = Arc::new(AtomicBool::new(false));
        let mut handles = vec![];

        for _ in 0..4 {
            let generator = Arc::clone(&generator);
            let stop = Arc::clone(&stop);
            handles.push(thread::spawn(move || {
                let mut ids = Vec::new();
                while !stop.load(Ordering::Relaxed) {
                    ids.push(generator.generate("X").into_string());
                }
                ids
            }));
        }

        thread::sleep(Duration::from_millis(500));
        stop.store(true, Ordering::Relaxed);

        let mut seen = HashSet::new();
        let mut total = 0usize;
        for h in handles {
            for id in h.join().unwrap() {
                total += 1;
                assert!(seen.insert(id), "duplicate identifier generated");
            }
        }
        assert!(total > 0);
    }

    #[test]
    fn test_concurrent_constrained_generation() {
        let generator = Arc::new(IdGenerator::new(23).unwrap());
        let partitioner = HashCodePartitioner::new(16).unwrap();
        let mut handles = vec![];

        for _ in 0..8 {
            let generator = Arc::clone(&generator);
            handles.push(thread::spawn(move || {
                let validator = PartitionValidator::new(4, partitioner);
                (0..250)
                    .map(|_| {
                        generator
                            .generate_with_constraints("X", &[&validator], true)
                            .expect("constraint satisfiable")
                    })
                    .collect::<Vec<_>>()
            }));
        }

        let mut all = vec![];
        for h in handles {
            all.extend(h.join().unwrap());
        }

        assert!(all.iter().all(|id| partitioner.partition(id) < 4));
        let encoded: Vec<&str> = all.iter().map(Id::id).collect();
        assert_unique(&encoded, 2_000);
    }

    #[test]
    fn test_cross_node_uniqueness() {
        let mut all_ids = HashSet::new();

        for node in 0..10 {
            let g = IdGenerator::new(node).unwrap();
            for _ in 0..100 {
                let id = g.generate("N");
                assert!(all_ids.insert(id.into_string()), "Collision from node {}", node);
            }
        }
        assert_eq!(all_ids.len(), 1000);
    }
}
