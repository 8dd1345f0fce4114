use seqid::{HashCodePartitioner, Id, KeyPartitioner, NodeId, PartitionValidator};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let node = NodeId::from_zone(2, 17).unwrap();
    seqid::initialize(node.get() as u32).unwrap();

    // This node owns the first four of sixteen partitions
    let partitioner = HashCodePartitioner::new(16).unwrap();
    let owned = PartitionValidator::new(4, partitioner);

    for _ in 0..5 {
        let id = seqid::generate_with_constraints("TXN", &[&owned], true)
            .unwrap()
            .expect("owned partitions are reachable");
        println!("{} -> partition {}", id, partitioner.partition(&id));
    }

    let never = |_: &Id| false;
    let strict = seqid::generate_with_constraints("TXN", &[&never], true).unwrap();
    println!("unsatisfiable constraint gives {:?}", strict.map(|id| id.to_string()));
}
