use seqid::IdGenerator;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Node identity normally comes from the fleet's membership layer
    let generator = IdGenerator::new(23).unwrap();

    for _ in 0..5 {
        let id = generator.generate("ORD");
        println!(
            "{} (node={}, exponent={}, generated_at={})",
            id,
            id.node(),
            id.exponent(),
            id.generated_at().format("%Y-%m-%d %H:%M:%S%.3f")
        );
    }

    match seqid::decode("ABC2011250959030643972247") {
        Ok(id) => println!("parsed {} -> node {} exponent {}", id, id.node(), id.exponent()),
        Err(err) => println!("parse failed: {err}"),
    }

    if let Err(err) = seqid::decode("ABC2032250959030643972247") {
        println!("rejected: {err}");
    }
}
