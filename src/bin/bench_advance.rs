use std::time::Instant;

use life_board::{BoardConfig, BorderPolicy, LifeBoard, Topology};

fn bench(size: i64, topology: Topology, iterations: u64) -> Option<(f64, u64)> {
    let mut board = LifeBoard::with_config(
        size,
        BoardConfig::default().border_policy(BorderPolicy::Full),
    )
    .ok()?;

    let start = Instant::now();
    board.advance_n(topology, iterations);
    let duration = start.elapsed();

    Some((duration.as_secs_f64() * 1000.0, board.population()))
}

fn main() {
    env_logger::init();

    let scales: &[(i64, u64)] = &[(64, 2000), (256, 500), (400, 200), (1024, 50)];

    println!(
        "{:<10} {:>10} {:>8} {:>12} {:>10} {:>10}",
        "Grid", "Topology", "Iters", "Total(ms)", "Avg(ms)", "Pop"
    );
    println!("{}", "-".repeat(66));

    for &(size, iters) in scales {
        for topology in [Topology::Bounded, Topology::Toroidal] {
            let Some((total_ms, pop)) = bench(size, topology, iters) else {
                continue;
            };
            let avg_ms = total_ms / iters as f64;
            println!(
                "{:<10} {:>10} {:>8} {:>12.1} {:>10.4} {:>10}",
                format!("{}x{}", size, size),
                topology.name(),
                iters,
                total_ms,
                avg_ms,
                pop
            );
        }
    }
}
