//! Generation-advance throughput on random grids of increasing size

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use toroidal_life::{Simulation, application::seed_random};

fn benchmark_advance(size: usize, iterations: u32) -> Option<f64> {
    let mut sim = Simulation::new(size, size).ok()?;
    seed_random(&mut sim, &mut StdRng::seed_from_u64(size as u64), 0.3);

    let start = Instant::now();
    for _ in 0..iterations {
        sim.advance();
    }
    Some(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() {
    println!("=== Generation Advance Benchmark ===\n");

    let sizes = [24, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>16}", "Size", "ms/gen", "cells/sec");
    println!("{:-<40}", "");

    for size in sizes {
        let Some(ms) = benchmark_advance(size, iterations) else {
            continue;
        };
        let cells = (size * size) as f64;
        println!(
            "{:>10} {:>12.3} {:>15.1}M",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }
}
