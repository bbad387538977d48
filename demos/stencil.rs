//! Jacobi relaxation of a 2D grid, one static slice of rows per rayon thread.
//!
//! Run with `RUST_LOG=debug cargo run --example stencil`.

use anyhow::Result;
use log::info;
use spazio::{
    domain::Domain,
    iterators::{OrderKind, TraversableRange},
    partition::broadcast,
};

const N: usize = 100;
const SWEEPS: usize = 50;

fn at(i: isize, j: isize) -> usize {
    i as usize + j as usize * N
}

fn sweep(interior: &Domain, input: &[f64], output: &mut [f64]) -> Result<()> {
    // rows (axis 1) are split among workers, each one reads the halo of its
    // neighbours from `input` which nobody writes during the sweep
    let slices = broadcast(interior, 1, OrderKind::Linear, |_, range| {
        let values: Vec<f64> = range
            .iter()
            .map(|c| {
                let (i, j) = (c[0], c[1]);
                (input[at(i - 1, j)] + input[at(i + 1, j)] + input[at(i, j - 1)]
                    + input[at(i, j + 1)])
                    / 4.
            })
            .collect();
        (range, values)
    })?;

    for (range, values) in slices {
        for (c, value) in range.iter().zip(values) {
            output[at(c[0], c[1])] = value;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let interior = Domain::new(&[1, N as isize - 1, 1, N as isize - 1])?;
    let mut current = vec![0.; N * N];
    // hot top edge
    for c in &TraversableRange::linear(Domain::new(&[0, N as isize, 0, 1])?) {
        current[at(c[0], c[1])] = 1.;
    }
    let mut next = current.clone();

    for _ in 0..SWEEPS {
        sweep(&interior, &current, &mut next)?;
        std::mem::swap(&mut current, &mut next);
    }

    let mean = current.iter().sum::<f64>() / (N * N) as f64;
    info!("mean after {SWEEPS} sweeps: {mean}");
    println!("{mean}");
    Ok(())
}
