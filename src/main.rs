//! Self-check: runs the worked example and the scale scenario.
//!
//! Prints "Task solved" and exits 0 when both pass.

use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, ensure, Result};
use rand::seq::SliceRandom;
use tracing::info;

use tracker::{logging, SharedTracker, Tracker};

/// Keys `0..EXISTING` are active before the scale reconciliation.
const EXISTING: u32 = 10_000;
/// The scale target is `TARGET_START..TARGET_END`, shuffled.
const TARGET_START: u32 = 5_000;
const TARGET_END: u32 = 20_000;
/// Wall-clock budget for the scale reconciliation.
const BUDGET: Duration = Duration::from_secs(1);

fn join(keys: &[u32]) -> String {
    return keys.iter().map(u32::to_string).collect::<Vec<_>>().join(", ");
}

fn expect_order(expected: &[u32], actual: &[u32]) -> Result<()> {
    ensure!(
        expected == actual,
        "Incorrect answer. Expected '{}'. Was '{}'",
        join(expected),
        join(actual),
    );
    return Ok(());
}

fn worked_example() -> Result<()> {
    let mut items = Tracker::new();
    items.try_add(0)?;
    items.try_add(1)?;
    items.try_add(2)?;
    items.delete(&2)?;
    items.try_add(3)?;
    items.delete(&3)?;

    items.set_active_items([1, 2, 4]);

    items.try_add(5)?;

    let active: Vec<u32> = items.active_items().copied().collect();
    expect_order(&[5, 4, 2, 1], &active)?;

    let deleted: Vec<u32> = items.deleted_items().copied().collect();
    expect_order(&[3, 0], &deleted)?;

    return Ok(());
}

fn scale() -> Result<()> {
    let items = SharedTracker::from(Tracker::with_capacity(TARGET_END as usize));
    for key in 0..EXISTING {
        items.try_add(key)?;
    }

    let mut target: Vec<u32> = (TARGET_START..TARGET_END).collect();
    target.shuffle(&mut rand::thread_rng());

    let (tx, rx) = mpsc::channel();
    let worker = items.clone();
    thread::spawn(move || {
        let started = Instant::now();
        let report = worker.set_active_items(target);
        // The receiver is gone if the budget already ran out.
        let _ = tx.send((report, started.elapsed()));
    });

    let (report, elapsed) = match rx.recv_timeout(BUDGET) {
        Ok(done) => done,
        Err(_) => bail!("Task is not solved optimally"),
    };
    info!(?report, ?elapsed, "scale reconciliation finished");

    let mut active = items.active_items();
    active.sort_unstable();
    ensure!(active.into_iter().eq(TARGET_START..TARGET_END), "Incorrect answer");

    return Ok(());
}

fn main() -> ExitCode {
    logging::init();

    match worked_example().and_then(|()| scale()) {
        Ok(()) => {
            println!("Task solved");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            println!("Task not solved: {err}!");
            return ExitCode::FAILURE;
        }
    }
}
