// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random deals sampling.
use anyhow::Result;
use crossterm::style::Stylize;
use log::info;
use std::{
    io::Write,
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use psychic_eval::{Deal, HandCategory, Pack, best_hand};

/// Per task category counters.
#[derive(Default)]
struct Counter {
    categories: [AtomicU64; HandCategory::COUNT],
}

impl Counter {
    fn inc(&self, category: HandCategory) {
        self.categories[category.rank() as usize].fetch_add(1, Ordering::Relaxed);
    }

    fn get(&self, category: HandCategory) -> u64 {
        self.categories[category.rank() as usize].load(Ordering::Relaxed)
    }
}

/// Evaluates `samples_per_task` random deals on each task and returns the
/// number of deals for each category.
pub fn tally(num_tasks: usize, samples_per_task: usize) -> [u64; HandCategory::COUNT] {
    let task_counters = (0..num_tasks)
        .map(|_| Counter::default())
        .collect::<Vec<_>>();

    Pack::default().par_sample(
        num_tasks,
        samples_per_task,
        Deal::HAND_SIZE + Deal::DECK_SIZE,
        |task_id, cards| {
            let (hand, deck) = cards.split_at(Deal::HAND_SIZE);
            task_counters[task_id].inc(best_hand(hand, deck));
        },
    );

    let mut counts = [0; HandCategory::COUNT];
    for category in HandCategory::categories() {
        counts[category.rank() as usize] = task_counters.iter().map(|c| c.get(category)).sum();
    }

    counts
}

/// Samples random deals and prints the categories distribution.
pub fn run<W: Write>(
    w: &mut W,
    num_tasks: usize,
    samples_per_task: usize,
    color: bool,
) -> Result<()> {
    info!("Sampling {samples_per_task} deals on {num_tasks} tasks");

    let now = Instant::now();
    let counts = tally(num_tasks, samples_per_task);
    let elapsed = now.elapsed().as_secs_f64();

    let total = counts.iter().sum::<u64>();
    writeln!(w, "Total deals      {total}")?;
    writeln!(w, "Elapsed:         {elapsed:.3}s")?;
    writeln!(w, "Deals/sec:       {:.0}\n", total as f64 / elapsed.max(f64::EPSILON))?;

    for category in HandCategory::categories().rev() {
        let count = counts[category.rank() as usize];
        let pct = if total > 0 {
            100.0 * count as f64 / total as f64
        } else {
            0.0
        };

        let label = format!("{:<16}", format!("{category}:"));
        if color {
            writeln!(w, "{} {count:>10} {pct:>7.3}%", label.as_str().cyan())?;
        } else {
            writeln!(w, "{label} {count:>10} {pct:>7.3}%")?;
        }
    }

    Ok(())
}
