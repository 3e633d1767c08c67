// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel deal sampling.
use rand::prelude::*;
use std::thread;

use super::{Card, Pack};

impl Pack {
    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of size k.
    ///
    /// The closure takes an usize that is the task identifier (0..num_task)
    /// and a slice of k distinct cards.
    pub fn par_sample<F>(&self, num_tasks: usize, samples_per_task: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!(num_tasks > 0);

        if k > self.cards.len() {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut h = vec![Card::default(); k];
                    let mut rng = SmallRng::from_os_rng();

                    for _ in 0..samples_per_task {
                        for (pos, c) in self.cards.choose_multiple(&mut rng, k).enumerate() {
                            h[pos] = *c;
                        }

                        f(task_id, &h);
                    }
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn par_sample_counts() {
        let counters = (0..4).map(|_| AtomicUsize::new(0)).collect::<Vec<_>>();

        Pack::default().par_sample(4, 250, 10, |task_id, cards| {
            assert_eq!(cards.len(), 10);
            counters[task_id].fetch_add(1, Ordering::Relaxed);
        });

        assert!(counters.iter().all(|c| c.load(Ordering::Relaxed) == 250));
    }

    #[test]
    fn par_sample_small_pack() {
        let mut pack = Pack::default();
        while pack.count() > 5 {
            pack.deal();
        }

        pack.par_sample(2, 10, 10, |_, _| panic!("unexpected sample"));
    }
}
