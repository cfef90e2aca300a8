//! Drives a scheduler from a simulated tick loop on the host
//!
//! Each loop iteration is one tick. Work functions advance the simulated
//! clock to pretend they took some time, so the profile table has something
//! to show.

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::atomic::{AtomicU32, Ordering};

use tics::{Filter, ManualClock, Pid, Recurrence, Scheduler};

/// How many schedules the table can hold
const MAX_SCHEDULES: usize = 8;

/// How many ticks to simulate
const TICKS: u32 = 40;

/// Microseconds of simulated time per tick
const MICROS_PER_TICK: u32 = 1_000;

type Sched = Scheduler<ManualClock, MAX_SCHEDULES>;

/// The cats schedule, so the vet can cancel it
static CAT_PID: AtomicU32 = AtomicU32::new(0);

fn main() {
    let mut scheduler: Sched = Scheduler::new(ManualClock::new(0));

    scheduler
        .create_schedule(5, Recurrence::Forever, false, Some(rabbits))
        .expect("creating rabbits");
    let hamsters = scheduler
        .create_schedule(10, Recurrence::Remaining(3), true, Some(hamsters))
        .expect("creating hamsters");
    let cats = scheduler
        .create_schedule(3, Recurrence::Forever, false, Some(cats))
        .expect("creating cats");
    CAT_PID.store(cats.get(), Ordering::Relaxed);
    scheduler
        .create_schedule(25, Recurrence::ONCE, true, Some(vet))
        .expect("creating vet");

    scheduler.begin_profiling(cats).expect("profiling cats");
    scheduler.begin_profiling(hamsters).expect("profiling hamsters");

    for tick in 1..=TICKS {
        scheduler.clock().advance(MICROS_PER_TICK);
        scheduler.advance();
        while let Some(pid) = scheduler.dispatch_due() {
            println!("tick {tick:02}: ran {pid}");
        }
    }

    println!();
    print!("{}", scheduler.schedule_table(Filter::All));
    println!();
    print!("{}", scheduler.profile_table(Filter::All));
    println!();
    println!(
        "{} of {} dispatch calls did work",
        scheduler.productive_dispatch_calls(),
        scheduler.total_dispatch_calls()
    );
}

fn rabbits(scheduler: &mut Sched) {
    println!("Rabbit! (back in 5)");
    scheduler.clock().advance(15);
}

fn hamsters(scheduler: &mut Sched) {
    println!("Hamster! (back in 10, three runs only)");
    scheduler.clock().advance(120);
}

fn cats(scheduler: &mut Sched) {
    println!("Cat! (back in 3)");
    scheduler.clock().advance(40);
}

fn vet(scheduler: &mut Sched) {
    println!("Vet! No more cats.");
    if let Some(pid) = Pid::new(CAT_PID.load(Ordering::Relaxed)) {
        if let Err(e) = scheduler.remove_schedule(pid) {
            println!("Vet: {e}");
        }
    }
}

// End of File
