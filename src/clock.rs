//! Contains the [`Clock`] trait and the clock sources we ship

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

use core::cell::Cell;

/// A free-running microsecond counter
///
/// The value is allowed to wrap at `u32::MAX`. The scheduler only uses it to
/// time callbacks and its own overhead; the countdown of each schedule is
/// driven by [`Scheduler::advance`](crate::Scheduler::advance), not by this
/// clock.
pub trait Clock {
    /// Read the counter
    fn now_micros(&self) -> u32;
}

/// Microseconds between two readings of a wrapping counter
///
/// Exact as long as the counter wrapped at most once between `start` and
/// `end`, i.e. the true duration is below 2^32 microseconds.
pub const fn elapsed_micros(start: u32, end: u32) -> u32 {
    end.wrapping_sub(start)
}

/// A clock that only moves when you tell it to
///
/// Useful for host-side drivers and tests. Callbacks can call
/// [`ManualClock::advance`] through [`Scheduler::clock`](crate::Scheduler::clock)
/// to pretend they took some time.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    /// Create a clock reading `start`
    pub const fn new(start: u32) -> ManualClock {
        ManualClock {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward, wrapping at `u32::MAX`
    pub fn advance(&self, micros: u32) {
        self.now.set(self.now.get().wrapping_add(micros));
    }

    /// Jump to an absolute reading
    pub fn set(&self, micros: u32) {
        self.now.set(micros);
    }
}

impl Clock for ManualClock {
    fn now_micros(&self) -> u32 {
        self.now.get()
    }
}

/// A clock built on the Cortex-M DWT cycle counter
///
/// The cycle counter wraps every `2^32 / sysclk` seconds, which is not a
/// whole number of microseconds, so we accumulate microseconds ourselves and
/// let that total wrap at `u32::MAX`. Read it at least once per cycle counter
/// wrap (about 25 seconds at 168 MHz) or time will be lost.
///
/// Needs a core with a cycle counter (Armv7-M or Armv8-M Mainline).
#[cfg(feature = "cortex-m")]
pub struct DwtClock {
    /// Core clock cycles per microsecond
    cycles_per_micro: u32,
    /// Cycle count at the last reading
    last_cycles: Cell<u32>,
    /// Cycles not yet converted into a whole microsecond
    spare_cycles: Cell<u32>,
    /// Accumulated microseconds
    micros: Cell<u32>,
}

#[cfg(feature = "cortex-m")]
impl DwtClock {
    /// Start the cycle counter and build a clock on top of it
    ///
    /// `sysclk_hz` must be at least 1 MHz.
    pub fn new(
        dcb: &mut cortex_m::peripheral::DCB,
        dwt: &mut cortex_m::peripheral::DWT,
        sysclk_hz: u32,
    ) -> DwtClock {
        dcb.enable_trace();
        dwt.enable_cycle_counter();
        DwtClock {
            cycles_per_micro: (sysclk_hz / 1_000_000).max(1),
            last_cycles: Cell::new(cortex_m::peripheral::DWT::cycle_count()),
            spare_cycles: Cell::new(0),
            micros: Cell::new(0),
        }
    }
}

#[cfg(feature = "cortex-m")]
impl Clock for DwtClock {
    fn now_micros(&self) -> u32 {
        let cycles = cortex_m::peripheral::DWT::cycle_count();
        let delta = cycles.wrapping_sub(self.last_cycles.get());
        self.last_cycles.set(cycles);
        // both terms are below 2^32, so widen before adding
        let pending = u64::from(self.spare_cycles.get()) + u64::from(delta);
        let per = u64::from(self.cycles_per_micro);
        self.spare_cycles.set((pending % per) as u32);
        self.micros
            .set(self.micros.get().wrapping_add((pending / per) as u32));
        self.micros.get()
    }
}


// End of File
