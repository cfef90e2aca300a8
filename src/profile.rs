//! Holds the [`ProfileRecord`] type

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

/// Execution time statistics for one schedule
///
/// A record starts with `best_micros` at `u32::MAX` and `worst_micros` at
/// zero, so the first sample sets both.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProfileRecord {
    last_micros: u32,
    best_micros: u32,
    worst_micros: u32,
    execution_count: u32,
    active: bool,
}

impl ProfileRecord {
    /// A fresh, active record with no samples
    pub const fn new() -> ProfileRecord {
        ProfileRecord {
            last_micros: 0,
            best_micros: u32::MAX,
            worst_micros: 0,
            execution_count: 0,
            active: true,
        }
    }

    /// Add one execution time sample
    pub(crate) fn record(&mut self, elapsed_micros: u32) {
        self.last_micros = elapsed_micros;
        self.best_micros = self.best_micros.min(elapsed_micros);
        self.worst_micros = self.worst_micros.max(elapsed_micros);
        self.execution_count = self.execution_count.wrapping_add(1);
    }

    /// Stop taking samples, keeping what we have
    pub(crate) fn stop(&mut self) {
        self.active = false;
    }

    /// Duration of the most recent execution
    pub const fn last_micros(&self) -> u32 {
        self.last_micros
    }

    /// Shortest execution seen, or `u32::MAX` if there are no samples
    pub const fn best_micros(&self) -> u32 {
        self.best_micros
    }

    /// Longest execution seen
    pub const fn worst_micros(&self) -> u32 {
        self.worst_micros
    }

    /// How many executions were sampled
    pub const fn execution_count(&self) -> u32 {
        self.execution_count
    }

    /// Is dispatch still writing samples into this record?
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for ProfileRecord {
    fn default() -> Self {
        ProfileRecord::new()
    }
}


// End of File
