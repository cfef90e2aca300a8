//! Contains the [`Error`] type

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Pid;

/// Why a scheduler operation was refused
///
/// None of these are fatal. The operation that reports one leaves the
/// scheduler exactly as it found it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Schedules must have a period of at least two ticks
    #[error("invalid period {0}: must be greater than one tick")]
    InvalidPeriod(u32),
    /// No work function was supplied
    #[error("no work function supplied")]
    NullCallback,
    /// The PID does not belong to a live schedule
    #[error("no schedule with PID {0}")]
    NotFound(Pid),
    /// The schedule table is full
    #[error("schedule table is full")]
    AllocationFailure,
}

/// Result type for scheduler operations
pub type Result<T> = core::result::Result<T, Error>;

// End of File
