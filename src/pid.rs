//! Holds the [`Pid`] type and the allocator that issues them

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

use core::num::NonZeroU32;

/// Identifies a schedule for its whole lifetime
///
/// Zero is never a valid PID. Where the C-style API would hand back PID 0
/// for "no such schedule", this crate uses `Option<Pid>` or
/// [`Error::NotFound`](crate::Error::NotFound).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pid(NonZeroU32);

impl Pid {
    /// Wrap a raw value, if it is non-zero
    pub const fn new(raw: u32) -> Option<Pid> {
        match NonZeroU32::new(raw) {
            Some(value) => Some(Pid(value)),
            None => None,
        }
    }

    /// Get the raw value
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Pid {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "P{=u32}", self.0.get());
    }
}

impl core::fmt::Display for Pid {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "{}", self.0)
    }
}

/// Hands out PIDs from a wrapping counter
///
/// The counter starts at 1. When it wraps, zero is skipped, and so is any
/// value the caller reports as still in use. As long as fewer than
/// `u32::MAX` schedules are alive at once, issuance always terminates.
#[derive(Debug, Clone)]
pub(crate) struct PidAllocator {
    next: u32,
}

impl PidAllocator {
    /// Build an allocator whose first PID will be 1
    pub(crate) const fn new() -> PidAllocator {
        PidAllocator { next: 1 }
    }

    /// Build an allocator that starts counting at `next`
    #[cfg(test)]
    pub(crate) const fn starting_at(next: u32) -> PidAllocator {
        PidAllocator { next }
    }

    /// Issue the next free PID
    pub(crate) fn issue<F>(&mut self, in_use: F) -> Pid
    where
        F: Fn(Pid) -> bool,
    {
        loop {
            let raw = self.next;
            self.next = self.next.wrapping_add(1);
            match Pid::new(raw) {
                Some(pid) if !in_use(pid) => return pid,
                _ => {}
            }
        }
    }

    /// The raw counter value the next issuance will start from
    pub(crate) const fn peek(&self) -> u32 {
        self.next
    }
}


// End of File
