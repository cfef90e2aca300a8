//! TICS: a Tick-driven, Idle-time, Cooperative Scheduler
//!
//! Register periodic, repeating or one-shot work functions with a
//! [`Scheduler`], call [`Scheduler::advance`] from your tick interrupt and
//! [`Scheduler::dispatch_due`] from your idle loop. Work functions run to
//! completion, one per dispatch, in the order they were registered.
//!
//! ```
//! use tics::{ManualClock, Recurrence, Scheduler};
//!
//! fn blink(_: &mut Scheduler<ManualClock, 8>) {}
//!
//! let mut scheduler: Scheduler<ManualClock, 8> = Scheduler::new(ManualClock::new(0));
//! let pid = scheduler
//!     .create_schedule(500, Recurrence::Forever, false, Some(blink))
//!     .unwrap();
//! for _ in 0..500 {
//!     scheduler.advance();
//! }
//! assert_eq!(scheduler.dispatch_due(), Some(pid));
//! ```

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod logging;

mod clock;
mod error;
mod pid;
mod profile;
mod report;
mod scheduler;
mod task;

#[cfg(feature = "cortex-m")]
pub use clock::DwtClock;
pub use clock::{Clock, ManualClock, elapsed_micros};
pub use error::{Error, Result};
pub use pid::Pid;
pub use profile::ProfileRecord;
pub use report::{Filter, ProfileTable, ScheduleTable};
pub use scheduler::Scheduler;
pub use task::{ItemState, Recurrence, WorkFn, WorkItem};

// End of File
