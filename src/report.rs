//! Printable views of the schedule table
//!
//! These are for people reading a serial console. They borrow the
//! [`Scheduler`] and format straight into whatever you `write!` them to, so
//! they need no buffer and have no limit on line length. Don't parse them;
//! use the query methods on [`Scheduler`] instead.

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

use core::fmt;

use crate::{Pid, Scheduler, WorkItem};

/// Which rows a table shows
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Filter {
    /// Every schedule
    All,
    /// Enabled schedules, or schedules being profiled for the profile table
    Active,
    /// Just this one
    Pid(Pid),
}

/// Printed instead of a table when there are no schedules at all
const EMPTY: &str = "NO SCHEDULES";

fn yes_no(flag: bool) -> &'static str {
    if flag { "YES" } else { "NO" }
}

/// The schedule table, see [`Scheduler::schedule_table`]
pub struct ScheduleTable<'a, C, const N: usize> {
    scheduler: &'a Scheduler<C, N>,
    filter: Filter,
}

impl<'a, C, const N: usize> ScheduleTable<'a, C, N> {
    pub(crate) fn new(scheduler: &'a Scheduler<C, N>, filter: Filter) -> Self {
        ScheduleTable { scheduler, filter }
    }

    fn shows(&self, item: &WorkItem<C, N>) -> bool {
        match self.filter {
            Filter::All => true,
            Filter::Active => item.is_enabled(),
            Filter::Pid(pid) => item.pid() == pid,
        }
    }
}

impl<C: crate::Clock, const N: usize> fmt::Display for ScheduleTable<'_, C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scheduler.total_schedules() == 0 {
            return writeln!(f, "{EMPTY}");
        }
        writeln!(
            f,
            "[PID, ENABLED, TTF, PERIOD, RECURS, PENDING, AUTOCLEAR, PROFILED]"
        )?;
        for item in self.scheduler.schedules().filter(|item| self.shows(item)) {
            writeln!(
                f,
                "[{}, {}, {}, {}, {}, {}, {}, {}]",
                item.pid(),
                yes_no(item.is_enabled()),
                item.time_to_wait(),
                item.period(),
                item.recurrence().raw(),
                yes_no(item.is_due()),
                yes_no(item.auto_reap()),
                yes_no(item.is_profiled()),
            )?;
        }
        Ok(())
    }
}

/// The profile table, see [`Scheduler::profile_table`]
///
/// Only schedules with a profile record attached get a row.
pub struct ProfileTable<'a, C, const N: usize> {
    scheduler: &'a Scheduler<C, N>,
    filter: Filter,
}

impl<'a, C, const N: usize> ProfileTable<'a, C, N> {
    pub(crate) fn new(scheduler: &'a Scheduler<C, N>, filter: Filter) -> Self {
        ProfileTable { scheduler, filter }
    }

    fn shows(&self, item: &WorkItem<C, N>) -> bool {
        match self.filter {
            Filter::All => true,
            Filter::Active => item.is_profiled(),
            Filter::Pid(pid) => item.pid() == pid,
        }
    }
}

impl<C: crate::Clock, const N: usize> fmt::Display for ProfileTable<'_, C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scheduler.total_schedules() == 0 {
            return writeln!(f, "{EMPTY}");
        }
        writeln!(f, "[PID, PROFILING, EXECUTED, LAST, BEST, WORST]")?;
        for item in self.scheduler.schedules().filter(|item| self.shows(item)) {
            let Some(profile) = item.profile() else {
                continue;
            };
            writeln!(
                f,
                "[{}, {}, {}, {}, {}, {}]",
                item.pid(),
                yes_no(profile.is_active()),
                profile.execution_count(),
                profile.last_micros(),
                profile.best_micros(),
                profile.worst_micros(),
            )?;
        }
        Ok(())
    }
}


// End of File
