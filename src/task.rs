//! Holds the [`WorkItem`] type and methods

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{Pid, ProfileRecord, Scheduler};

/// The work function of a schedule
///
/// It gets the scheduler that is running it, so it can create, alter or
/// remove schedules (including its own) and read the clock.
pub type WorkFn<C, const N: usize> = fn(&mut Scheduler<C, N>);

/// How many more times a schedule fires
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Recurrence {
    /// Fire for as long as the schedule is enabled
    Forever,
    /// Fire until this count runs out
    ///
    /// Each firing takes one off the count, and the firing that brings it to
    /// zero is the last one. A schedule that already has zero left fires one
    /// final time.
    Remaining(u16),
}

impl Recurrence {
    /// A schedule that fires once and then stops
    pub const ONCE: Recurrence = Recurrence::Remaining(0);

    /// The classic signed representation: -1 for [`Recurrence::Forever`]
    pub const fn raw(self) -> i32 {
        match self {
            Recurrence::Forever => -1,
            Recurrence::Remaining(n) => n as i32,
        }
    }

    /// Count one firing off
    ///
    /// Returns `true` if that was the last one.
    fn consume(&mut self) -> bool {
        match self {
            Recurrence::Forever => false,
            Recurrence::Remaining(n) => {
                *n = n.saturating_sub(1);
                *n == 0
            }
        }
    }
}

impl From<i16> for Recurrence {
    /// Any negative value means [`Recurrence::Forever`]
    fn from(raw: i16) -> Recurrence {
        if raw < 0 {
            Recurrence::Forever
        } else {
            Recurrence::Remaining(raw as u16)
        }
    }
}

/// Where a schedule is in its life cycle
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ItemState {
    /// Not taking part in ticks or dispatch
    Disabled,
    /// Counting down
    Waiting,
    /// Counted down, waiting for [`Scheduler::dispatch_due`]
    Due,
    /// Its work function is running right now
    Executing,
}

/// What happened to a schedule after its work function ran
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Retirement {
    /// It stays in the table, enabled
    Keep,
    /// It ran out and stays in the table, disabled
    Disable,
    /// It ran out and must be taken out of the table
    Reap,
}

/// One schedule the [`Scheduler`] is managing
#[derive(Debug)]
pub struct WorkItem<C, const N: usize> {
    pid: Pid,
    period: u32,
    time_to_wait: u32,
    recurrence: Recurrence,
    enabled: bool,
    due: bool,
    auto_reap: bool,
    callback: WorkFn<C, N>,
    profile: Option<ProfileRecord>,
}

impl<C, const N: usize> WorkItem<C, N> {
    /// Build an enabled item with a full countdown
    pub(crate) fn new(
        pid: Pid,
        period: u32,
        recurrence: Recurrence,
        auto_reap: bool,
        callback: WorkFn<C, N>,
    ) -> WorkItem<C, N> {
        WorkItem {
            pid,
            period,
            time_to_wait: period,
            recurrence,
            enabled: true,
            due: false,
            auto_reap,
            callback,
            profile: None,
        }
    }

    /// The PID this item was created with
    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// Ticks between firings
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Ticks left until the next firing
    pub fn time_to_wait(&self) -> u32 {
        self.time_to_wait
    }

    /// How many more times this item fires
    pub fn recurrence(&self) -> Recurrence {
        self.recurrence
    }

    /// Does this item take part in ticks and dispatch?
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Has this item counted down and is waiting for dispatch?
    pub fn is_due(&self) -> bool {
        self.due
    }

    /// Is this item removed (rather than disabled) once it runs out?
    pub fn auto_reap(&self) -> bool {
        self.auto_reap
    }

    /// The work function
    pub fn callback(&self) -> WorkFn<C, N> {
        self.callback
    }

    /// The profile record, if one is attached
    pub fn profile(&self) -> Option<&ProfileRecord> {
        self.profile.as_ref()
    }

    /// Is a profile attached and taking samples?
    pub fn is_profiled(&self) -> bool {
        self.profile.is_some_and(|p| p.is_active())
    }

    /// Where this item is in its life cycle
    ///
    /// Never reports [`ItemState::Executing`]; only the scheduler knows that.
    pub fn state(&self) -> ItemState {
        match (self.enabled, self.due) {
            (false, _) => ItemState::Disabled,
            (true, false) => ItemState::Waiting,
            (true, true) => ItemState::Due,
        }
    }

    /// Count down one tick
    ///
    /// Returns `true` if the item just became due.
    pub(crate) fn tick(&mut self) -> bool {
        if self.time_to_wait <= 1 {
            self.due = true;
            self.time_to_wait = self.period;
            true
        } else {
            self.time_to_wait -= 1;
            false
        }
    }

    /// Replace every parameter and restart the countdown
    pub(crate) fn reconfigure(
        &mut self,
        period: u32,
        recurrence: Recurrence,
        auto_reap: bool,
        callback: WorkFn<C, N>,
    ) {
        self.period = period;
        self.recurrence = recurrence;
        self.auto_reap = auto_reap;
        self.callback = callback;
        self.time_to_wait = period;
        self.due = false;
    }

    pub(crate) fn set_period(&mut self, period: u32) {
        self.period = period;
        self.time_to_wait = period;
        self.due = false;
    }

    pub(crate) fn set_recurrence(&mut self, recurrence: Recurrence) {
        self.recurrence = recurrence;
        self.due = false;
    }

    pub(crate) fn set_auto_reap(&mut self, auto_reap: bool) {
        self.auto_reap = auto_reap;
    }

    pub(crate) fn set_callback(&mut self, callback: WorkFn<C, N>) {
        self.callback = callback;
    }

    pub(crate) fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stop the item and rearm its countdown, so a later enable does not
    /// fire early
    pub(crate) fn disable(&mut self) {
        self.enabled = false;
        self.due = false;
        self.time_to_wait = self.period;
    }

    /// Override the countdown this once and enable the item
    pub(crate) fn delay(&mut self, ticks: u32) {
        self.time_to_wait = ticks;
        self.enabled = true;
    }

    /// Mark the item so that the dispatch running it reaps it afterwards
    pub(crate) fn expire(&mut self) {
        self.recurrence = Recurrence::Remaining(0);
        self.auto_reap = true;
    }

    pub(crate) fn attach_profile(&mut self) {
        self.profile = Some(ProfileRecord::new());
    }

    pub(crate) fn stop_profile(&mut self) {
        if let Some(profile) = self.profile.as_mut() {
            profile.stop();
        }
    }

    pub(crate) fn detach_profile(&mut self) {
        self.profile = None;
    }

    /// Store a timing sample, if the profile is still taking them
    pub(crate) fn sample(&mut self, elapsed_micros: u32) {
        if let Some(profile) = self.profile.as_mut().filter(|p| p.is_active()) {
            profile.record(elapsed_micros);
        }
    }

    /// Clear the due flag and count this firing against the recurrence
    pub(crate) fn retire(&mut self) -> Retirement {
        self.due = false;
        if !self.recurrence.consume() {
            Retirement::Keep
        } else if self.auto_reap {
            Retirement::Reap
        } else {
            self.disable();
            Retirement::Disable
        }
    }
}


// End of File
