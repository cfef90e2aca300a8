//! Contains the [`Scheduler`] type

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{
    Clock, Error, ItemState, Pid, ProfileRecord, Recurrence, Result, WorkFn, WorkItem,
    clock::elapsed_micros,
    pid::PidAllocator,
    report::{Filter, ProfileTable, ScheduleTable},
    task::Retirement,
};

/// A cooperative, tick-driven scheduler
///
/// Holds up to `N` schedules in the order they were created. Two entry
/// points drive it:
///
/// * [`Scheduler::advance`] once per tick, usually from a timer interrupt or
///   a fixed-rate poll, counts every enabled schedule down and marks the
///   ones that reach zero as due;
/// * [`Scheduler::dispatch_due`] whenever there is idle time runs the work
///   function of the first due schedule, and only that one.
///
/// Because each dispatch runs at most one work function, the order of the
/// table is the priority: when two schedules are due together, the one
/// created first runs first.
///
/// Nothing in here locks. If `advance` runs from an interrupt while
/// `dispatch_due` runs in thread mode, you must make sure they never overlap
/// (for example by calling `advance` inside a critical section from the
/// interrupt and keeping structural changes out of the interrupt).
pub struct Scheduler<C, const N: usize> {
    /// Source of microsecond timestamps, for profiling only
    clock: C,
    /// All our schedules, in priority order
    items: heapless::Vec<WorkItem<C, N>, N>,
    /// Where new PIDs come from
    pids: PidAllocator,
    /// The schedule whose work function is running right now
    executing: Option<Pid>,
    /// Number of calls to `dispatch_due`
    total_dispatch_calls: u32,
    /// Number of calls to `dispatch_due` that ran a work function
    productive_dispatch_calls: u32,
    /// How long the last call to `dispatch_due` took, in microseconds
    overhead_micros: u32,
}

impl<C, const N: usize> Scheduler<C, N>
where
    C: Clock,
{
    /// Build an empty scheduler
    pub const fn new(clock: C) -> Scheduler<C, N> {
        Scheduler {
            clock,
            items: heapless::Vec::new(),
            pids: PidAllocator::new(),
            executing: None,
            total_dispatch_calls: 0,
            productive_dispatch_calls: 0,
            overhead_micros: 0,
        }
    }

    /// Get the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Add a schedule to the end of the table
    ///
    /// The new schedule is enabled straight away and first fires after
    /// `period` ticks. On failure nothing changes, not even the PID counter.
    pub fn create_schedule(
        &mut self,
        period: u32,
        recurrence: Recurrence,
        auto_reap: bool,
        callback: Option<WorkFn<C, N>>,
    ) -> Result<Pid> {
        let callback = Self::validate(period, callback)?;
        if self.items.is_full() {
            warn!("Table full, cannot create schedule");
            return Err(Error::AllocationFailure);
        }
        let items = &self.items;
        let pid = self
            .pids
            .issue(|candidate| items.iter().any(|item| item.pid() == candidate));
        let item = WorkItem::new(pid, period, recurrence, auto_reap, callback);
        if self.items.push(item).is_err() {
            return Err(Error::AllocationFailure);
        }
        debug!(
            "Created {} (period {}, recurs {}, reap {})",
            pid,
            period,
            recurrence.raw(),
            auto_reap
        );
        Ok(pid)
    }

    /// Take a schedule out of the table
    ///
    /// If the schedule is the one executing right now (a work function
    /// removing itself), it is not destroyed here. Instead it is marked to
    /// be reaped by the running dispatch once its work function returns.
    pub fn remove_schedule(&mut self, pid: Pid) -> Result<()> {
        let index = self.position(pid)?;
        if self.executing == Some(pid) {
            debug!("Deferring removal of {} until it returns", pid);
            self.items[index].expire();
        } else {
            self.items.remove(index);
            debug!("Removed {}", pid);
        }
        Ok(())
    }

    /// Remove every schedule
    ///
    /// A schedule that is executing right now is kept, but will be reaped
    /// when it returns.
    pub fn clear(&mut self) {
        let executing = self.executing;
        let before = self.items.len();
        self.items.retain_mut(|item| {
            if Some(item.pid()) == executing {
                item.expire();
                true
            } else {
                false
            }
        });
        info!("Cleared {} schedules", before - self.items.len());
    }

    /// Replace all the parameters of a schedule, keeping its PID
    ///
    /// Clears any pending firing and restarts the countdown from the new
    /// period. Does not enable or disable the schedule.
    pub fn alter_schedule(
        &mut self,
        pid: Pid,
        period: u32,
        recurrence: Recurrence,
        auto_reap: bool,
        callback: Option<WorkFn<C, N>>,
    ) -> Result<()> {
        let callback = Self::validate(period, callback)?;
        self.item_mut(pid)?
            .reconfigure(period, recurrence, auto_reap, callback);
        Ok(())
    }

    /// Change the period of a schedule, restarting its countdown
    pub fn alter_period(&mut self, pid: Pid, period: u32) -> Result<()> {
        if period <= 1 {
            warn!("Rejected period {} for {}", period, pid);
            return Err(Error::InvalidPeriod(period));
        }
        self.item_mut(pid)?.set_period(period);
        Ok(())
    }

    /// Change how many more times a schedule fires
    ///
    /// Clears any pending firing.
    pub fn alter_recurrence(&mut self, pid: Pid, recurrence: Recurrence) -> Result<()> {
        self.item_mut(pid)?.set_recurrence(recurrence);
        Ok(())
    }

    /// Change whether a schedule is removed once it runs out
    pub fn alter_auto_reap(&mut self, pid: Pid, auto_reap: bool) -> Result<()> {
        self.item_mut(pid)?.set_auto_reap(auto_reap);
        Ok(())
    }

    /// Change the work function of a schedule
    pub fn alter_callback(&mut self, pid: Pid, callback: Option<WorkFn<C, N>>) -> Result<()> {
        let Some(callback) = callback else {
            warn!("Rejected missing work function for {}", pid);
            return Err(Error::NullCallback);
        };
        self.item_mut(pid)?.set_callback(callback);
        Ok(())
    }

    /// Let a disabled schedule take part in ticks and dispatch again
    ///
    /// The countdown carries on from where it is.
    pub fn enable(&mut self, pid: Pid) -> Result<()> {
        self.item_mut(pid)?.enable();
        Ok(())
    }

    /// Stop a schedule without removing it
    ///
    /// Drops any pending firing and rearms the countdown, so enabling it
    /// later never fires it early.
    pub fn disable(&mut self, pid: Pid) -> Result<()> {
        self.item_mut(pid)?.disable();
        Ok(())
    }

    /// Fire a schedule after `ticks` ticks this one time, and enable it
    ///
    /// The period is unchanged, so later firings are `period` apart again.
    pub fn delay(&mut self, pid: Pid, ticks: u32) -> Result<()> {
        self.item_mut(pid)?.delay(ticks);
        Ok(())
    }

    /// Restart the countdown of a schedule from its period, and enable it
    pub fn reset_delay(&mut self, pid: Pid) -> Result<()> {
        let item = self.item_mut(pid)?;
        let period = item.period();
        item.delay(period);
        Ok(())
    }

    /// Call once per tick to count every enabled schedule down
    ///
    /// Schedules that are already due are left alone until they have been
    /// dispatched, so a slow dispatcher makes schedules drift rather than
    /// fire twice.
    pub fn advance(&mut self) {
        for item in self
            .items
            .iter_mut()
            .filter(|item| item.is_enabled() && !item.is_due())
        {
            if item.tick() {
                trace!("{} is due", item.pid());
            }
        }
    }

    /// Call from idle time to run the first due schedule
    ///
    /// Runs at most one work function. Returns the PID of the schedule that
    /// ran, or `None` if nothing was due. Calling this from inside a work
    /// function does nothing.
    pub fn dispatch_due(&mut self) -> Option<Pid> {
        let origin = self.clock.now_micros();
        self.total_dispatch_calls = self.total_dispatch_calls.wrapping_add(1);

        let serviced = if let Some(running) = self.executing {
            warn!("Dispatch called from inside {}", running);
            None
        } else {
            self.run_first_due()
        };

        self.overhead_micros = elapsed_micros(origin, self.clock.now_micros());
        serviced
    }

    /// Run the work function of the first due schedule, if there is one
    fn run_first_due(&mut self) -> Option<Pid> {
        let (pid, callback, profiled) = self
            .items
            .iter()
            .find(|item| item.is_due())
            .map(|item| (item.pid(), item.callback(), item.is_profiled()))?;
        trace!("Dispatching {}", pid);
        let started = profiled.then(|| self.clock.now_micros());
        self.executing = Some(pid);
        callback(self);
        self.executing = None;
        let elapsed = started.map(|start| elapsed_micros(start, self.clock.now_micros()));
        self.retire(pid, elapsed);
        self.productive_dispatch_calls = self.productive_dispatch_calls.wrapping_add(1);
        Some(pid)
    }

    /// Book-keeping once a work function has returned
    fn retire(&mut self, pid: Pid, elapsed: Option<u32>) {
        // Removal of an executing item is deferred, so it must still be here
        let Ok(index) = self.position(pid) else {
            return;
        };
        let item = &mut self.items[index];
        if let Some(elapsed) = elapsed {
            item.sample(elapsed);
        }
        match item.retire() {
            Retirement::Keep => {}
            Retirement::Disable => {
                debug!("{} ran out, disabled", pid);
            }
            Retirement::Reap => {
                self.items.remove(index);
                debug!("{} ran out, reaped", pid);
            }
        }
    }

    /// Attach a fresh profile record to a schedule
    ///
    /// Any record already attached, with its samples, is replaced.
    pub fn begin_profiling(&mut self, pid: Pid) -> Result<()> {
        self.item_mut(pid)?.attach_profile();
        Ok(())
    }

    /// Stop taking samples for a schedule, keeping the ones we have
    pub fn stop_profiling(&mut self, pid: Pid) -> Result<()> {
        self.item_mut(pid)?.stop_profile();
        Ok(())
    }

    /// Throw away the profile record of a schedule
    pub fn clear_profiling(&mut self, pid: Pid) -> Result<()> {
        self.item_mut(pid)?.detach_profile();
        Ok(())
    }

    /// Is this schedule being profiled right now?
    pub fn is_profiled(&self, pid: Pid) -> bool {
        self.schedule(pid).is_some_and(WorkItem::is_profiled)
    }

    /// Get a copy of the profile record of a schedule, active or not
    pub fn profile(&self, pid: Pid) -> Option<ProfileRecord> {
        self.schedule(pid).and_then(|item| item.profile().copied())
    }

    /// How many schedules are in the table
    pub fn total_schedules(&self) -> usize {
        self.items.len()
    }

    /// How many schedules are enabled
    pub fn active_schedules(&self) -> usize {
        self.items.iter().filter(|item| item.is_enabled()).count()
    }

    /// Look up a schedule
    pub fn schedule(&self, pid: Pid) -> Option<&WorkItem<C, N>> {
        self.items.iter().find(|item| item.pid() == pid)
    }

    /// All the schedules, in priority order
    pub fn schedules(&self) -> impl Iterator<Item = &WorkItem<C, N>> {
        self.items.iter()
    }

    /// Is this schedule present and enabled?
    pub fn is_enabled(&self, pid: Pid) -> bool {
        self.schedule(pid).is_some_and(WorkItem::is_enabled)
    }

    /// Is this schedule enabled, with firings left beyond a final one?
    pub fn will_run_again(&self, pid: Pid) -> bool {
        self.schedule(pid).is_some_and(|item| {
            item.is_enabled()
                && matches!(
                    item.recurrence(),
                    Recurrence::Forever | Recurrence::Remaining(2..)
                )
        })
    }

    /// Where a schedule is in its life cycle
    pub fn state(&self, pid: Pid) -> Option<ItemState> {
        if self.executing == Some(pid) {
            return Some(ItemState::Executing);
        }
        self.schedule(pid).map(WorkItem::state)
    }

    /// The schedule whose work function is running right now
    pub fn executing(&self) -> Option<Pid> {
        self.executing
    }

    /// The raw value the PID counter will try next
    pub fn peek_next_pid(&self) -> u32 {
        self.pids.peek()
    }

    /// Number of calls to [`Scheduler::dispatch_due`]
    pub fn total_dispatch_calls(&self) -> u32 {
        self.total_dispatch_calls
    }

    /// Number of calls to [`Scheduler::dispatch_due`] that ran something
    pub fn productive_dispatch_calls(&self) -> u32 {
        self.productive_dispatch_calls
    }

    /// How long the last call to [`Scheduler::dispatch_due`] took
    pub fn overhead_micros(&self) -> u32 {
        self.overhead_micros
    }

    /// A printable table of schedules
    pub fn schedule_table(&self, filter: Filter) -> ScheduleTable<'_, C, N> {
        ScheduleTable::new(self, filter)
    }

    /// A printable table of profile records
    pub fn profile_table(&self, filter: Filter) -> ProfileTable<'_, C, N> {
        ProfileTable::new(self, filter)
    }

    /// Check the parameters shared by create and alter
    fn validate(period: u32, callback: Option<WorkFn<C, N>>) -> Result<WorkFn<C, N>> {
        if period <= 1 {
            warn!("Rejected period {}", period);
            return Err(Error::InvalidPeriod(period));
        }
        callback.ok_or_else(|| {
            warn!("Rejected missing work function");
            Error::NullCallback
        })
    }

    /// Find where a schedule sits in the table
    fn position(&self, pid: Pid) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.pid() == pid)
            .ok_or(Error::NotFound(pid))
    }

    fn item_mut(&mut self, pid: Pid) -> Result<&mut WorkItem<C, N>> {
        let index = self.position(pid)?;
        Ok(&mut self.items[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualClock;
    use core::sync::atomic::{AtomicU32, Ordering};

    type Sched = Scheduler<ManualClock, 4>;

    fn noop(_: &mut Sched) {}

    fn new_sched() -> Sched {
        Scheduler::new(ManualClock::new(0))
    }

    fn ticks(sched: &mut Sched, count: u32) {
        for _ in 0..count {
            sched.advance();
        }
    }

    #[test]
    fn create_rejects_bad_period() {
        let mut sched = new_sched();
        for period in [0, 1] {
            assert_eq!(
                sched.create_schedule(period, Recurrence::Forever, false, Some(noop)),
                Err(Error::InvalidPeriod(period))
            );
        }
        assert_eq!(sched.total_schedules(), 0);
        assert_eq!(sched.peek_next_pid(), 1);
    }

    #[test]
    fn create_rejects_missing_callback() {
        let mut sched = new_sched();
        assert_eq!(
            sched.create_schedule(10, Recurrence::Forever, false, None),
            Err(Error::NullCallback)
        );
        assert_eq!(sched.total_schedules(), 0);
    }

    #[test]
    fn create_fails_when_full() {
        let mut sched = new_sched();
        for _ in 0..4 {
            sched
                .create_schedule(2, Recurrence::Forever, false, Some(noop))
                .unwrap();
        }
        assert_eq!(
            sched.create_schedule(2, Recurrence::Forever, false, Some(noop)),
            Err(Error::AllocationFailure)
        );
        assert_eq!(sched.total_schedules(), 4);
        assert_eq!(sched.peek_next_pid(), 5);
    }

    #[test]
    fn new_schedule_is_enabled_and_armed() {
        let mut sched = new_sched();
        let pid = sched
            .create_schedule(7, Recurrence::ONCE, true, Some(noop))
            .unwrap();
        let item = sched.schedule(pid).unwrap();
        assert!(item.is_enabled());
        assert!(!item.is_due());
        assert_eq!(item.time_to_wait(), 7);
        assert_eq!(sched.state(pid), Some(ItemState::Waiting));
    }

    #[test]
    fn pids_skip_live_values_after_wrap() {
        let mut sched = new_sched();
        let first = sched
            .create_schedule(2, Recurrence::Forever, false, Some(noop))
            .unwrap();
        sched.pids = PidAllocator::starting_at(u32::MAX);
        let high = sched
            .create_schedule(2, Recurrence::Forever, false, Some(noop))
            .unwrap();
        let wrapped = sched
            .create_schedule(2, Recurrence::Forever, false, Some(noop))
            .unwrap();
        assert_eq!(first.get(), 1);
        assert_eq!(high.get(), u32::MAX);
        assert_eq!(wrapped.get(), 2);
    }

    #[test]
    fn remove_unknown_pid() {
        let mut sched = new_sched();
        let pid = Pid::new(3).unwrap();
        assert_eq!(sched.remove_schedule(pid), Err(Error::NotFound(pid)));
    }

    #[test]
    fn remove_keeps_order() {
        let mut sched = new_sched();
        let a = sched
            .create_schedule(2, Recurrence::Forever, false, Some(noop))
            .unwrap();
        let b = sched
            .create_schedule(2, Recurrence::Forever, false, Some(noop))
            .unwrap();
        let c = sched
            .create_schedule(2, Recurrence::Forever, false, Some(noop))
            .unwrap();
        sched.remove_schedule(b).unwrap();
        let order: heapless::Vec<Pid, 4> = sched.schedules().map(WorkItem::pid).collect();
        assert_eq!(order.as_slice(), &[a, c]);
    }

    #[test]
    fn alter_resets_countdown_and_keeps_enabled_flag() {
        let mut sched = new_sched();
        let pid = sched
            .create_schedule(5, Recurrence::Forever, false, Some(noop))
            .unwrap();
        ticks(&mut sched, 5);
        assert_eq!(sched.state(pid), Some(ItemState::Due));
        sched
            .alter_schedule(pid, 8, Recurrence::Remaining(2), true, Some(noop))
            .unwrap();
        let item = sched.schedule(pid).unwrap();
        assert!(!item.is_due());
        assert!(item.is_enabled());
        assert_eq!(item.time_to_wait(), 8);
        assert_eq!(item.period(), 8);
        assert_eq!(item.recurrence(), Recurrence::Remaining(2));
        assert!(item.auto_reap());
    }

    #[test]
    fn failed_alter_changes_nothing() {
        let mut sched = new_sched();
        let pid = sched
            .create_schedule(5, Recurrence::Forever, false, Some(noop))
            .unwrap();
        ticks(&mut sched, 2);
        assert_eq!(
            sched.alter_schedule(pid, 1, Recurrence::ONCE, true, Some(noop)),
            Err(Error::InvalidPeriod(1))
        );
        assert_eq!(
            sched.alter_schedule(pid, 9, Recurrence::ONCE, true, None),
            Err(Error::NullCallback)
        );
        assert_eq!(sched.alter_period(pid, 0), Err(Error::InvalidPeriod(0)));
        assert_eq!(sched.alter_callback(pid, None), Err(Error::NullCallback));
        let item = sched.schedule(pid).unwrap();
        assert_eq!(item.period(), 5);
        assert_eq!(item.time_to_wait(), 3);
        assert_eq!(item.recurrence(), Recurrence::Forever);
        assert!(!item.auto_reap());
    }

    #[test]
    fn field_alterations() {
        let mut sched = new_sched();
        let pid = sched
            .create_schedule(5, Recurrence::Forever, false, Some(noop))
            .unwrap();
        ticks(&mut sched, 5);
        sched.alter_recurrence(pid, Recurrence::Remaining(4)).unwrap();
        assert!(!sched.schedule(pid).unwrap().is_due());
        sched.alter_period(pid, 3).unwrap();
        assert_eq!(sched.schedule(pid).unwrap().time_to_wait(), 3);
        sched.alter_auto_reap(pid, true).unwrap();
        assert!(sched.schedule(pid).unwrap().auto_reap());
        sched.alter_callback(pid, Some(noop)).unwrap();
    }

    #[test]
    fn enable_keeps_countdown() {
        let mut sched = new_sched();
        let pid = sched
            .create_schedule(5, Recurrence::Forever, false, Some(noop))
            .unwrap();
        sched.delay(pid, 2).unwrap();
        sched.enable(pid).unwrap();
        assert_eq!(sched.schedule(pid).unwrap().time_to_wait(), 2);
    }

    #[test]
    fn delay_enables_and_overrides_once() {
        let mut sched = new_sched();
        let pid = sched
            .create_schedule(5, Recurrence::Forever, false, Some(noop))
            .unwrap();
        sched.disable(pid).unwrap();
        sched.delay(pid, 2).unwrap();
        assert!(sched.is_enabled(pid));
        ticks(&mut sched, 2);
        assert_eq!(sched.dispatch_due(), Some(pid));
        // back on the normal period
        ticks(&mut sched, 4);
        assert_eq!(sched.dispatch_due(), None);
        ticks(&mut sched, 1);
        assert_eq!(sched.dispatch_due(), Some(pid));
    }

    #[test]
    fn reset_delay_uses_period() {
        let mut sched = new_sched();
        let pid = sched
            .create_schedule(6, Recurrence::Forever, false, Some(noop))
            .unwrap();
        ticks(&mut sched, 4);
        sched.disable(pid).unwrap();
        sched.reset_delay(pid).unwrap();
        let item = sched.schedule(pid).unwrap();
        assert!(item.is_enabled());
        assert_eq!(item.time_to_wait(), 6);
    }

    #[test]
    fn disabled_items_do_not_count_down() {
        let mut sched = new_sched();
        let pid = sched
            .create_schedule(3, Recurrence::Forever, false, Some(noop))
            .unwrap();
        sched.disable(pid).unwrap();
        ticks(&mut sched, 10);
        assert_eq!(sched.schedule(pid).unwrap().time_to_wait(), 3);
        assert_eq!(sched.dispatch_due(), None);
    }

    #[test]
    fn dispatch_counters() {
        let mut sched = new_sched();
        sched
            .create_schedule(2, Recurrence::Forever, false, Some(noop))
            .unwrap();
        assert_eq!(sched.dispatch_due(), None);
        ticks(&mut sched, 2);
        assert!(sched.dispatch_due().is_some());
        assert_eq!(sched.total_dispatch_calls(), 2);
        assert_eq!(sched.productive_dispatch_calls(), 1);
    }

    fn slow(sched: &mut Sched) {
        sched.clock().advance(250);
    }

    #[test]
    fn overhead_covers_the_work_function() {
        let mut sched = new_sched();
        sched
            .create_schedule(2, Recurrence::Forever, false, Some(slow))
            .unwrap();
        ticks(&mut sched, 2);
        assert!(sched.dispatch_due().is_some());
        assert_eq!(sched.overhead_micros(), 250);
        sched.dispatch_due();
        assert_eq!(sched.overhead_micros(), 0);
    }

    static NESTED: AtomicU32 = AtomicU32::new(0);

    fn nested(sched: &mut Sched) {
        NESTED.fetch_add(1, Ordering::Relaxed);
        assert_eq!(sched.state(sched.executing().unwrap()), Some(ItemState::Executing));
        assert_eq!(sched.dispatch_due(), None);
    }

    #[test]
    fn dispatch_does_not_nest() {
        let mut sched = new_sched();
        sched
            .create_schedule(2, Recurrence::Forever, false, Some(nested))
            .unwrap();
        sched
            .create_schedule(2, Recurrence::Forever, false, Some(noop))
            .unwrap();
        ticks(&mut sched, 2);
        sched.dispatch_due();
        assert_eq!(NESTED.load(Ordering::Relaxed), 1);
        assert_eq!(sched.productive_dispatch_calls(), 1);
        assert_eq!(sched.executing(), None);
    }

    fn clear_all(sched: &mut Sched) {
        sched.clear();
    }

    #[test]
    fn clear_from_inside_keeps_the_runner_until_it_returns() {
        let mut sched = new_sched();
        let runner = sched
            .create_schedule(2, Recurrence::Forever, false, Some(clear_all))
            .unwrap();
        sched
            .create_schedule(3, Recurrence::Forever, false, Some(noop))
            .unwrap();
        ticks(&mut sched, 2);
        assert_eq!(sched.dispatch_due(), Some(runner));
        assert_eq!(sched.total_schedules(), 0);
    }

    #[test]
    fn will_run_again() {
        let mut sched = new_sched();
        let forever = sched
            .create_schedule(2, Recurrence::Forever, false, Some(noop))
            .unwrap();
        let last = sched
            .create_schedule(2, Recurrence::ONCE, false, Some(noop))
            .unwrap();
        let some = sched
            .create_schedule(2, Recurrence::Remaining(3), false, Some(noop))
            .unwrap();
        assert!(sched.will_run_again(forever));
        assert!(!sched.will_run_again(last));
        assert!(sched.will_run_again(some));
        let one = sched
            .create_schedule(2, Recurrence::Remaining(1), false, Some(noop))
            .unwrap();
        let two = sched
            .create_schedule(2, Recurrence::Remaining(2), false, Some(noop))
            .unwrap();
        assert!(!sched.will_run_again(one));
        assert!(sched.will_run_again(two));
        sched.disable(some).unwrap();
        assert!(!sched.will_run_again(some));
        assert!(!sched.will_run_again(Pid::new(99).unwrap()));
    }

    #[test]
    fn profiling_lifecycle() {
        let mut sched = new_sched();
        let pid = sched
            .create_schedule(2, Recurrence::Forever, false, Some(slow))
            .unwrap();
        assert!(!sched.is_profiled(pid));
        sched.begin_profiling(pid).unwrap();
        assert!(sched.is_profiled(pid));
        ticks(&mut sched, 2);
        sched.dispatch_due();
        sched.stop_profiling(pid).unwrap();
        assert!(!sched.is_profiled(pid));
        ticks(&mut sched, 2);
        sched.dispatch_due();
        let profile = sched.profile(pid).unwrap();
        assert_eq!(profile.execution_count(), 1);
        assert_eq!(profile.last_micros(), 250);
        sched.clear_profiling(pid).unwrap();
        assert_eq!(sched.profile(pid), None);
        sched.begin_profiling(pid).unwrap();
        assert_eq!(sched.profile(pid), Some(ProfileRecord::new()));
    }

    #[test]
    fn profiling_unknown_pid() {
        let mut sched = new_sched();
        let pid = Pid::new(8).unwrap();
        assert_eq!(sched.begin_profiling(pid), Err(Error::NotFound(pid)));
        assert_eq!(sched.stop_profiling(pid), Err(Error::NotFound(pid)));
        assert_eq!(sched.clear_profiling(pid), Err(Error::NotFound(pid)));
        assert!(!sched.is_profiled(pid));
    }
}

// End of File
