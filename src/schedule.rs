// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Deferred transitions owned by a session.
//!
//! Deadlines are offsets on the session's logical clock. At most one entry
//! per [`Deferred`] kind is pending: scheduling a kind again replaces the
//! earlier entry, so a revert queued by an older copy can never fire after a
//! newer copy re-armed it.

use std::time::Duration;

use serde::Serialize;

/// Transitions that complete after a delay instead of immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize,)]
#[serde(rename_all = "snake_case")]
pub enum Deferred
{
    /// Turns the copied indicator off again.
    ClearCopied,
    /// Clears every field once the reset animation finished.
    CompleteReset,
}

/// Handle identifying one scheduled entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,)]
pub struct TimerHandle(u64,);

#[derive(Debug, Clone,)]
struct Pending
{
    handle:   TimerHandle,
    task:     Deferred,
    deadline: Duration,
}

/// Pending deferred transitions ordered by deadline.
#[derive(Debug, Clone, Default,)]
pub struct Timers
{
    pending:     Vec<Pending,>,
    next_handle: u64,
}

impl Timers
{
    /// Creates an empty timer set.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Schedules `task` at `deadline`, replacing any pending entry of the same
    /// kind.
    pub fn schedule(&mut self, task: Deferred, deadline: Duration,) -> TimerHandle
    {
        self.pending.retain(|entry| entry.task != task,);

        let handle = TimerHandle(self.next_handle,);
        self.next_handle += 1;
        self.pending.push(Pending {
            handle,
            task,
            deadline,
        },);
        handle
    }

    /// Cancels the entry behind `handle`. Returns `false` when it already
    /// fired or was replaced.
    pub fn cancel(&mut self, handle: TimerHandle,) -> bool
    {
        let before = self.pending.len();
        self.pending.retain(|entry| entry.handle != handle,);
        self.pending.len() != before
    }

    /// Drops every pending entry and reports how many were cancelled.
    pub fn cancel_all(&mut self,) -> usize
    {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self,) -> Option<Duration,>
    {
        self.pending.iter().map(|entry| entry.deadline,).min()
    }

    /// Removes and returns the earliest entry due at `now`.
    ///
    /// Entries sharing a deadline come out in scheduling order.
    pub fn pop_due(&mut self, now: Duration,) -> Option<(Deferred, Duration,),>
    {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, entry,)| entry.deadline <= now,)
            .min_by_key(|(_, entry,)| (entry.deadline, entry.handle.0,),)
            .map(|(index, _,)| index,)?;

        let entry = self.pending.remove(index,);
        Some((entry.task, entry.deadline,),)
    }

    /// Whether `task` is waiting to fire.
    pub fn is_pending(&self, task: Deferred,) -> bool
    {
        self.pending.iter().any(|entry| entry.task == task,)
    }
}

#[cfg(test)]
mod tests
{
    use std::time::Duration;

    use super::{Deferred, Timers};

    fn ms(value: u64,) -> Duration
    {
        Duration::from_millis(value,)
    }

    #[test]
    fn nothing_is_due_before_deadline()
    {
        let mut timers = Timers::new();
        timers.schedule(Deferred::ClearCopied, ms(2000,),);

        assert!(timers.pop_due(ms(1999,),).is_none());
        assert_eq!(timers.pop_due(ms(2000,),), Some((Deferred::ClearCopied, ms(2000,),)));
        assert!(timers.next_deadline().is_none());
    }

    #[test]
    fn rescheduling_same_kind_replaces_entry()
    {
        let mut timers = Timers::new();
        let first = timers.schedule(Deferred::ClearCopied, ms(2000,),);
        timers.schedule(Deferred::ClearCopied, ms(3500,),);

        assert!(timers.is_pending(Deferred::ClearCopied));
        assert!(!timers.cancel(first,));
        assert!(timers.pop_due(ms(2000,),).is_none());
        assert_eq!(timers.next_deadline(), Some(ms(3500,)));
    }

    #[test]
    fn due_entries_fire_in_deadline_order()
    {
        let mut timers = Timers::new();
        timers.schedule(Deferred::ClearCopied, ms(2000,),);
        timers.schedule(Deferred::CompleteReset, ms(300,),);

        assert_eq!(timers.next_deadline(), Some(ms(300,)));
        let fired: Vec<_,> =
            std::iter::from_fn(|| timers.pop_due(ms(5000,),),).map(|(task, _,)| task,).collect();
        assert_eq!(fired, vec![Deferred::CompleteReset, Deferred::ClearCopied]);
    }

    #[test]
    fn cancel_removes_single_entry()
    {
        let mut timers = Timers::new();
        let handle = timers.schedule(Deferred::CompleteReset, ms(300,),);
        timers.schedule(Deferred::ClearCopied, ms(2000,),);

        assert!(timers.cancel(handle,));
        assert!(!timers.is_pending(Deferred::CompleteReset));
        assert!(timers.is_pending(Deferred::ClearCopied));
    }

    #[test]
    fn cancel_all_reports_count()
    {
        let mut timers = Timers::new();
        timers.schedule(Deferred::CompleteReset, ms(300,),);
        timers.schedule(Deferred::ClearCopied, ms(2000,),);

        assert_eq!(timers.cancel_all(), 2);
        assert_eq!(timers.next_deadline(), None);
    }
}
