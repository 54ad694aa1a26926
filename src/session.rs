// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Editable slug session.
//!
//! [`SessionState::apply`] is the pure transition function: it consumes one
//! [`Trigger`], mutates the state, and returns the [`Effect`]s the caller must
//! perform. [`Session`] is the runtime around it: it owns the clipboard and
//! the deferred transitions, and advances a logical clock so the whole thing
//! can be exercised without a UI or an async runtime.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    clipboard::Clipboard,
    config::SessionConfig,
    error::Error,
    schedule::{Deferred, TimerHandle, Timers},
    slug::slugify,
};

/// Interactive state handed to the presentation layer after every transition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize,)]
pub struct SessionState
{
    /// Text typed by the user.
    pub raw_input:     String,
    /// Derived or hand-edited slug. Empty until the first valid submission.
    pub slug:          String,
    /// Number of characters in [`slug`](Self::slug).
    pub char_count:    usize,
    /// Validation message from the last submission.
    pub error:         Option<String,>,
    /// Set after a successful copy until the feedback delay elapses.
    pub copied:        bool,
    /// Set while the reset confirmation prompt is shown.
    pub reset_pending: bool,
    /// Set between a confirmed reset and the deferred clear.
    pub fading:        bool,
}

/// User actions and runtime notifications accepted by a session.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub enum Trigger
{
    /// Replaces the raw input (one keystroke).
    Input(String,),
    /// Slugifies the raw input.
    Submit,
    /// Overwrites the slug verbatim.
    EditResult(String,),
    /// Requests a clipboard copy of the current slug.
    Copy,
    /// Reported by the runtime after the clipboard accepted the slug.
    /// Ignored while the slug is empty.
    CopySucceeded,
    /// Shows the reset confirmation prompt.
    RequestReset,
    /// Dismisses the reset confirmation prompt.
    CancelReset,
    /// Confirms the reset and starts the exit animation.
    ConfirmReset,
    /// Reported by the runtime when a deferred transition is due. A
    /// [`Deferred::CompleteReset`] only clears a session that is fading.
    Elapsed(Deferred,),
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub enum Effect
{
    /// Hand the text to the clipboard collaborator.
    WriteClipboard(String,),
    /// Fire [`Trigger::Elapsed`] with `task` after `delay`.
    Schedule
    {
        /// Deferred transition to run.
        task:  Deferred,
        /// Delay relative to the current clock.
        delay: Duration,
    },
}

/// Parameters of the transition function.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct SessionRules
{
    /// Message stored on an empty submission.
    pub empty_input_message: String,
    /// Delay before the copied flag reverts.
    pub copy_feedback:       Duration,
    /// Delay before a confirmed reset clears the state.
    pub reset_fade:          Duration,
}

impl Default for SessionRules
{
    fn default() -> Self
    {
        Self::from(&SessionConfig::default(),)
    }
}

impl From<&SessionConfig,> for SessionRules
{
    fn from(config: &SessionConfig,) -> Self
    {
        Self {
            empty_input_message: config.empty_input_message.clone(),
            copy_feedback:       config.copy_feedback(),
            reset_fade:          config.reset_fade(),
        }
    }
}

/// Validates a submission and derives its slug.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] carrying `message` when `input` is empty or
/// only whitespace, or when nothing slug-worthy survives normalization.
///
/// # Examples
///
/// ```
/// use slugline::{Error, submit_text};
///
/// assert_eq!(submit_text("Hello World!", "empty",).expect("valid",), "hello-world");
/// assert!(matches!(submit_text("   ", "empty",), Err(Error::EmptyInput { .. })));
/// assert!(matches!(submit_text("!!!", "empty",), Err(Error::EmptyInput { .. })));
/// ```
pub fn submit_text(input: &str, message: &str,) -> Result<String, Error,>
{
    if input.trim().is_empty() {
        return Err(Error::empty_input(message,),);
    }

    let slug = slugify(input,);
    if slug.is_empty() {
        return Err(Error::empty_input(message,),);
    }
    Ok(slug,)
}

impl SessionState
{
    /// Whether the result panel should be shown.
    pub fn result_visible(&self,) -> bool
    {
        !self.slug.is_empty() && self.error.is_none()
    }

    /// Whether the reset control is enabled.
    pub fn can_request_reset(&self,) -> bool
    {
        !self.raw_input.is_empty()
    }

    /// Applies `trigger` and returns the effects the runtime must perform.
    ///
    /// Triggers whose precondition does not hold leave the state untouched
    /// and return no effects.
    ///
    /// # Examples
    ///
    /// ```
    /// use slugline::{SessionRules, SessionState, Trigger};
    ///
    /// let rules = SessionRules::default();
    /// let mut state = SessionState::default();
    /// state.apply(Trigger::Input("Café Olé".to_owned(),), &rules,);
    /// state.apply(Trigger::Submit, &rules,);
    /// assert_eq!(state.slug, "cafe-ole");
    /// assert_eq!(state.char_count, 8);
    /// ```
    pub fn apply(&mut self, trigger: Trigger, rules: &SessionRules,) -> Vec<Effect,>
    {
        match trigger {
            Trigger::Input(text,) => {
                self.raw_input = text;
                Vec::new()
            }
            Trigger::Submit => {
                self.submit(rules,);
                Vec::new()
            }
            Trigger::EditResult(text,) => {
                self.set_slug(text,);
                self.copied = false;
                Vec::new()
            }
            Trigger::Copy if !self.slug.is_empty() => {
                vec![Effect::WriteClipboard(self.slug.clone(),)]
            }
            Trigger::CopySucceeded if !self.slug.is_empty() => {
                self.copied = true;
                vec![Effect::Schedule {
                    task: Deferred::ClearCopied, delay: rules.copy_feedback,
                }]
            }
            Trigger::RequestReset if self.can_request_reset() => {
                self.reset_pending = true;
                Vec::new()
            }
            Trigger::CancelReset if self.reset_pending => {
                self.reset_pending = false;
                Vec::new()
            }
            Trigger::ConfirmReset if self.reset_pending => {
                self.reset_pending = false;
                self.fading = true;
                vec![Effect::Schedule {
                    task: Deferred::CompleteReset, delay: rules.reset_fade,
                }]
            }
            Trigger::Elapsed(Deferred::ClearCopied,) => {
                self.copied = false;
                Vec::new()
            }
            Trigger::Elapsed(Deferred::CompleteReset,) if self.fading => {
                self.clear();
                Vec::new()
            }
            Trigger::Copy
            | Trigger::CopySucceeded
            | Trigger::Elapsed(Deferred::CompleteReset,)
            | Trigger::RequestReset
            | Trigger::CancelReset
            | Trigger::ConfirmReset => Vec::new(),
        }
    }

    fn submit(&mut self, rules: &SessionRules,)
    {
        match submit_text(&self.raw_input, &rules.empty_input_message,) {
            Ok(slug,) => {
                debug!("Submission produced slug {:?}", slug);
                self.error = None;
                self.set_slug(slug,);
                self.copied = false;
            }
            Err(error,) => {
                debug!("Rejected submission without slug characters");
                self.error = Some(error.to_display_string(),);
                self.set_slug(String::new(),);
            }
        }
    }

    fn set_slug(&mut self, slug: String,)
    {
        self.char_count = slug.chars().count();
        self.slug = slug;
    }

    fn clear(&mut self,)
    {
        self.raw_input.clear();
        self.slug.clear();
        self.char_count = 0;
        self.error = None;
        self.copied = false;
        self.reset_pending = false;
        self.fading = false;
    }
}

/// Pure form of [`SessionState::apply`].
pub fn transition(
    mut state: SessionState,
    trigger: Trigger,
    rules: &SessionRules,
) -> (SessionState, Vec<Effect,>,)
{
    let effects = state.apply(trigger, rules,);
    (state, effects,)
}

/// Session runtime that performs effects against a logical clock.
///
/// Dropping the session (or calling [`close`](Self::close)) cancels every
/// pending deferred transition.
#[derive(Debug,)]
pub struct Session<C,>
where
    C: Clipboard,
{
    state:       SessionState,
    rules:       SessionRules,
    clipboard:   C,
    timers:      Timers,
    copy_revert: Option<TimerHandle,>,
    now:         Duration,
}

impl<C,> Session<C,>
where
    C: Clipboard,
{
    /// Creates a session with empty state at clock zero.
    pub fn new(rules: SessionRules, clipboard: C,) -> Self
    {
        Self {
            state: SessionState::default(),
            rules,
            clipboard,
            timers: Timers::new(),
            copy_revert: None,
            now: Duration::ZERO,
        }
    }

    /// Current state.
    pub fn state(&self,) -> &SessionState
    {
        &self.state
    }

    /// Clipboard collaborator.
    pub fn clipboard(&self,) -> &C
    {
        &self.clipboard
    }

    /// Current position of the logical clock.
    pub fn now(&self,) -> Duration
    {
        self.now
    }

    /// Deadline of the next deferred transition, if any.
    pub fn next_deadline(&self,) -> Option<Duration,>
    {
        self.timers.next_deadline()
    }

    /// Whether `task` is waiting to fire.
    pub fn is_scheduled(&self, task: Deferred,) -> bool
    {
        self.timers.is_pending(task,)
    }

    /// Applies a trigger and performs the effects it requests.
    pub fn dispatch(&mut self, trigger: Trigger,) -> &SessionState
    {
        let mut queue = vec![trigger];
        while let Some(next,) = queue.pop() {
            for effect in self.state.apply(next, &self.rules,) {
                if let Some(follow_up,) = self.perform(effect,) {
                    queue.push(follow_up,);
                }
            }
        }
        &self.state
    }

    /// Moves the clock forward by `elapsed`, firing due transitions.
    pub fn advance(&mut self, elapsed: Duration,) -> &SessionState
    {
        let target = self.now.saturating_add(elapsed,);
        self.advance_to(target,)
    }

    /// Moves the clock to `now`, firing due transitions in deadline order.
    ///
    /// The clock never runs backwards; earlier instants are ignored.
    pub fn advance_to(&mut self, now: Duration,) -> &SessionState
    {
        while let Some((task, deadline,),) = self.timers.pop_due(now,) {
            self.now = self.now.max(deadline,);
            match task {
                Deferred::ClearCopied => self.copy_revert = None,
                Deferred::CompleteReset => {
                    info!("Reset animation finished, clearing session");
                    if let Some(handle,) = self.copy_revert.take() {
                        self.timers.cancel(handle,);
                    }
                }
            }
            self.dispatch(Trigger::Elapsed(task,),);
        }
        self.now = self.now.max(now,);
        &self.state
    }

    /// Cancels pending deferred transitions and returns the final state.
    pub fn close(mut self,) -> SessionState
    {
        self.cancel_pending();
        std::mem::take(&mut self.state,)
    }

    fn cancel_pending(&mut self,)
    {
        self.copy_revert = None;
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            debug!("Cancelled {} pending deferred transitions", cancelled);
        }
    }

    fn perform(&mut self, effect: Effect,) -> Option<Trigger,>
    {
        match effect {
            Effect::WriteClipboard(text,) => match self.clipboard.copy(&text,) {
                Ok((),) => Some(Trigger::CopySucceeded,),
                Err(error,) => {
                    debug!("Copy failed silently: {}", error);
                    None
                }
            },
            Effect::Schedule {
                task,
                delay,
            } => {
                if task == Deferred::CompleteReset {
                    info!("Reset confirmed, clearing in {}ms", delay.as_millis());
                }
                let handle = self.timers.schedule(task, self.now.saturating_add(delay,),);
                if task == Deferred::ClearCopied {
                    self.copy_revert = Some(handle,);
                }
                None
            }
        }
    }
}

impl<C,> Drop for Session<C,>
where
    C: Clipboard,
{
    fn drop(&mut self,)
    {
        self.cancel_pending();
    }
}
