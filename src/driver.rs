// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Async event loop that runs a [`Session`] on wall-clock time.
//!
//! Triggers arrive over an mpsc channel and are applied one at a time.
//! Deferred transitions fire when the tokio clock reaches their deadline.
//! Every resulting state is published on a watch channel. Once every
//! [`SessionHandle`] is dropped the loop returns and the session is closed,
//! which cancels whatever was still pending.

use std::future;

use tokio::{
    sync::{mpsc, watch},
    time::{Instant, sleep_until},
};
use tracing::debug;

use crate::{
    clipboard::Clipboard,
    error::Error,
    session::{Session, SessionState, Trigger},
};

const TRIGGER_BUFFER: usize = 64;

/// Sending side used by the presentation layer.
#[derive(Debug, Clone,)]
pub struct SessionHandle
{
    triggers: mpsc::Sender<Trigger,>,
    states:   watch::Receiver<SessionState,>,
}

impl SessionHandle
{
    /// Queues `trigger` for the session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Closed`] when the driver has stopped.
    pub async fn send(&self, trigger: Trigger,) -> Result<(), Error,>
    {
        self.triggers.send(trigger,).await.map_err(|_| Error::Closed,)
    }

    /// Latest published state.
    pub fn current(&self,) -> SessionState
    {
        self.states.borrow().clone()
    }

    /// Receiver notified on every published state.
    pub fn subscribe(&self,) -> watch::Receiver<SessionState,>
    {
        self.states.clone()
    }
}

/// Event loop owning the session.
#[derive(Debug,)]
pub struct SessionDriver<C,>
where
    C: Clipboard,
{
    session:  Session<C,>,
    triggers: mpsc::Receiver<Trigger,>,
    states:   watch::Sender<SessionState,>,
    started:  Instant,
}

/// Wires a driver to a handle.
///
/// The driver does nothing until [`SessionDriver::run`] is awaited. It is
/// not spawned here, so clipboards that are not `Send` still work when the
/// driver runs on the current task.
pub fn channel<C,>(session: Session<C,>,) -> (SessionDriver<C,>, SessionHandle,)
where
    C: Clipboard,
{
    let (trigger_tx, trigger_rx,) = mpsc::channel(TRIGGER_BUFFER,);
    let (state_tx, state_rx,) = watch::channel(session.state().clone(),);

    let driver = SessionDriver {
        session,
        triggers: trigger_rx,
        states: state_tx,
        started: Instant::now(),
    };
    let handle = SessionHandle {
        triggers: trigger_tx, states: state_rx,
    };
    (driver, handle,)
}

impl<C,> SessionDriver<C,>
where
    C: Clipboard,
{
    /// Runs until every handle is dropped and returns the final state.
    ///
    /// Pending deferred transitions are cancelled on return.
    pub async fn run(mut self,) -> SessionState
    {
        loop {
            let deadline = self.session.next_deadline().map(|offset| self.started + offset,);

            tokio::select! {
                received = self.triggers.recv() => match received {
                    Some(trigger) => {
                        self.sync_clock();
                        self.session.dispatch(trigger);
                    }
                    None => break,
                },
                () = wait_until(deadline) => self.sync_clock(),
            }

            self.states.send_replace(self.session.state().clone(),);
        }

        debug!("All session handles dropped, shutting down");
        self.session.close()
    }

    fn sync_clock(&mut self,)
    {
        self.session.advance_to(self.started.elapsed(),);
    }
}

async fn wait_until(deadline: Option<Instant,>,)
{
    match deadline {
        Some(deadline,) => sleep_until(deadline,).await,
        None => future::pending().await,
    }
}
