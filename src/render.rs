// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Plain-text and JSON views of a session state.

use std::io;

use crate::{error::Error, session::SessionState};

/// Output flavour used by the terminal presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default,)]
pub enum RenderMode
{
    /// Human-readable panel.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Writes `state` in the requested mode, followed by a newline.
///
/// # Errors
///
/// Returns [`Error::Serialize`] when JSON encoding fails and
/// [`Error::Write`] when the writer rejects the output.
pub fn write_state<W: io::Write,>(
    writer: &mut W,
    state: &SessionState,
    mode: RenderMode,
) -> Result<(), Error,>
{
    match mode {
        RenderMode::Json => {
            serde_json::to_writer(&mut *writer, state,)?;
            writeln!(writer)?;
        }
        RenderMode::Text => writer.write_all(render_text(state,).as_bytes(),)?,
    }
    writer.flush()?;
    Ok((),)
}

/// Renders the human-readable panel.
///
/// ```
/// use slugline::{SessionState, render_text};
///
/// let state = SessionState {
///     slug: "hello-world".to_owned(), char_count: 11, ..SessionState::default()
/// };
/// assert!(render_text(&state,).contains("hello-world (11 chars)"));
/// ```
pub fn render_text(state: &SessionState,) -> String
{
    let mut output = format!("input: {:?}\n", state.raw_input);

    if let Some(message,) = state.error.as_deref() {
        output.push_str(&format!("error: {message}\n"),);
    }

    if state.result_visible() {
        let marker = if state.copied { " [copied]" } else { "" };
        let fading = if state.fading { " (clearing)" } else { "" };
        output.push_str(&format!(
            "result: {} ({} chars){}{}\n",
            state.slug, state.char_count, marker, fading
        ),);
    }

    if state.reset_pending {
        output.push_str("clear everything? type 'confirm' or 'cancel'\n",);
    }

    output
}
