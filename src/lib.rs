//! Free-form text to URL-safe slug conversion with an editable session model.
//!
//! The library exposes the slug pipeline ([`slugify`], [`SlugStrategy`]), the
//! editable session ([`SessionState::apply`] as a pure transition function and
//! [`Session`] as its clock-driven runtime), an async [`SessionDriver`] for
//! interactive front ends, and the ambient pieces the `slugline` binary is
//! built from: configuration, batch conversion, the example gallery and the
//! terminal presentation.

mod batch;
mod clipboard;
mod command;
mod config;
mod driver;
mod error;
mod render;
mod samples;
mod schedule;
mod session;
mod slug;
mod transliterate;

pub use batch::{SlugRecord, slugify_file, slugify_lines};
#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
pub use clipboard::{Clipboard, MemoryClipboard};
pub use command::{HELP, SessionCommand, parse_command};
pub use config::{
    DEFAULT_COPY_FEEDBACK_MS, DEFAULT_EMPTY_INPUT_MESSAGE, DEFAULT_RESET_FADE_MS, SessionConfig,
    load_config, parse_config,
};
pub use driver::{SessionDriver, SessionHandle, channel};
pub use error::{Error, io_error};
pub use render::{RenderMode, render_text, write_state};
pub use samples::{SAMPLE_PHRASES, Sample, samples};
pub use schedule::{Deferred, TimerHandle, Timers};
pub use session::{
    Effect, Session, SessionRules, SessionState, Trigger, submit_text, transition,
};
pub use slug::{SlugStrategy, slugify};
pub use transliterate::{Deunicode, Transliterator};
