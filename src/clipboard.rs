// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Clipboard collaborators used by the session runtime.
//!
//! A failed copy is reported through [`Error::Clipboard`] and absorbed by the
//! session: the copied flag simply never turns on.

use crate::error::Error;

/// Side-effecting sink that receives slugs on copy.
pub trait Clipboard
{
    /// Stores `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`] when the text could not be stored.
    fn copy(&mut self, text: &str,) -> Result<(), Error,>;
}

impl<C,> Clipboard for &mut C
where
    C: Clipboard + ?Sized,
{
    fn copy(&mut self, text: &str,) -> Result<(), Error,>
    {
        (**self).copy(text,)
    }
}

impl<C,> Clipboard for Box<C,>
where
    C: Clipboard + ?Sized,
{
    fn copy(&mut self, text: &str,) -> Result<(), Error,>
    {
        (**self).copy(text,)
    }
}

/// Process-local clipboard that keeps the most recently copied text.
#[derive(Debug, Clone, Default,)]
pub struct MemoryClipboard
{
    contents: Option<String,>,
}

impl MemoryClipboard
{
    /// Creates an empty clipboard.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Returns the most recently copied text, if any.
    pub fn contents(&self,) -> Option<&str,>
    {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard
{
    fn copy(&mut self, text: &str,) -> Result<(), Error,>
    {
        self.contents = Some(text.to_owned(),);
        Ok((),)
    }
}

/// Clipboard backed by the operating system through `arboard`.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard
{
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard
{
    /// Connects to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`] when no clipboard is reachable, e.g. on a
    /// headless machine.
    pub fn new() -> Result<Self, Error,>
    {
        let inner = arboard::Clipboard::new().map_err(|e| Error::clipboard(e.to_string(),),)?;
        Ok(Self {
            inner,
        },)
    }
}

#[cfg(feature = "clipboard")]
impl std::fmt::Debug for SystemClipboard
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("SystemClipboard",).finish_non_exhaustive()
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard
{
    fn copy(&mut self, text: &str,) -> Result<(), Error,>
    {
        self.inner.set_text(text.to_owned(),).map_err(|e| Error::clipboard(e.to_string(),),)
    }
}

#[cfg(test)]
mod tests
{
    use super::{Clipboard, MemoryClipboard};

    #[test]
    fn memory_clipboard_starts_empty()
    {
        assert!(MemoryClipboard::new().contents().is_none());
    }

    #[test]
    fn memory_clipboard_keeps_latest_copy()
    {
        let mut clipboard = MemoryClipboard::new();
        clipboard.copy("first",).expect("copy failed",);
        clipboard.copy("second",).expect("copy failed",);
        assert_eq!(clipboard.contents(), Some("second"));
    }

    #[test]
    fn boxed_clipboards_forward_calls()
    {
        let mut boxed: Box<dyn Clipboard,> = Box::new(MemoryClipboard::new(),);
        assert!(boxed.copy("boxed",).is_ok());
    }
}
