// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Script-to-Latin transliteration used as the first slug pipeline stage.
//!
//! The slug pipeline does not second-guess the transliterator: whatever it
//! returns is lowercased and filtered by the later stages. Characters the
//! transliterator cannot map simply disappear during filtering.

use std::borrow::Cow;

/// Best-effort mapping from arbitrary script text to a Latin approximation.
///
/// Implementations must be deterministic for a given version. Any
/// `Fn(&str) -> String` closure implements the trait, which keeps test
/// doubles short.
pub trait Transliterator
{
    /// Returns the Latin approximation of `text`.
    fn transliterate<'text,>(&self, text: &'text str,) -> Cow<'text, str,>;
}

/// Transliterator backed by the `deunicode` tables.
///
/// ```
/// use slugline::{Deunicode, Transliterator};
///
/// assert_eq!(Deunicode.transliterate("Café Olé",), "Cafe Ole");
/// ```
#[derive(Debug, Clone, Copy, Default,)]
pub struct Deunicode;

impl Transliterator for Deunicode
{
    fn transliterate<'text,>(&self, text: &'text str,) -> Cow<'text, str,>
    {
        if text.is_ascii() {
            return Cow::Borrowed(text,);
        }
        Cow::Owned(deunicode::deunicode(text,),)
    }
}

impl<F,> Transliterator for F
where
    F: Fn(&str,) -> String,
{
    fn transliterate<'text,>(&self, text: &'text str,) -> Cow<'text, str,>
    {
        Cow::Owned(self(text,),)
    }
}
