// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Built-in gallery of example phrases shown next to the converter.

use serde::Serialize;

use crate::slug::slugify;

/// Phrases covering punctuation, diacritics, repeated whitespace and
/// non-Latin scripts.
pub const SAMPLE_PHRASES: &[&str] = &[
    "Xin chào!",
    "Hello World!",
    "This & That",
    "Café Olé",
    "Multiple   Spaces",
    "こんにちは",
    "안녕하세요",
];

/// One gallery row with its live conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Sample
{
    /// Phrase as typed.
    pub input:      String,
    /// Slug derived from [`input`](Self::input).
    pub slug:       String,
    /// Number of characters in [`slug`](Self::slug).
    pub char_count: usize,
}

/// Converts every gallery phrase.
///
/// ```
/// let samples = slugline::samples();
/// assert_eq!(samples[1].slug, "hello-world");
/// assert_eq!(samples[1].char_count, 11);
/// ```
pub fn samples() -> Vec<Sample,>
{
    SAMPLE_PHRASES
        .iter()
        .map(|phrase| {
            let slug = slugify(phrase,);
            Sample {
                input: (*phrase).to_owned(),
                char_count: slug.chars().count(),
                slug,
            }
        },)
        .collect()
}
