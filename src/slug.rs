// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for deriving URL-safe slugs from user-supplied strings.
//!
//! Slugs produced by this module contain only lowercase ASCII alphanumeric
//! characters separated by single hyphens. They never start or end with a
//! hyphen, and the pipeline is idempotent: slugifying a slug returns it
//! unchanged.

use crate::transliterate::{Deunicode, Transliterator};

/// Derives a slug from `input` using the default transliterator.
///
/// The function is total: input without any slug-worthy characters yields an
/// empty string, which callers must treat as a failed conversion.
///
/// # Examples
///
/// ```
/// use slugline::slugify;
///
/// assert_eq!(slugify("Xin chào!",), "xin-chao");
/// assert_eq!(slugify("   ",), "");
/// ```
pub fn slugify(input: &str,) -> String
{
    SlugStrategy::builder(input,).build()
}

/// Builder for slug strings with a pluggable transliteration stage.
#[derive(Debug, Clone, Copy,)]
pub struct SlugStrategy<'input, T = Deunicode,>
{
    source:         &'input str,
    transliterator: T,
}

impl<'input,> SlugStrategy<'input,>
{
    /// Creates a new slug builder for the provided string slice.
    ///
    /// The builder retains a borrowed view of the source to avoid allocations
    /// until [`build`](Self::build) is invoked.
    pub fn builder(source: &'input str,) -> Self
    {
        Self {
            source,
            transliterator: Deunicode,
        }
    }
}

impl<'input, T,> SlugStrategy<'input, T,>
where
    T: Transliterator,
{
    /// Replaces the transliteration stage.
    ///
    /// ```
    /// use slugline::SlugStrategy;
    ///
    /// let slug = SlugStrategy::builder("Straße",)
    ///     .with_transliterator(|text: &str| text.replace('ß', "ss"),)
    ///     .build();
    /// assert_eq!(slug, "strasse");
    /// ```
    pub fn with_transliterator<U,>(self, transliterator: U,) -> SlugStrategy<'input, U,>
    where
        U: Transliterator,
    {
        SlugStrategy {
            source: self.source,
            transliterator,
        }
    }

    /// Runs the normalization pipeline.
    ///
    /// Stages, in order: transliterate, ASCII-lowercase, drop everything
    /// outside `a-z`, `0-9`, whitespace and `-`, trim whitespace, turn each
    /// whitespace run into `-`, collapse hyphen runs, trim edge hyphens.
    ///
    /// # Examples
    ///
    /// ```
    /// use slugline::SlugStrategy;
    ///
    /// let slug = SlugStrategy::builder("  Multiple   Spaces ",).build();
    /// assert_eq!(slug, "multiple-spaces");
    /// ```
    pub fn build(&self,) -> String
    {
        let latin = self.transliterator.transliterate(self.source,);
        let filtered = retain_slug_characters(&latin.to_ascii_lowercase(),);
        let hyphenated = hyphenate_whitespace(filtered.trim(),);
        let collapsed = collapse_hyphens(&hyphenated,);
        collapsed.trim_matches('-',).to_owned()
    }
}

fn retain_slug_characters(text: &str,) -> String
{
    text.chars()
        .filter(|candidate| {
            matches!(candidate, 'a'..='z' | '0'..='9' | '-') || candidate.is_whitespace()
        },)
        .collect()
}

fn hyphenate_whitespace(text: &str,) -> String
{
    let mut output = String::with_capacity(text.len(),);
    let mut in_whitespace = false;

    for candidate in text.chars() {
        if candidate.is_whitespace() {
            if !in_whitespace {
                output.push('-',);
                in_whitespace = true;
            }
        } else {
            output.push(candidate,);
            in_whitespace = false;
        }
    }

    output
}

fn collapse_hyphens(text: &str,) -> String
{
    let mut output = String::with_capacity(text.len(),);
    for candidate in text.chars() {
        if candidate == '-' && output.ends_with('-',) {
            continue;
        }
        output.push(candidate,);
    }
    output
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{SlugStrategy, slugify};

    proptest! {
        #[test]
        fn slug_contains_only_allowed_characters(input in any::<String>()) {
            let slug = slugify(&input);
            prop_assert!(slug.chars().all(|ch| matches!(ch, 'a'..='z' | '0'..='9' | '-')));
        }

        #[test]
        fn slug_has_no_edge_or_doubled_hyphens(input in any::<String>()) {
            let slug = slugify(&input);
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn slugify_is_idempotent(input in any::<String>()) {
            let once = slugify(&input);
            prop_assert_eq!(slugify(&once), once.clone());
        }
    }

    #[test]
    fn gallery_phrases_produce_expected_slugs()
    {
        let cases = [
            ("Xin chào!", "xin-chao",),
            ("Hello World!", "hello-world",),
            ("This & That", "this-that",),
            ("Café Olé", "cafe-ole",),
            ("Multiple   Spaces", "multiple-spaces",),
        ];

        for (input, expected,) in cases {
            assert_eq!(slugify(input,), expected, "input {input:?}");
        }
    }

    #[test]
    fn blank_and_punctuation_only_input_yield_empty_slug()
    {
        assert_eq!(slugify("",), "");
        assert_eq!(slugify("   \t\n",), "");
        assert_eq!(slugify("!!! ??? ***",), "");
    }

    #[test]
    fn edge_hyphens_are_trimmed()
    {
        assert_eq!(slugify("-abc",), "abc");
        assert_eq!(slugify("a -",), "a");
        assert_eq!(slugify("--- test ---",), "test");
    }

    #[test]
    fn existing_hyphens_are_collapsed()
    {
        assert_eq!(slugify("multi--separator - value",), "multi-separator-value");
    }

    #[test]
    fn underscores_and_dots_are_removed_not_replaced()
    {
        assert_eq!(slugify("snake_case.name",), "snakecasename");
    }

    #[test]
    fn digits_survive()
    {
        assert_eq!(slugify("Version 2 Release 10",), "version-2-release-10");
    }

    #[test]
    fn non_latin_scripts_are_transliterated()
    {
        let slug = slugify("안녕하세요",);
        assert!(!slug.is_empty());
        assert!(slug.chars().all(|ch| ch.is_ascii_lowercase()));
    }

    #[test]
    fn custom_transliterator_output_is_normalized()
    {
        let slug = SlugStrategy::builder("ignored",)
            .with_transliterator(|_: &str| "  Custom  OUTPUT!! ".to_owned(),)
            .build();
        assert_eq!(slug, "custom-output");
    }

    #[test]
    fn non_ascii_whitespace_from_transliterator_becomes_separator()
    {
        let slug = SlugStrategy::builder("a\u{00a0}b",)
            .with_transliterator(|text: &str| text.to_owned(),)
            .build();
        assert_eq!(slug, "a-b");
    }

    #[test]
    fn slug_strategy_debug_format()
    {
        let builder = SlugStrategy::builder("debug",);
        let debug_str = format!("{:?}", builder);
        assert!(debug_str.contains("SlugStrategy"));
        assert!(debug_str.contains("source"));
    }

    #[test]
    fn long_input_is_preserved()
    {
        let input = "a".repeat(100,);
        assert_eq!(slugify(&input,), input);
    }
}
