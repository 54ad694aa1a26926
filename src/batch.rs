// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Parallel slugification of many lines at once.

use std::{fs, path::Path};

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::{
    error::{self, Error},
    slug::slugify,
};

/// Conversion result for one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct SlugRecord
{
    /// Original line.
    pub input:      String,
    /// Derived slug, empty when the line had nothing to convert.
    pub slug:       String,
    /// Number of characters in [`slug`](Self::slug).
    pub char_count: usize,
}

/// Slugifies every line, preserving input order.
///
/// ```
/// let records = slugline::slugify_lines(["Hello World!", "   "],);
/// assert_eq!(records[0].slug, "hello-world");
/// assert!(records[1].slug.is_empty());
/// ```
pub fn slugify_lines<I, S,>(lines: I,) -> Vec<SlugRecord,>
where
    I: IntoIterator<Item = S,>,
    S: Into<String,>,
{
    let inputs: Vec<String,> = lines.into_iter().map(Into::into,).collect();
    inputs
        .into_par_iter()
        .map(|input| {
            let slug = slugify(&input,);
            SlugRecord {
                char_count: slug.chars().count(),
                slug,
                input,
            }
        },)
        .collect()
}

/// Reads `path` and slugifies each of its lines.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read.
pub fn slugify_file(path: &Path,) -> Result<Vec<SlugRecord,>, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    let records = slugify_lines(contents.lines(),);
    info!("Converted {} lines from {}", records.len(), path.display());
    Ok(records,)
}
