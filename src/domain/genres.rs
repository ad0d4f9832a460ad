use std::collections::{BTreeSet, HashMap};

use regex::Regex;

pub fn split_genres(genres: &str) -> Vec<&str> {
    genres
        .split('|')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .collect()
}

/// Sorted, de-duplicated genre names across all genre strings
pub fn collect_genres<'a, I>(genre_strings: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let unique: BTreeSet<&str> = genre_strings.into_iter().flat_map(split_genres).collect();
    unique.into_iter().map(str::to_string).collect()
}

/// Occurrences per genre, most common first; ties broken by name
pub fn count_genres<'a, I>(genre_strings: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for genres in genre_strings {
        for genre in split_genres(genres) {
            *counts.entry(genre).or_insert(0) += 1;
        }
    }

    let mut sorted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(genre, count)| (genre.to_string(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

/// Genres joined for display, e.g. `Adventure • Animation`
pub fn display_genres(genres: &str) -> String {
    split_genres(genres).join(" • ")
}

/// Extracts the trailing `(YYYY)` MovieLens appends to titles
pub struct ReleaseYearParser {
    year_regex: Regex,
}

impl ReleaseYearParser {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            year_regex: Self::compile_regex()?,
        })
    }

    fn compile_regex() -> anyhow::Result<Regex> {
        use anyhow::Context;
        Regex::new(r"\((\d{4})\)\s*$").context("Failed to compile release year regex")
    }

    pub fn parse(&self, title: &str) -> Option<i32> {
        let captures = self.year_regex.captures(title)?;
        captures.get(1)?.as_str().parse().ok()
    }
}
