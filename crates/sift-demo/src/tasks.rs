//! The four filtering approaches, from hand-written matching to a single
//! search applied to unrelated record types.

use std::fmt::Display;
use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use log::debug;
use sift::{any_of, Case, Filterable, Op, Predicate, Search};

use crate::model::{Product, User};

/// Keyword and match settings shared by all tasks.
#[derive(Debug, Clone)]
pub struct Settings {
    keywords: Vec<String>,
    op: Op,
    case: Case,
}

impl Settings {
    /// Fails when no non-blank keyword is given.
    pub fn new(keywords: Vec<String>, op: Op, case: Case) -> Result<Self> {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            bail!("at least one keyword is required");
        }
        Ok(Settings { keywords, op, case })
    }

    fn first_keyword(&self) -> &str {
        &self.keywords[0]
    }

    fn search(&self, keywords: &[String]) -> Search {
        Search::new()
            .keywords(keywords.iter().cloned())
            .op(self.op)
            .case(self.case)
    }
}

/// Task 1: one keyword, two hand-picked fields, written out in full.
pub fn manual_matching<W: Write>(out: &mut W, users: &[User], settings: &Settings) -> Result<()> {
    let keyword = settings.first_keyword();
    debug!("task 1: manual matching for {keyword:?}");

    let matched = users.iter().filter(|u| {
        contains(&u.first_name, keyword, settings.case)
            || contains(&u.last_name, keyword, settings.case)
    });
    print_block(out, "Manual matching results", matched)?;
    Ok(())
}

/// Task 2: a hand-written two-argument test, applied for up to two
/// keywords and ORed together.
pub fn manual_predicate<W: Write>(out: &mut W, users: &[User], settings: &Settings) -> Result<()> {
    let case = settings.case;
    let user_matches = move |user: &User, keyword: &str| {
        contains(&user.first_name, keyword, case) || contains(&user.last_name, keyword, case)
    };

    let keywords = &settings.keywords[..settings.keywords.len().min(2)];
    debug!("task 2: manual predicate for {keywords:?}");

    let predicate = any_of(
        keywords
            .iter()
            .map(|k| Predicate::new(move |u: &User| user_matches(u, k.as_str()))),
    );
    print_block(out, "Manual predicate results", predicate.filter(users))?;
    Ok(())
}

/// Task 3: predicates assembled from the declared text fields of each type,
/// for the first keyword.
pub fn field_predicates<W: Write>(
    out: &mut W,
    users: &[User],
    products: &[Product],
    settings: &Settings,
) -> Result<()> {
    let search = settings.search(&settings.keywords[..1]);
    debug!("task 3: field predicates for {:?}", settings.first_keyword());

    search_block(out, "Expression predicate results for users", &search, users)?;
    search_block(out, "Expression predicate results for products", &search, products)?;
    Ok(())
}

/// Task 4: one search value, every keyword, applied to both record types.
pub fn single_search<W: Write>(
    out: &mut W,
    users: &[User],
    products: &[Product],
    settings: &Settings,
) -> Result<()> {
    let search = settings.search(&settings.keywords);
    debug!("task 4: single search for {:?}", search.keyword_list());

    search_block(out, "Single search results for users", &search, users)?;
    search_block(out, "Single search results for products", &search, products)?;
    Ok(())
}

fn search_block<W, T>(out: &mut W, header: &str, search: &Search, items: &[T]) -> Result<()>
where
    W: Write,
    T: Filterable + Display,
{
    let predicate = search
        .any_field::<T>()
        .with_context(|| format!("building predicate for {header:?}"))?;
    print_block(out, header, predicate.filter(items))?;
    Ok(())
}

fn print_block<'a, W, I, D>(out: &mut W, header: &str, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a D>,
    D: Display + 'a,
{
    writeln!(out, "{header}")?;
    for item in items {
        writeln!(out, "{item}")?;
    }
    writeln!(out)
}

fn contains(haystack: &str, needle: &str, case: Case) -> bool {
    match case {
        Case::Sensitive => haystack.contains(needle),
        Case::Insensitive => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}
