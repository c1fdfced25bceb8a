use std::{collections::HashSet, iter::FusedIterator};

use anyhow::{Result, anyhow};
use getset::Getters;
use simplelog::debug;

use crate::{catalog::Catalog, context::Context};

/// Largest page the listing APIs accept.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Getters, Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Continuation token of the previous page, `None` for the first one.
    #[getset(get = "pub")]
    cursor: Option<String>,
    #[getset(get = "pub")]
    limit: u32,
}

impl PageRequest {
    /// The limit is clamped to `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn new(cursor: Option<String>, limit: u32) -> Self {
        Self {
            cursor,
            limit: clamp_page_size(limit),
        }
    }

    #[must_use]
    pub fn first(limit: u32) -> Self {
        Self::new(None, limit)
    }
}

#[derive(Getters, Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    #[getset(get = "pub")]
    items: Vec<T>,
    /// Cursor for the following page, `None` on the last page.
    #[getset(get = "pub")]
    next: Option<String>,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, next: Option<String>) -> Self {
        Self { items, next }
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[must_use]
pub fn clamp_page_size(size: u32) -> u32 {
    size.clamp(1, MAX_PAGE_SIZE)
}

enum State {
    First,
    Next(String),
    /// The catalog handed out a cursor it was already asked for.
    Repeated(String),
    Done,
}

/// Lazily requests the pages of a catalog in listing order.
///
/// Every call to `next` issues at most one listing request. The sequence ends after
/// the last page or the first error and cannot be restarted. A cursor that was
/// already requested ends the sequence with an error instead of looping.
pub struct Pages<'a, C: Catalog> {
    catalog: &'a C,
    context: &'a Context,
    limit: u32,
    state: State,
    seen: HashSet<String>,
}

impl<'a, C: Catalog> Pages<'a, C> {
    pub fn new(catalog: &'a C, context: &'a Context, limit: u32) -> Self {
        Self {
            catalog,
            context,
            limit: clamp_page_size(limit),
            state: State::First,
            seen: HashSet::new(),
        }
    }
}

impl<C: Catalog> Iterator for Pages<'_, C> {
    type Item = Result<Page<C::Summary>>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = match std::mem::replace(&mut self.state, State::Done) {
            State::Done => return None,
            State::First => None,
            State::Next(cursor) => Some(cursor),
            State::Repeated(cursor) => {
                return Some(Err(anyhow!(
                    "Listing of {} returned cursor {} twice",
                    self.catalog.kind(),
                    cursor
                )));
            }
        };
        if let Some(cursor) = &cursor {
            self.seen.insert(cursor.clone());
        }

        debug!(
            "Requesting {} page at {} with up to {} entries",
            self.catalog.kind(),
            cursor.as_deref().unwrap_or("start"),
            self.limit
        );
        let page = match self
            .catalog
            .list_summaries(self.context, &PageRequest::new(cursor, self.limit))
        {
            Ok(page) => page,
            Err(error) => return Some(Err(error)),
        };
        if let Some(next) = page.next() {
            self.state = if self.seen.contains(next) {
                State::Repeated(next.clone())
            } else {
                State::Next(next.clone())
            };
        }
        Some(Ok(page))
    }
}

impl<C: Catalog> FusedIterator for Pages<'_, C> {}
