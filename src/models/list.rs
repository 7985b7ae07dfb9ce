//! Categorized, newest-first ad lists with a bidirectional iteration cursor.

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AdRecord, Category};
use crate::{AdBoardError, Result};

/// Which records a scoped operation considers: every partition, or a single one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    All,
    One(Category),
}

/// Direction of the most recent cursor move since the last reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum LastMove {
    #[default]
    None,
    Forward,
    Backward,
}

/// Explicit cursor state carried alongside the partitions.
///
/// `next` is the index, within the active scope, of the record a call to
/// `next()` would return. It equals the scope length once the iteration is
/// exhausted. The reset state is `{ next: 0, last: None }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Cursor {
    next: usize,
    last: LastMove,
}

impl Cursor {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn next_index(self) -> isize {
        self.next as isize
    }

    fn previous_index(self) -> isize {
        self.next as isize - 1
    }

    fn last_index(self) -> isize {
        match self.last {
            LastMove::None => -1,
            LastMove::Forward => self.previous_index(),
            LastMove::Backward => self.next_index(),
        }
    }

    fn advance(&mut self) {
        self.next += 1;
        self.last = LastMove::Forward;
    }

    fn retreat(&mut self) {
        self.next -= 1;
        self.last = LastMove::Backward;
    }
}

/// A duplicate-free collection of ads, partitioned by category and ordered
/// newest-first within every partition.
///
/// The list supports two browsing modes: over the union of all categories, or
/// over a single selected category (see [`AdList::select_category`]). All
/// iteration methods (`start_iteration`, `next`, `previous`, ...) act on the
/// active scope. Structural mutations (`add`, a successful `remove`) and
/// selection changes reset the iteration, as does `start_iteration` itself.
///
/// Equality compares the record sequences *and* the iteration state: two lists
/// are equal iff they hold the same records in the same order, have the same
/// selected category and identical cursor indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdList {
    partitions: BTreeMap<Category, Vec<AdRecord>>,
    selected: Option<Category>,
    cursor: Cursor,
}

impl AdList {
    /// Create an empty list with no category selected
    pub fn new() -> Self {
        Self {
            partitions: Category::all().into_iter().map(|c| (c, Vec::new())).collect(),
            selected: None,
            cursor: Cursor::default(),
        }
    }

    fn scope(&self) -> Scope {
        match self.selected {
            Some(cat) => Scope::One(cat),
            None => Scope::All,
        }
    }

    fn partition(&self, cat: Category) -> &[AdRecord] {
        &self.partitions[&cat]
    }

    /// Records of the given scope, newest first.
    ///
    /// Partitions are already sorted, so the all-categories view is a k-way
    /// merge of the per-category sequences.
    fn scoped(&self, scope: Scope) -> Box<dyn Iterator<Item = &AdRecord> + '_> {
        match scope {
            Scope::All => Box::new(
                self.partitions
                    .values()
                    .map(|p| p.iter())
                    .kmerge_by(|a, b| a.is_after(b)),
            ),
            Scope::One(cat) => Box::new(self.partition(cat).iter()),
        }
    }

    fn scope_len(&self, scope: Scope) -> usize {
        match scope {
            Scope::All => self.len(),
            Scope::One(cat) => self.len_in(cat),
        }
    }

    /// Select the category the next iterations will be restricted to.
    ///
    /// Restarts the iteration, as if by [`AdList::start_iteration`].
    pub fn select_category(&mut self, cat: Category) {
        debug!(category = %cat, "category selected");
        self.selected = Some(cat);
        self.cursor.reset();
    }

    /// Currently selected category, if any
    pub fn selected_category(&self) -> Option<Category> {
        self.selected
    }

    /// Clear the category selection and restart the iteration.
    ///
    /// Equivalent to [`AdList::start_iteration`] when no category was selected.
    pub fn clear_selected_category(&mut self) {
        debug!("category selection cleared");
        self.selected = None;
        self.cursor.reset();
    }

    /// Rewind the cursor before the newest record of the active scope.
    ///
    /// After this call `has_previous()` is false, `previous_index()` is -1,
    /// `next_index()` is 0 and `last_index()` is -1.
    pub fn start_iteration(&mut self) {
        self.cursor.reset();
    }

    /// Check whether the active scope holds a record older than the cursor position
    pub fn has_next(&self) -> bool {
        self.cursor.next < self.scope_len(self.scope())
    }

    /// Advance to the next-older record in the active scope and return it.
    ///
    /// # Panics
    ///
    /// Panics if `has_next()` is false.
    pub fn next(&mut self) -> &AdRecord {
        assert!(self.has_next(), "next() called with no older ad in scope");
        let idx = self.cursor.next;
        self.cursor.advance();
        self.scoped(self.scope())
            .nth(idx)
            .expect("cursor index within scope")
    }

    /// Index of the record `next()` would return; equals the scope length when
    /// the iteration is exhausted
    pub fn next_index(&self) -> isize {
        self.cursor.next_index()
    }

    /// Check whether the active scope holds a record newer than the cursor position
    pub fn has_previous(&self) -> bool {
        self.cursor.next > 0
    }

    /// Move back to the next-newer record in the active scope and return it.
    ///
    /// # Panics
    ///
    /// Panics if `has_previous()` is false.
    pub fn previous(&mut self) -> &AdRecord {
        assert!(
            self.has_previous(),
            "previous() called with no newer ad in scope"
        );
        self.cursor.retreat();
        let idx = self.cursor.next;
        self.scoped(self.scope())
            .nth(idx)
            .expect("cursor index within scope")
    }

    /// Index of the record `previous()` would return, or -1 at the start of
    /// the iteration
    pub fn previous_index(&self) -> isize {
        self.cursor.previous_index()
    }

    /// Index of the record returned by the most recent `next()`/`previous()`,
    /// or -1 if neither has been called since the last reset
    pub fn last_index(&self) -> isize {
        self.cursor.last_index()
    }

    /// Total record count across all partitions.
    ///
    /// A selected category narrows iteration, not this count; use
    /// [`AdList::len_in`] for a single partition.
    pub fn len(&self) -> usize {
        self.partitions.values().map(Vec::len).sum()
    }

    /// Check whether the list holds no records at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record count of a single category's partition
    pub fn len_in(&self, cat: Category) -> usize {
        self.partition(cat).len()
    }

    /// The `i`-th newest record of the given category's partition.
    ///
    /// Direct positional access; the cursor is not disturbed.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len_in(cat)`.
    pub fn get_in(&self, cat: Category, i: usize) -> &AdRecord {
        &self.partition(cat)[i]
    }

    /// The `i`-th record in global newest-first order across all partitions.
    ///
    /// Linear in the list size; callers iterating over the whole list should
    /// use the cursor methods instead. The cursor is not disturbed.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn get(&self, i: usize) -> &AdRecord {
        let len = self.len();
        self.scoped(Scope::All)
            .nth(i)
            .unwrap_or_else(|| panic!("index {i} out of range for list of {len} ads"))
    }

    /// Check whether an equal record is present in its category's partition
    pub fn contains(&self, ad: &AdRecord) -> bool {
        self.partition(ad.category()).contains(ad)
    }

    /// Insert a record into its category's partition, keeping the partition
    /// newest-first. Restarts the iteration.
    ///
    /// Returns [`AdBoardError::Duplicate`] if an equal record is already
    /// present; the list is unchanged in that case.
    pub fn add(&mut self, ad: AdRecord) -> Result<()> {
        if self.contains(&ad) {
            return Err(AdBoardError::duplicate(ad.description()));
        }
        self.insert(ad);
        Ok(())
    }

    /// Sorted insert without the duplicate check; callers validate first.
    pub(crate) fn insert(&mut self, ad: AdRecord) {
        debug!(category = %ad.category(), price = ad.price(), "ad inserted");
        let part = self
            .partitions
            .get_mut(&ad.category())
            .expect("every category has a partition");
        // Insertion point: first record strictly older than the new one.
        let pos = part.iter().position(|r| ad.is_after(r)).unwrap_or(part.len());
        part.insert(pos, ad);
        self.cursor.reset();
    }

    /// Remove one occurrence of an equal record if present; returns whether a
    /// record was removed.
    ///
    /// Restarts the iteration only when a record was actually removed; a miss
    /// leaves the cursor untouched.
    pub fn remove(&mut self, ad: &AdRecord) -> bool {
        let part = self
            .partitions
            .get_mut(&ad.category())
            .expect("every category has a partition");
        match part.iter().position(|r| r == ad) {
            Some(pos) => {
                part.remove(pos);
                debug!(category = %ad.category(), "ad removed");
                self.cursor.reset();
                true
            }
            None => false,
        }
    }
}

impl Default for AdList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AdList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let selected = match self.selected {
            Some(cat) => cat.to_string(),
            None => "all".into(),
        };
        write!(
            f,
            "{} ads ({} categories, browsing {}, next {}, previous {}, last {})",
            self.len(),
            Category::all().len(),
            selected,
            self.next_index(),
            self.previous_index(),
            self.last_index()
        )
    }
}
