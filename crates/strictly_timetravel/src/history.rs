//! Ordered board snapshots.

use crate::{Board, Location, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A board snapshot plus the move that produced it.
///
/// Entries are never mutated once pushed; earlier entries stay reachable
/// after a jump and must still render as they were.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    played: Option<Position>,
}

impl HistoryEntry {
    /// The initial entry: blank board, no move.
    pub fn genesis() -> Self {
        Self {
            board: Board::new(),
            played: None,
        }
    }

    pub(crate) fn new(board: Board, played: Position) -> Self {
        Self {
            board,
            played: Some(played),
        }
    }

    /// The board as it stood after this entry's move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The position played, or `None` for the initial entry.
    pub fn played(&self) -> Option<Position> {
        self.played
    }

    /// Grid location of the move, or `None` for the initial entry.
    pub fn location(&self) -> Option<Location> {
        self.played.map(Position::location)
    }
}

/// History of a game, oldest first.
///
/// Index 0 always holds [`HistoryEntry::genesis`]; a `History` is never empty.
/// Only the engine builds one, so it serializes but does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the initial entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::genesis()],
        }
    }

    /// Number of entries, including the initial one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the initial entry is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the newest entry.
    pub fn last_step(&self) -> usize {
        self.entries.len() - 1
    }

    /// Entry at `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Iterates over entries, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Drops every entry after `step` and appends `entry`.
    ///
    /// Returns the step index of the appended entry.
    #[instrument(skip(self, entry), fields(len = self.entries.len()))]
    pub(crate) fn branch(&mut self, step: usize, entry: HistoryEntry) -> usize {
        let discarded = self.entries.len().saturating_sub(step + 1);
        if discarded > 0 {
            tracing::debug!(discarded, "Discarding future entries");
        }
        self.entries.truncate(step + 1);
        self.entries.push(entry);
        self.last_step()
    }

    #[cfg(test)]
    pub(crate) fn entries_mut(&mut self) -> &mut Vec<HistoryEntry> {
        &mut self.entries
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
