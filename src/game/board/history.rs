use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A single ply, with enough context to replay or describe it.
pub struct Entry
{
    pub player: Player,
    pub from:   Option<Cell>,
    pub to:     Cell,
}

impl std::fmt::Display for Entry
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let from = self.from.map(|cell| format!("{}", cell)).unwrap_or("hand".into());
        write!(f, "{} to {}, from {}", self.player, self.to, from)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A linear, append-only move history.
///
/// Boards never rewind; each successor board carries a copy of its parent's history plus one entry.
pub struct History
{
    past: Vec<Entry>,
}

impl History
{
    /// Determines whether or not the history is empty.
    pub fn is_empty(&self) -> bool
    {
        self.past.is_empty()
    }

    /// A read-only iter to past entries, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry>
    {
        self.past.iter()
    }

    /// Gets the length of the history, which is the number of plies played.
    pub fn len(&self) -> usize
    {
        self.past.len()
    }

    /// The moves played so far, oldest first.
    pub fn moves(&self) -> Vec<Move>
    {
        self.past.iter().map(|entry| Move::To(entry.to)).collect()
    }

    /// Records a ply.
    pub fn play(&mut self, entry: Entry)
    {
        self.past.push(entry);
    }

    /// Gets the last ply played, if one exists.
    pub fn prev(&self) -> Option<Entry>
    {
        self.past.last().copied()
    }
}
