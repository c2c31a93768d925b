//! Undo history.

use super::command::Move;

/// LIFO record of performed moves, used only for undo.
///
/// Holds exactly one entry per committed user action; a composite move is a
/// single entry.
#[derive(Clone, Debug, Default)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a performed move.
    ///
    /// # Panics
    ///
    /// Panics on `Move::Null`, which is never recorded.
    pub fn push(&mut self, mv: Move) {
        assert!(!mv.is_null(), "the null move is never recorded");
        self.moves.push(mv);
    }

    /// Remove the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Moves oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Move> + '_ {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo() {
        let mut history = MoveHistory::new();
        history.push(Move::Discard);
        history.push(Move::ResetDeck { count: 3 });

        assert_eq!(history.len(), 2);
        assert_eq!(history.last(), Some(&Move::ResetDeck { count: 3 }));
        assert_eq!(history.pop(), Some(Move::ResetDeck { count: 3 }));
        assert_eq!(history.pop(), Some(Move::Discard));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_clear() {
        let mut history = MoveHistory::new();
        history.push(Move::Discard);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.iter().count(), 0);
    }

    #[test]
    #[should_panic(expected = "never recorded")]
    fn test_null_rejected() {
        MoveHistory::new().push(Move::Null);
    }
}
