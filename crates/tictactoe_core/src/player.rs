//! Player identities.

use crate::error::PlayerError;
use crate::types::Mark;
use serde::Serialize;
use tracing::instrument;

/// A named participant with an assigned mark.
///
/// Immutable once constructed. The name is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    /// Creates a player.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidName`] if `name` is blank.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, mark: Mark) -> Result<Self, PlayerError> {
        let name = name.as_ref();
        if name.trim().is_empty() {
            return Err(PlayerError::InvalidName);
        }
        Ok(Self {
            name: name.to_string(),
            mark,
        })
    }

    /// Creates a player from a mark character (`'X'` or `'O'`).
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidMark`] for any other symbol and
    /// [`PlayerError::InvalidName`] if `name` is blank.
    pub fn with_symbol(name: impl AsRef<str>, symbol: char) -> Result<Self, PlayerError> {
        let mark = Mark::try_from(symbol)?;
        Self::new(name, mark)
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigned mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn test_new_player() {
        let player = Player::new("Ada", Mark::O).unwrap();
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.mark(), Mark::O);
        assert_eq!(player.to_string(), "Ada (O)");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(Player::new("", Mark::X), Err(PlayerError::InvalidName));
        assert_eq!(Player::new("  \t", Mark::X), Err(PlayerError::InvalidName));
    }

    #[test]
    fn test_with_symbol() {
        assert_eq!(Player::with_symbol("P1", 'X').unwrap().mark(), Mark::X);
        assert_eq!(
            Player::with_symbol("P1", '#'),
            Err(PlayerError::InvalidMark(BoardError::InvalidMark { symbol: '#' }))
        );
        assert_eq!(
            Player::with_symbol("P1", 'x'),
            Err(PlayerError::InvalidMark(BoardError::InvalidMark { symbol: 'x' }))
        );
    }
}
