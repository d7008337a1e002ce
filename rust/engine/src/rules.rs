use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Cards each player places face-down during a war round, before the next
/// face-up card.
pub const FACE_DOWN_CARDS: usize = 1;

/// Upper bound accepted for [`WarRules::face_down`].
pub const MAX_FACE_DOWN: usize = 5;

/// Turns after which an unresolved game is decided by card count.
pub const DEFAULT_MAX_TURNS: u32 = 10_000;

/// The rule variant a game is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarRules {
    /// Face-down cards per player per war round
    pub face_down: usize,
    /// Shuffle the collected pile back into an empty draw stack
    pub recycle_collected: bool,
    /// Safety cap on the number of turns in one game
    pub max_turns: u32,
}

impl Default for WarRules {
    fn default() -> Self {
        Self {
            face_down: FACE_DOWN_CARDS,
            recycle_collected: true,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl WarRules {
    /// Checks the rule values before a game is built from them.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidRules`] when `face_down` exceeds
    /// [`MAX_FACE_DOWN`] or `max_turns` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use warsim_engine::rules::WarRules;
    /// use warsim_engine::errors::GameError;
    ///
    /// assert!(WarRules::default().validate().is_ok());
    ///
    /// let rules = WarRules { face_down: 9, ..WarRules::default() };
    /// assert!(matches!(rules.validate(), Err(GameError::InvalidRules(_))));
    /// ```
    pub fn validate(&self) -> Result<(), GameError> {
        if self.face_down > MAX_FACE_DOWN {
            return Err(GameError::InvalidRules(format!(
                "face_down must be <= {}, got {}",
                MAX_FACE_DOWN, self.face_down
            )));
        }
        if self.max_turns == 0 {
            return Err(GameError::InvalidRules("max_turns must be >= 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_single_face_down_card() {
        let rules = WarRules::default();
        assert_eq!(rules.face_down, 1);
        assert!(rules.recycle_collected);
    }

    #[test]
    fn zero_turn_cap_is_rejected() {
        let rules = WarRules {
            max_turns: 0,
            ..WarRules::default()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn three_card_variant_is_accepted() {
        let rules = WarRules {
            face_down: 3,
            ..WarRules::default()
        };
        assert_eq!(rules.validate(), Ok(()));
    }
}
