//! Action representation: dense integer ids.
//!
//! Every environment exposes a fixed action space `[0, N)`. Each id maps to
//! exactly one structurally possible move of the game; the legal moves at any
//! position are a strict subset of that range. Games define the mapping via
//! their `ActionCodec`. The controller never interprets ids itself, it only
//! stores and compares them.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A dense action id.
///
/// ## Example
///
/// ```
/// use zarena::core::ActionId;
///
/// let action = ActionId::new(4096);
/// assert_eq!(action.index(), 4096);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionId(pub u32);

impl ActionId {
    /// Create a new action id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the id as an index into the action space.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ActionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Action({})", self.0)
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Training data
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: ActionId,

    /// Move counter when the action was taken.
    pub move_count: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: ActionId, move_count: u32) -> Self {
        Self {
            player,
            action,
            move_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_id_basics() {
        let action = ActionId::new(12);
        assert_eq!(action.raw(), 12);
        assert_eq!(action.index(), 12);
        assert_eq!(ActionId::from(12), action);
        assert_eq!(format!("{}", action), "Action(12)");
    }

    #[test]
    fn test_action_ordering() {
        let mut ids = vec![ActionId(7), ActionId(2), ActionId(4100)];
        ids.sort();
        assert_eq!(ids, vec![ActionId(2), ActionId(7), ActionId(4100)]);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(PlayerId::SECOND, ActionId(3112), 4);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
