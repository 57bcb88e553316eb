//! Player data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player ID type. Issued externally (by the user service), never minted here.
pub type PlayerId = i64;

/// A registered player with cumulative match statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Stable, externally issued identity.
    pub id: PlayerId,
    /// Display alias.
    pub alias: String,
    /// Games won.
    pub win_count: u64,
    /// Games lost.
    pub lose_count: u64,
    /// Points scored in won games.
    pub win_points: u64,
    /// Points scored in lost games.
    pub lose_points: u64,
    /// Free-form per-player settings. Stored as-is, never interpreted.
    pub configuration: serde_json::Value,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Create a fresh player with zeroed counters.
    pub fn new(id: PlayerId, alias: String, configuration: serde_json::Value) -> Self {
        Self {
            id,
            alias,
            win_count: 0,
            lose_count: 0,
            win_points: 0,
            lose_points: 0,
            configuration,
            created_at: Utc::now(),
        }
    }

    /// Total games this player has completed.
    pub fn games_played(&self) -> u64 {
        self.win_count + self.lose_count
    }
}

/// Partial update for a player profile.
///
/// Mirrors the boundary's PATCH body: absent fields are left untouched.
/// Counter fields overwrite; they exist for administrative correction, the
/// normal path is game settlement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerUpdate {
    pub alias: Option<String>,
    pub configuration: Option<serde_json::Value>,
    pub win_count: Option<u64>,
    pub lose_count: Option<u64>,
    pub win_points: Option<u64>,
    pub lose_points: Option<u64>,
}

impl PlayerUpdate {
    pub(crate) fn apply(&self, player: &mut Player) {
        if let Some(alias) = &self.alias {
            player.alias = alias.clone();
        }
        if let Some(configuration) = &self.configuration {
            player.configuration = configuration.clone();
        }
        if let Some(win_count) = self.win_count {
            player.win_count = win_count;
        }
        if let Some(lose_count) = self.lose_count {
            player.lose_count = lose_count;
        }
        if let Some(win_points) = self.win_points {
            player.win_points = win_points;
        }
        if let Some(lose_points) = self.lose_points {
            player.lose_points = lose_points;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_with_zeroed_counters() {
        let player = Player::new(7, "ada".to_string(), serde_json::json!({}));
        assert_eq!(player.id, 7);
        assert_eq!(player.win_count, 0);
        assert_eq!(player.lose_count, 0);
        assert_eq!(player.win_points, 0);
        assert_eq!(player.lose_points, 0);
        assert_eq!(player.games_played(), 0);
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut player = Player::new(1, "ada".to_string(), serde_json::json!({}));
        player.win_count = 3;

        let update = PlayerUpdate {
            alias: Some("grace".to_string()),
            lose_count: Some(2),
            ..PlayerUpdate::default()
        };
        update.apply(&mut player);

        assert_eq!(player.alias, "grace");
        assert_eq!(player.win_count, 3);
        assert_eq!(player.lose_count, 2);
    }
}
