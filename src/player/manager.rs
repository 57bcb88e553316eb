//! Player registry: registration, lookup, profile edits, guarded deletion.

use std::sync::Arc;

use super::errors::{PlayerError, PlayerResult};
use super::models::{Player, PlayerId, PlayerUpdate};
use crate::locks::EntityLocks;
use crate::store::EngineStore;

/// Player registry manager.
///
/// Shares its per-player lock registry with the game settlement path, so a
/// direct counter edit can never interleave with a finishing game.
#[derive(Clone)]
pub struct PlayerManager {
    store: Arc<dyn EngineStore>,
    locks: Arc<EntityLocks<PlayerId>>,
}

impl PlayerManager {
    pub fn new(store: Arc<dyn EngineStore>, locks: Arc<EntityLocks<PlayerId>>) -> Self {
        Self { store, locks }
    }

    /// Register a player under an externally issued id.
    ///
    /// The alias defaults to `player-{id}` and the configuration to an empty
    /// object when the boundary supplies neither.
    pub async fn register(
        &self,
        id: PlayerId,
        alias: Option<String>,
        configuration: Option<serde_json::Value>,
    ) -> PlayerResult<Player> {
        let _guard = self.locks.acquire(id).await;

        if self.store.find_player(id).await?.is_some() {
            return Err(PlayerError::AlreadyRegistered(id));
        }

        let player = Player::new(
            id,
            alias.unwrap_or_else(|| format!("player-{id}")),
            configuration.unwrap_or_else(|| serde_json::json!({})),
        );
        self.store.insert_player(&player).await?;

        log::info!("registered player {} ({})", player.id, player.alias);
        Ok(player)
    }

    /// Look up a player by id.
    pub async fn get(&self, id: PlayerId) -> PlayerResult<Player> {
        self.store
            .find_player(id)
            .await?
            .ok_or(PlayerError::NotFound(id))
    }

    /// Apply a partial profile update.
    pub async fn update(&self, id: PlayerId, update: PlayerUpdate) -> PlayerResult<Player> {
        let _guard = self.locks.acquire(id).await;

        let mut player = self
            .store
            .find_player(id)
            .await?
            .ok_or(PlayerError::NotFound(id))?;
        update.apply(&mut player);
        self.store.save_player(&player).await?;

        Ok(player)
    }

    /// Remove a player.
    ///
    /// Refused while the player is a participant of any tournament in a
    /// non-terminal state; finished tournaments keep referencing the id for
    /// history, which does not block removal.
    pub async fn remove(&self, id: PlayerId) -> PlayerResult<()> {
        let _guard = self.locks.acquire(id).await;

        if self.store.find_player(id).await?.is_none() {
            return Err(PlayerError::NotFound(id));
        }

        for tournament in self.store.list_tournaments().await? {
            if !tournament.state.is_terminal() && tournament.participants.contains(&id) {
                return Err(PlayerError::ActiveTournament {
                    player: id,
                    tournament: tournament.id,
                });
            }
        }

        self.store.delete_player(id).await?;
        log::info!("removed player {id}");
        Ok(())
    }
}
