//! Battlefield arena
//!
//! Owns every player and catapult of a match. Catapults know their enemy only
//! by id; the battlefield resolves those ids each tick, hands the catapult a
//! read-only view of its enemy, and applies whatever the catapult reports
//! back (scores, enemy destruction).

use crate::animation::AnimationSet;
use crate::audio::AudioSink;
use crate::error::{CatapultError, Result};
use crate::game::catapult::{Catapult, CatapultEvent, Impact, TickContext};
use crate::game::config::{CatapultPlacement, GameConfig};
use crate::game::ids::{CatapultId, PlayerId};

/// Who drives a player's catapult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Human,
    Ai,
}

/// One side of the duel.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub kind: PlayerKind,
    pub score: u32,
    /// Only active players accept input
    pub is_active: bool,
    pub catapult: CatapultId,
    pub enemy: Option<PlayerId>,
}

impl Player {
    pub fn is_ai(&self) -> bool {
        self.kind == PlayerKind::Ai
    }
}

/// Arena holding the players and catapults of one match.
#[derive(Debug, Clone)]
pub struct Battlefield {
    config: GameConfig,
    players: Vec<Player>,
    catapults: Vec<Catapult>,
}

impl Battlefield {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            players: Vec::new(),
            catapults: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Add a player together with its catapult.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        kind: PlayerKind,
        placement: CatapultPlacement,
        animations: AnimationSet,
    ) -> PlayerId {
        let id = PlayerId(self.players.len());
        let catapult_id = CatapultId(self.catapults.len());

        self.catapults.push(Catapult::new(
            catapult_id,
            id,
            kind == PlayerKind::Ai,
            placement,
            animations,
            self.config.projectile_radius,
        ));
        self.players.push(Player {
            id,
            name: name.into(),
            kind,
            score: 0,
            is_active: true,
            catapult: catapult_id,
            enemy: None,
        });

        log::debug!("[Battlefield] added {} ({:?}) with {}", id, kind, catapult_id);
        id
    }

    /// Make `a` and `b` each other's enemy.
    pub fn set_enemies(&mut self, a: PlayerId, b: PlayerId) -> Result<()> {
        self.player(a)?;
        self.player(b)?;
        if a == b {
            return Err(CatapultError::InconsistentEnemies { a: a.0, b: b.0 });
        }
        self.players[a.0].enemy = Some(b);
        self.players[b.0].enemy = Some(a);
        Ok(())
    }

    /// Check that every player has an enemy and that pairings are mutual.
    pub fn validate(&self) -> Result<()> {
        for player in &self.players {
            let enemy = player.enemy.ok_or(CatapultError::MissingEnemy(player.id.0))?;
            let back = self.player(enemy)?.enemy;
            if back != Some(player.id) {
                return Err(CatapultError::InconsistentEnemies {
                    a: player.id.0,
                    b: enemy.0,
                });
            }
        }
        Ok(())
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players.get(id.0).ok_or(CatapultError::UnknownId {
            kind: "player",
            id: id.0,
        })
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players.get_mut(id.0).ok_or(CatapultError::UnknownId {
            kind: "player",
            id: id.0,
        })
    }

    pub fn catapult(&self, id: CatapultId) -> Result<&Catapult> {
        self.catapults.get(id.0).ok_or(CatapultError::UnknownId {
            kind: "catapult",
            id: id.0,
        })
    }

    pub fn catapult_mut(&mut self, id: CatapultId) -> Result<&mut Catapult> {
        self.catapults.get_mut(id.0).ok_or(CatapultError::UnknownId {
            kind: "catapult",
            id: id.0,
        })
    }

    /// Catapult owned by `player`.
    pub fn catapult_of(&self, player: PlayerId) -> Result<&Catapult> {
        self.catapult(self.player(player)?.catapult)
    }

    pub fn catapult_of_mut(&mut self, player: PlayerId) -> Result<&mut Catapult> {
        let id = self.player(player)?.catapult;
        self.catapult_mut(id)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn catapults(&self) -> &[Catapult] {
        &self.catapults
    }

    pub fn catapults_mut(&mut self) -> &mut [Catapult] {
        &mut self.catapults
    }

    pub fn score(&self, player: PlayerId) -> Result<u32> {
        Ok(self.player(player)?.score)
    }

    /// Any catapult still playing its turn animations.
    pub fn any_animation_running(&self) -> bool {
        self.catapults.iter().any(Catapult::is_animation_running)
    }

    /// Any catapult whose destruction ended the match.
    pub fn any_game_over(&self) -> bool {
        self.catapults.iter().any(Catapult::is_game_over)
    }

    /// Tick one catapult and apply what it reports.
    pub fn update_catapult(
        &mut self,
        id: CatapultId,
        dt: f32,
        audio: &mut dyn AudioSink,
    ) -> Result<Vec<CatapultEvent>> {
        let owner = self.catapult(id)?.owner();
        let enemy = self.player(owner)?.enemy;

        let mut ctx = TickContext::new(dt, &self.config);
        let mut enemy_catapult = None;
        if let Some(enemy) = enemy {
            let enemy_player = self.player(enemy)?;
            let enemy_id = enemy_player.catapult;
            ctx.enemy_score = enemy_player.score;
            ctx.enemy = Some(self.catapult(enemy_id)?.enemy_view());
            enemy_catapult = Some((enemy, enemy_id));
        }

        let outcome = self.catapults[id.0].step(&ctx, audio);
        let mut events = outcome.events;

        match (outcome.impact, enemy_catapult) {
            (Some(Impact::SelfHit), Some((enemy, _))) => {
                let score = self.award_point(enemy)?;
                log::info!(
                    "[Battlefield] {} hit itself, {} scores ({})",
                    id,
                    enemy,
                    score
                );
                events.push(CatapultEvent::CatapultHit {
                    victim: id,
                    scorer: enemy,
                    score,
                    self_hit: true,
                });
            }
            (Some(Impact::SelfHit), None) => {
                log::info!("[Battlefield] {} hit itself", id);
            }
            (Some(Impact::EnemyHit), Some((_, enemy_id))) => {
                let score = self.award_point(owner)?;
                let victim = &mut self.catapults[enemy_id.0];
                let from = victim.state();
                victim.hit();
                log::info!(
                    "[Battlefield] {} destroyed {}, {} scores ({})",
                    id,
                    enemy_id,
                    owner,
                    score
                );
                events.push(CatapultEvent::StateChanged {
                    catapult: enemy_id,
                    from,
                    to: victim.state(),
                });
                events.push(CatapultEvent::CatapultHit {
                    victim: enemy_id,
                    scorer: owner,
                    score,
                    self_hit: false,
                });
            }
            (Some(Impact::EnemyHit), None) | (None, _) => {}
        }

        Ok(events)
    }

    /// Tick every catapult in player order. Inactive players still animate;
    /// `Player::is_active` only gates input.
    pub fn update_all(&mut self, dt: f32, audio: &mut dyn AudioSink) -> Result<Vec<CatapultEvent>> {
        let mut events = Vec::new();
        for index in 0..self.players.len() {
            let catapult = self.players[index].catapult;
            events.extend(self.update_catapult(catapult, dt, audio)?);
        }
        Ok(events)
    }

    fn award_point(&mut self, player: PlayerId) -> Result<u32> {
        let player = self.player_mut(player)?;
        player.score += 1;
        Ok(player.score)
    }
}
