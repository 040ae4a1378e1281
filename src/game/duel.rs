//! Duel host
//!
//! Runs a single-player match: the human catapult on the left against the AI
//! catapult on the right. The duel decides whose turn it is, rolls the wind
//! for every turn, feeds human drag input to the active catapult and ends the
//! match once a catapult reports game over.
//!
//! # Example
//!
//! ```ignore
//! use catapult_wars_engine::animation::default_definitions;
//! use catapult_wars_engine::audio::SilentAudio;
//! use catapult_wars_engine::game::{Duel, GameConfig};
//!
//! let mut duel = Duel::new(GameConfig::default(), &default_definitions(), 42)?;
//! while !duel.is_game_over() {
//!     duel.update(1.0 / 60.0, &mut SilentAudio)?;
//! }
//! ```

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::animation::{AnimationDefinition, AnimationSet};
use crate::audio::{AudioSink, SoundCue};
use crate::error::Result;
use crate::game::battlefield::{Battlefield, PlayerKind};
use crate::game::catapult::{Catapult, CatapultEvent, CatapultState};
use crate::game::config::GameConfig;
use crate::game::ids::PlayerId;
use crate::game::players::{AiController, HumanController};

/// Name shown for the human side.
pub const HUMAN_NAME: &str = "Player";
/// Name shown for the computer side.
pub const AI_NAME: &str = "Phone";

/// Something the duel reports from an update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DuelEvent {
    Catapult(CatapultEvent),
    /// A new turn started for `player` with a fresh wind
    TurnChanged { player: PlayerId, wind: f32 },
    /// The match ended. `winner` is `None` on a tie.
    MatchOver { winner: Option<PlayerId> },
}

/// Human vs AI match.
#[derive(Debug, Clone)]
pub struct Duel {
    field: Battlefield,
    human: PlayerId,
    ai: PlayerId,
    human_input: HumanController,
    ai_controller: AiController,
    rng: ChaCha8Rng,
    seed: u64,
    wind: f32,
    is_human_turn: bool,
    change_turn: bool,
    game_over: bool,
    winner: Option<PlayerId>,
}

impl Duel {
    /// Set up a match from animation definitions.
    ///
    /// The AI catapult starts in `Reset`, so the first update hands the turn
    /// to the human.
    pub fn new(config: GameConfig, definitions: &[AnimationDefinition], seed: u64) -> Result<Self> {
        let human_animations = AnimationSet::from_definitions(definitions, false)?;
        let ai_animations = AnimationSet::from_definitions(definitions, true)?;

        let human_placement = config.human;
        let ai_placement = config.ai;
        let mut field = Battlefield::new(config);
        let human = field.add_player(HUMAN_NAME, PlayerKind::Human, human_placement, human_animations);
        let ai = field.add_player(AI_NAME, PlayerKind::Ai, ai_placement, ai_animations);
        field.set_enemies(human, ai)?;
        field.validate()?;

        field.player_mut(human)?.is_active = false;
        field.catapult_of_mut(ai)?.set_state(CatapultState::Reset);

        log::info!("[Duel] new match, seed {}", seed);

        Ok(Self {
            field,
            human,
            ai,
            human_input: HumanController::new(),
            ai_controller: AiController::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            wind: 0.0,
            is_human_turn: false,
            change_turn: true,
            game_over: false,
            winner: None,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn field(&self) -> &Battlefield {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Battlefield {
        &mut self.field
    }

    pub fn human(&self) -> PlayerId {
        self.human
    }

    pub fn ai(&self) -> PlayerId {
        self.ai
    }

    pub fn human_catapult(&self) -> Result<&Catapult> {
        self.field.catapult_of(self.human)
    }

    pub fn ai_catapult(&self) -> Result<&Catapult> {
        self.field.catapult_of(self.ai)
    }

    /// Wind of the current turn.
    pub fn wind(&self) -> f32 {
        self.wind
    }

    pub fn is_human_turn(&self) -> bool {
        self.is_human_turn
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// (human, AI) scores.
    pub fn scores(&self) -> Result<(u32, u32)> {
        Ok((self.field.score(self.human)?, self.field.score(self.ai)?))
    }

    pub fn is_dragging(&self) -> bool {
        self.human_input.is_dragging()
    }

    /// Human input is taken only on the human's turn, before the shot.
    pub fn accepts_human_input(&self) -> bool {
        !self.game_over
            && self.is_human_turn
            && self.human_catapult().is_ok_and(|c| {
                matches!(c.state(), CatapultState::Idle | CatapultState::Aiming)
            })
    }

    /// Start a drag at `position`. Returns false if input is not accepted now.
    pub fn begin_drag(&mut self, position: Vec2) -> Result<bool> {
        if !self.accepts_human_input() {
            return Ok(false);
        }
        let config = self.field.config().clone();
        let catapult = self.field.catapult_of_mut(self.human)?;
        self.human_input.begin_drag(catapult, &config, position);
        Ok(true)
    }

    /// Continue the drag to `position`.
    pub fn drag_to(&mut self, position: Vec2) -> Result<bool> {
        if !self.accepts_human_input() {
            return Ok(false);
        }
        let config = self.field.config().clone();
        let catapult = self.field.catapult_of_mut(self.human)?;
        self.human_input.drag_to(catapult, &config, position);
        Ok(true)
    }

    /// Release the drag and fire. Returns the launch speed if a shot was fired.
    pub fn release(&mut self) -> Result<Option<f32>> {
        if !self.accepts_human_input() {
            return Ok(None);
        }
        let config = self.field.config().clone();
        let catapult = self.field.catapult_of_mut(self.human)?;
        Ok(self.human_input.release(catapult, &config))
    }

    /// Advance the match by `dt` seconds.
    pub fn update(&mut self, dt: f32, audio: &mut dyn AudioSink) -> Result<Vec<DuelEvent>> {
        let mut events = Vec::new();
        if self.game_over || !dt.is_finite() || dt <= 0.0 {
            return Ok(events);
        }

        if self.field.any_game_over() {
            self.finish(audio, &mut events)?;
            return Ok(events);
        }

        let turn_over = self
            .field
            .catapults()
            .iter()
            .any(|c| c.state() == CatapultState::Reset);
        if turn_over && !self.field.any_animation_running() {
            self.change_turn = true;
            self.switch_turn()?;
        }

        if self.change_turn {
            self.roll_wind();
            self.change_turn = false;
            let player = if self.is_human_turn { self.human } else { self.ai };
            log::info!(
                "[Duel] {} turn, wind {:+}",
                self.field.player(player)?.name,
                self.wind
            );
            events.push(DuelEvent::TurnChanged {
                player,
                wind: self.wind,
            });
        }

        let config = self.field.config().clone();
        let ai_catapult = self.field.catapult_of_mut(self.ai)?;
        self.ai_controller.update(ai_catapult, &config, &mut self.rng);

        events.extend(
            self.field
                .update_all(dt, audio)?
                .into_iter()
                .map(DuelEvent::Catapult),
        );
        Ok(events)
    }

    fn switch_turn(&mut self) -> Result<()> {
        if self.is_human_turn {
            self.is_human_turn = false;
            self.field.player_mut(self.human)?.is_active = false;
            self.field.player_mut(self.ai)?.is_active = true;
            self.field.catapult_of_mut(self.human)?.set_state(CatapultState::Idle);
            self.field.catapult_of_mut(self.ai)?.set_state(CatapultState::Aiming);
        } else {
            self.is_human_turn = true;
            self.field.player_mut(self.human)?.is_active = true;
            self.field.player_mut(self.ai)?.is_active = false;
            self.field.catapult_of_mut(self.ai)?.set_state(CatapultState::Idle);
            self.field.catapult_of_mut(self.human)?.set_state(CatapultState::Idle);
        }
        Ok(())
    }

    /// Direction in {-1, 0, 1}, magnitude in `0..=max_wind`; only a positive
    /// direction blows to the right.
    fn roll_wind(&mut self) {
        let direction: i32 = self.rng.gen_range(-1..2);
        let magnitude = self.rng.gen_range(0..=self.field.config().max_wind) as f32;
        self.wind = if direction > 0 { magnitude } else { -magnitude };
        for catapult in self.field.catapults_mut() {
            catapult.set_wind(self.wind);
        }
    }

    fn finish(&mut self, audio: &mut dyn AudioSink, events: &mut Vec<DuelEvent>) -> Result<()> {
        self.game_over = true;
        let (human_score, ai_score) = self.scores()?;

        if human_score > ai_score {
            audio.play(SoundCue::GameOverWin, false);
        } else {
            audio.play(SoundCue::GameOverLose, false);
        }

        self.winner = match human_score.cmp(&ai_score) {
            std::cmp::Ordering::Greater => Some(self.human),
            std::cmp::Ordering::Less => Some(self.ai),
            std::cmp::Ordering::Equal => None,
        };

        log::info!(
            "[Duel] match over, {} {} - {} {}",
            HUMAN_NAME,
            human_score,
            ai_score,
            AI_NAME
        );
        events.push(DuelEvent::MatchOver {
            winner: self.winner,
        });
        Ok(())
    }
}
