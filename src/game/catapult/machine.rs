//! Catapult turn state machine.
//!
//! One [`Catapult`] steps through aim, fire, flight, impact and reset once per
//! frame. It never touches the other catapult directly: everything it needs to
//! know about its enemy comes in through a [`TickContext`], and an enemy hit is
//! handed back as an [`Impact`] for the battlefield to apply.

use glam::Vec2;

use crate::animation::AnimationSet;
use crate::audio::{AudioSink, SoundCue};
use crate::game::config::{CatapultPlacement, GameConfig};
use crate::game::ids::{CatapultId, PlayerId};
use crate::physics::{Aabb, BallisticsConfig, BoundingSphere, Projectile};

use super::state::{CatapultEvent, CatapultState};

/// What a catapult can see of its enemy during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyView {
    pub bounds: Aabb,
    pub state: CatapultState,
}

/// Per-tick inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Seconds since the previous tick
    pub dt: f32,
    pub ballistics: BallisticsConfig,
    pub win_score: u32,
    pub stall_cycles: u32,
    /// Current score of the enemy player
    pub enemy_score: u32,
    pub enemy: Option<EnemyView>,
}

impl TickContext {
    /// Context with the stock rules and no enemy in sight.
    pub fn new(dt: f32, config: &GameConfig) -> Self {
        Self {
            dt,
            ballistics: config.ballistics,
            win_score: config.win_score,
            stall_cycles: config.ai_stall_cycles,
            enemy_score: 0,
            enemy: None,
        }
    }
}

/// How the boulder's landing was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    /// The boulder fell on its own catapult; the enemy scores
    SelfHit,
    /// The boulder destroyed the enemy catapult; the firer scores
    EnemyHit,
}

/// Result of one [`Catapult::step`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutcome {
    pub events: Vec<CatapultEvent>,
    /// Set on the tick the impact was resolved
    pub impact: Option<Impact>,
}

/// Aim frame that represents `strength` on an aim clip of `frame_count` frames.
///
/// `floor(frame_count * strength)`, clamped to the last frame.
pub fn aim_frame_for_strength(frame_count: usize, strength: f32) -> usize {
    let strength = strength.clamp(0.0, 1.0);
    let frame = (frame_count as f32 * strength).floor() as usize;
    frame.min(frame_count.saturating_sub(1))
}

/// One catapult and its boulder.
#[derive(Debug, Clone)]
pub struct Catapult {
    id: CatapultId,
    owner: PlayerId,
    is_ai: bool,
    position: Vec2,
    current_state: CatapultState,
    last_update_state: CatapultState,
    shot_strength: f32,
    /// Launch speed used by the next shot
    pub shot_velocity: f32,
    wind: f32,
    game_over: bool,
    animation_running: bool,
    /// Inactive catapults ignore updates
    pub is_active: bool,
    stall_remaining: u32,
    impact_resolved: bool,
    animations: AnimationSet,
    projectile: Projectile,
}

impl Catapult {
    pub fn new(
        id: CatapultId,
        owner: PlayerId,
        is_ai: bool,
        placement: CatapultPlacement,
        animations: AnimationSet,
        projectile_radius: f32,
    ) -> Self {
        // The boulder may sink one firing-sprite height below the ground line
        let hit_offset = animations.fire.frame_size().y;
        let direction = if is_ai { -1.0 } else { 1.0 };
        Self {
            id,
            owner,
            is_ai,
            position: placement.position,
            current_state: CatapultState::Idle,
            last_update_state: CatapultState::Idle,
            shot_strength: 0.0,
            shot_velocity: 0.0,
            wind: 0.0,
            game_over: false,
            animation_running: false,
            is_active: true,
            stall_remaining: 0,
            impact_resolved: false,
            animations,
            projectile: Projectile::new(
                placement.projectile_start,
                direction,
                hit_offset,
                projectile_radius,
            ),
        }
    }

    pub fn id(&self) -> CatapultId {
        self.id
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn is_ai(&self) -> bool {
        self.is_ai
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn state(&self) -> CatapultState {
        self.current_state
    }

    /// State the catapult was in during its previous update.
    pub fn last_update_state(&self) -> CatapultState {
        self.last_update_state
    }

    /// Force a state. Used by the turn host and by human input.
    pub fn set_state(&mut self, state: CatapultState) {
        self.current_state = state;
    }

    pub fn shot_strength(&self) -> f32 {
        self.shot_strength
    }

    /// Normalized shot strength, clamped to `[0, 1]`.
    pub fn set_shot_strength(&mut self, strength: f32) {
        self.shot_strength = if strength.is_nan() {
            0.0
        } else {
            strength.clamp(0.0, 1.0)
        };
    }

    pub fn wind(&self) -> f32 {
        self.wind
    }

    pub fn set_wind(&mut self, wind: f32) {
        self.wind = wind;
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True from the first aiming tick until the reset tick.
    pub fn is_animation_running(&self) -> bool {
        self.animation_running
    }

    pub fn animations(&self) -> &AnimationSet {
        &self.animations
    }

    pub fn projectile(&self) -> &Projectile {
        &self.projectile
    }

    pub fn projectile_mut(&mut self) -> &mut Projectile {
        &mut self.projectile
    }

    /// Sprite footprint used for hit checks.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin_size(self.position, self.animations.fire.frame_size())
    }

    pub fn enemy_view(&self) -> EnemyView {
        EnemyView {
            bounds: self.bounds(),
            state: self.current_state,
        }
    }

    /// Arm the boulder with a launch speed. It leaves the bucket when the
    /// firing swing reaches its release frame.
    pub fn fire(&mut self, velocity: f32) {
        self.projectile.fire(velocity);
    }

    /// Start the destruction sequence on this catapult.
    pub fn hit(&mut self) {
        self.animation_running = true;
        self.animations.destroyed.play_from_frame_index(0);
        self.animations.hit_smoke.play_from_frame_index(0);
        self.current_state = CatapultState::Hit;
    }

    /// Advance one tick.
    ///
    /// A tick with no elapsed time (or a non-finite one) leaves the catapult
    /// untouched.
    pub fn step(&mut self, ctx: &TickContext, audio: &mut dyn AudioSink) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        if !self.is_active || !ctx.dt.is_finite() || ctx.dt <= 0.0 {
            return outcome;
        }

        let state_before = self.current_state;
        let entered = self.last_update_state != self.current_state;
        let mut next = None;

        match self.current_state {
            CatapultState::Idle => {}
            CatapultState::Aiming => {
                if entered {
                    audio.play(SoundCue::RopeStretch, true);
                    self.animation_running = true;
                    if self.is_ai {
                        self.animations.aim.play_from_frame_index(0);
                        self.stall_remaining = ctx.stall_cycles;
                    }
                }

                if self.is_ai {
                    self.animations.aim.update(ctx.dt);
                    if self.aim_reached_shot_strength() {
                        next = Some(CatapultState::Stalling);
                    }
                } else {
                    self.aim_at_shot_strength();
                }
            }
            CatapultState::Stalling => {
                if self.stall_remaining == 0 {
                    self.fire(self.shot_velocity);
                    next = Some(CatapultState::Firing);
                } else {
                    self.stall_remaining -= 1;
                }
            }
            CatapultState::Firing => {
                if entered {
                    // Aimed and released between two ticks
                    if !matches!(
                        self.last_update_state,
                        CatapultState::Aiming | CatapultState::Stalling
                    ) {
                        audio.play(SoundCue::RopeStretch, true);
                        self.animation_running = true;
                    }
                    audio.stop(SoundCue::RopeStretch);
                    audio.play(SoundCue::CatapultFire, false);
                    self.start_firing_from_last_aim_position();
                }

                self.animations.fire.update(ctx.dt);

                if self.animations.fire.frame_index() >= self.animations.fire_split_frame {
                    self.projectile.launch();
                    self.impact_resolved = false;
                    outcome.events.push(CatapultEvent::ProjectileReleased {
                        catapult: self.id,
                        position: self.projectile.position,
                    });
                    next = Some(CatapultState::FiringAndFlying);
                }
            }
            CatapultState::FiringAndFlying => {
                self.animations.fire.update(ctx.dt);

                if self.update_flight(ctx, &mut outcome) {
                    next = Some(CatapultState::ProjectileHit);
                } else if !self.animations.fire.is_active() {
                    next = Some(CatapultState::ProjectileFlying);
                }
            }
            CatapultState::ProjectileFlying => {
                if self.update_flight(ctx, &mut outcome) {
                    next = Some(CatapultState::ProjectileHit);
                }
            }
            CatapultState::ProjectileHit => {
                if !self.impact_resolved {
                    self.impact_resolved = true;
                    self.resolve_impact(ctx, audio, &mut outcome);
                }

                // Only a miss stays here: play out the splash, then end the turn
                if self.current_state == CatapultState::ProjectileHit {
                    if !self.animations.fire_miss.is_active() {
                        next = Some(CatapultState::Reset);
                    }
                    self.animations.fire_miss.update(ctx.dt);
                }
            }
            CatapultState::Hit => {
                if !self.animations.destroyed.is_active() && !self.animations.hit_smoke.is_active() {
                    if ctx.enemy_score >= ctx.win_score {
                        if !self.game_over {
                            log::info!(
                                "[Catapult] {} destroyed for the last time, game over",
                                self.id
                            );
                            outcome.events.push(CatapultEvent::GameOver { catapult: self.id });
                        }
                        self.game_over = true;
                    } else {
                        next = Some(CatapultState::Reset);
                    }
                }

                self.animations.destroyed.update(ctx.dt);
                self.animations.hit_smoke.update(ctx.dt);
            }
            CatapultState::Reset => {
                self.animation_running = false;
            }
        }

        self.last_update_state = self.current_state;
        if let Some(state) = next {
            self.current_state = state;
        }

        if self.current_state != state_before {
            log::debug!(
                "[Catapult] {} {} -> {}",
                self.id,
                state_before,
                self.current_state
            );
            outcome.events.push(CatapultEvent::StateChanged {
                catapult: self.id,
                from: state_before,
                to: self.current_state,
            });
        }

        outcome
    }

    fn aim_reached_shot_strength(&self) -> bool {
        let aim = &self.animations.aim;
        aim.frame_index() >= aim_frame_for_strength(aim.frame_count(), self.shot_strength)
            || !aim.is_active()
    }

    /// Pose the aim clip on the frame for the current shot strength.
    pub fn aim_at_shot_strength(&mut self) {
        let aim = &mut self.animations.aim;
        let frame = aim_frame_for_strength(aim.frame_count(), self.shot_strength);
        aim.set_frame_index(frame);
    }

    /// The further the arm was pulled back, the earlier in the swing it starts.
    fn start_firing_from_last_aim_position(&mut self) {
        let start = self
            .animations
            .aim
            .frame_count()
            .saturating_sub(self.animations.aim.frame_index());
        self.animations.fire.play_from_frame_index(start);
    }

    fn update_flight(&mut self, ctx: &TickContext, outcome: &mut StepOutcome) -> bool {
        if !self
            .projectile
            .update_flight(&ctx.ballistics, self.wind, ctx.dt)
        {
            return false;
        }

        self.animations.fire_miss.play_from_frame_index(0);
        let position = self
            .projectile
            .hit_position
            .unwrap_or(self.projectile.position);
        outcome.events.push(CatapultEvent::GroundHit {
            catapult: self.id,
            position,
        });
        true
    }

    /// Runs once per flight. A self hit moves this catapult to `Hit`, an enemy
    /// hit ends the turn at once and is handed to the battlefield.
    fn resolve_impact(
        &mut self,
        ctx: &TickContext,
        audio: &mut dyn AudioSink,
        outcome: &mut StepOutcome,
    ) {
        let sphere = BoundingSphere::new(self.projectile.position, self.projectile.radius);

        if sphere.intersects_aabb(&self.bounds()) && self.current_state != CatapultState::Hit {
            audio.play(SoundCue::CatapultExplosion, false);
            self.hit();
            outcome.impact = Some(Impact::SelfHit);
            return;
        }

        let enemy_hit = ctx
            .enemy
            .is_some_and(|enemy| sphere.intersects_aabb(&enemy.bounds) && !enemy.state.is_hit_immune());
        if enemy_hit {
            audio.play(SoundCue::CatapultExplosion, false);
            self.current_state = CatapultState::Reset;
            outcome.impact = Some(Impact::EnemyHit);
            return;
        }

        audio.play(SoundCue::BoulderHit, false);
        outcome.events.push(CatapultEvent::Missed { catapult: self.id });
    }
}
