//! Catapult Tests - Turn State Machine, Scoring and Game Over
//!
//! Drives catapults through the public API, alone and inside a battlefield,
//! and checks the turn rules that hold across every state.

use catapult_wars_engine::animation::{AnimationSet, default_definitions};
use catapult_wars_engine::audio::{RecordingAudio, SilentAudio, SoundCue};
use catapult_wars_engine::game::{
    Battlefield, Catapult, CatapultEvent, CatapultId, CatapultState, GameConfig, PlayerId,
    PlayerKind, TickContext, aim_frame_for_strength,
};
use catapult_wars_engine::physics::Projectile;
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn lone_catapult(is_ai: bool) -> (Catapult, GameConfig) {
    let config = GameConfig::default();
    let placement = if is_ai { config.ai } else { config.human };
    let catapult = Catapult::new(
        CatapultId(0),
        PlayerId(0),
        is_ai,
        placement,
        AnimationSet::from_definitions(&default_definitions(), is_ai).unwrap(),
        config.projectile_radius,
    );
    (catapult, config)
}

/// Human on the left, AI on the right, paired up.
fn battlefield() -> (Battlefield, PlayerId, PlayerId) {
    let config = GameConfig::default();
    let defs = default_definitions();
    let mut field = Battlefield::new(config.clone());
    let human = field.add_player(
        "Player",
        PlayerKind::Human,
        config.human,
        AnimationSet::from_definitions(&defs, false).unwrap(),
    );
    let ai = field.add_player(
        "Phone",
        PlayerKind::Ai,
        config.ai,
        AnimationSet::from_definitions(&defs, true).unwrap(),
    );
    field.set_enemies(human, ai).unwrap();
    field.validate().unwrap();
    (field, human, ai)
}

/// Put `shooter`'s boulder in the air right above the middle of `target`.
fn drop_boulder_on(field: &mut Battlefield, shooter: PlayerId, target: PlayerId) {
    let target_bounds = field.catapult_of(target).unwrap().bounds();
    let c = field.catapult_of_mut(shooter).unwrap();
    let p = c.projectile_mut();
    p.start_position = target_bounds.min + Vec2::new(30.0, 40.0);
    p.velocity = Vec2::ZERO;
    p.launch();
    c.set_state(CatapultState::ProjectileFlying);
}

/// Everything a tick could change.
type Snapshot = (
    CatapultState,
    CatapultState,
    bool,
    bool,
    Projectile,
    AnimationSet,
);

fn snapshot(c: &Catapult) -> Snapshot {
    (
        c.state(),
        c.last_update_state(),
        c.is_animation_running(),
        c.is_game_over(),
        *c.projectile(),
        c.animations().clone(),
    )
}

// ============================================================================
// Zero-Delta Ticks
// ============================================================================

#[test]
fn test_zero_delta_ticks_change_nothing_in_any_state() {
    let states = [
        CatapultState::Idle,
        CatapultState::Aiming,
        CatapultState::Stalling,
        CatapultState::Firing,
        CatapultState::FiringAndFlying,
        CatapultState::ProjectileFlying,
        CatapultState::ProjectileHit,
        CatapultState::Hit,
        CatapultState::Reset,
    ];

    for is_ai in [false, true] {
        for state in states {
            let (mut c, config) = lone_catapult(is_ai);
            c.set_shot_strength(0.5);
            c.fire(250.0);
            c.set_state(state);

            let before = snapshot(&c);
            let mut audio = RecordingAudio::new();
            let ctx = TickContext::new(0.0, &config);
            assert!(c.step(&ctx, &mut audio).events.is_empty());
            assert!(c.step(&ctx, &mut audio).events.is_empty());
            assert_eq!(snapshot(&c), before, "state {} changed on dt=0", state);
            assert!(audio.calls.is_empty());
        }
    }
}

#[test]
fn test_nan_tick_does_not_strand_boulder() {
    let (mut field, human, ai) = battlefield();
    drop_boulder_on(&mut field, human, ai);
    let shooter = field.player(human).unwrap().catapult;

    field.update_catapult(shooter, DT, &mut SilentAudio).unwrap();
    let before = snapshot(field.catapult(shooter).unwrap());
    assert!(field.update_catapult(shooter, f32::NAN, &mut SilentAudio).unwrap().is_empty());
    assert_eq!(snapshot(field.catapult(shooter).unwrap()), before);

    for _ in 0..600 {
        field.update_catapult(shooter, DT, &mut SilentAudio).unwrap();
    }
    assert_eq!(field.score(human).unwrap(), 1);
    assert!(field.catapult(shooter).unwrap().projectile().position.is_finite());
}

// ============================================================================
// One Transition Per Tick
// ============================================================================

#[test]
fn test_ai_turn_takes_one_transition_per_tick() {
    let (mut c, config) = lone_catapult(true);
    c.set_shot_strength(0.7);
    c.shot_velocity = 280.0;
    c.set_state(CatapultState::Aiming);
    let ctx = TickContext::new(DT, &config);

    let mut path = vec![c.state()];
    for _ in 0..2000 {
        let events = c.step(&ctx, &mut SilentAudio).events;
        let changes: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                CatapultEvent::StateChanged { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert!(changes.len() <= 1, "several transitions in one tick: {:?}", changes);
        if let Some((from, to)) = changes.first() {
            assert_eq!(*from, *path.last().unwrap());
            path.push(*to);
        }
        if c.state() == CatapultState::Reset {
            break;
        }
    }

    assert_eq!(
        path,
        vec![
            CatapultState::Aiming,
            CatapultState::Stalling,
            CatapultState::Firing,
            CatapultState::FiringAndFlying,
            CatapultState::ProjectileFlying,
            CatapultState::ProjectileHit,
            CatapultState::Reset,
        ]
    );
}

// ============================================================================
// Aim Frames
// ============================================================================

#[test]
fn test_human_aim_frame_is_floor_of_strength() {
    let (mut c, config) = lone_catapult(false);
    c.set_state(CatapultState::Aiming);
    let ctx = TickContext::new(DT, &config);
    let count = c.animations().aim.frame_count();

    for strength in [0.0_f32, 0.05, 0.2, 0.33, 0.5, 0.72, 0.94, 0.999, 1.0] {
        c.set_shot_strength(strength);
        c.step(&ctx, &mut SilentAudio);
        let expected = ((count as f32 * strength).floor() as usize).min(count - 1);
        assert_eq!(c.animations().aim.frame_index(), expected, "strength {}", strength);
    }
}

#[test]
fn test_aim_frame_boundaries() {
    assert_eq!(aim_frame_for_strength(18, 0.0), 0);
    assert_eq!(aim_frame_for_strength(18, 1.0), 17);
    assert_eq!(aim_frame_for_strength(1, 1.0), 0);
}

#[test]
fn test_stronger_aim_starts_swing_later() {
    let start_frame = |strength: f32| {
        let (mut c, config) = lone_catapult(false);
        let ctx = TickContext::new(DT, &config);
        c.set_state(CatapultState::Aiming);
        c.set_shot_strength(strength);
        c.step(&ctx, &mut SilentAudio);
        c.fire(200.0);
        c.set_state(CatapultState::Firing);
        c.step(&ctx, &mut SilentAudio);
        c.animations().fire.frame_index()
    };

    // A full pull-back starts the swing from its first frames
    assert!(start_frame(0.0) > start_frame(1.0));
}

// ============================================================================
// Impacts And Scoring
// ============================================================================

#[test]
fn test_enemy_is_hit_once_per_impact() {
    let (mut field, human, ai) = battlefield();
    drop_boulder_on(&mut field, human, ai);
    let shooter = field.player(human).unwrap().catapult;

    let mut audio = RecordingAudio::new();
    let mut hits = 0;
    for _ in 0..600 {
        let events = field.update_catapult(shooter, DT, &mut audio).unwrap();
        hits += events.iter().filter(|e| e.is_hit()).count();
    }

    assert_eq!(hits, 1);
    assert_eq!(field.score(human).unwrap(), 1);
    assert_eq!(audio.play_count(SoundCue::CatapultExplosion), 1);
    assert_eq!(field.catapult_of(ai).unwrap().state(), CatapultState::Hit);
}

#[test]
fn test_destroyed_catapult_cannot_be_hit_again() {
    let (mut field, human, ai) = battlefield();
    field.catapult_of_mut(ai).unwrap().hit();
    drop_boulder_on(&mut field, human, ai);
    let shooter = field.player(human).unwrap().catapult;

    let mut missed = false;
    for _ in 0..600 {
        let events = field.update_catapult(shooter, DT, &mut SilentAudio).unwrap();
        assert!(!events.iter().any(CatapultEvent::is_hit));
        missed |= events
            .iter()
            .any(|e| matches!(e, CatapultEvent::Missed { .. }));
    }
    assert!(missed);
    assert_eq!(field.score(human).unwrap(), 0);
}

#[test]
fn test_self_hit_scores_for_enemy() {
    let (mut field, human, ai) = battlefield();
    drop_boulder_on(&mut field, human, human);
    let shooter = field.player(human).unwrap().catapult;

    let mut audio = RecordingAudio::new();
    let mut self_hits = 0;
    for _ in 0..120 {
        for event in field.update_catapult(shooter, DT, &mut audio).unwrap() {
            if let CatapultEvent::CatapultHit {
                victim,
                scorer,
                self_hit,
                ..
            } = event
            {
                assert!(self_hit);
                assert_eq!(victim, shooter);
                assert_eq!(scorer, ai);
                self_hits += 1;
            }
        }
        if field.catapult_of(human).unwrap().state() == CatapultState::Hit {
            break;
        }
    }

    assert_eq!(self_hits, 1);
    assert_eq!(field.score(ai).unwrap(), 1);
    assert_eq!(field.score(human).unwrap(), 0);
    assert_eq!(audio.play_count(SoundCue::CatapultExplosion), 1);
}

#[test]
fn test_destroyed_catapult_resets_below_win_score() {
    let (mut field, human, ai) = battlefield();
    drop_boulder_on(&mut field, human, ai);
    let ai_catapult = field.player(ai).unwrap().catapult;

    for _ in 0..600 {
        field.update_all(DT, &mut SilentAudio).unwrap();
    }

    let victim = field.catapult(ai_catapult).unwrap();
    assert_eq!(victim.state(), CatapultState::Reset);
    assert!(!victim.is_game_over());
    assert!(!field.any_animation_running());
}

// ============================================================================
// Game Over
// ============================================================================

#[test]
fn test_fifth_point_ends_game_without_reset() {
    let (mut field, human, ai) = battlefield();
    field.player_mut(human).unwrap().score = 4;
    drop_boulder_on(&mut field, human, ai);
    let ai_catapult = field.player(ai).unwrap().catapult;

    let mut game_over_events = 0;
    for _ in 0..1200 {
        for event in field.update_all(DT, &mut SilentAudio).unwrap() {
            if let CatapultEvent::StateChanged { catapult, to, .. } = event {
                assert!(
                    !(catapult == ai_catapult && to == CatapultState::Reset),
                    "destroyed catapult reset after the winning hit"
                );
            }
            if matches!(event, CatapultEvent::GameOver { .. }) {
                game_over_events += 1;
            }
        }
    }

    assert_eq!(field.score(human).unwrap(), 5);
    let victim = field.catapult(ai_catapult).unwrap();
    assert!(victim.is_game_over());
    assert_eq!(victim.state(), CatapultState::Hit);
    assert_eq!(game_over_events, 1);
    assert!(field.any_game_over());
}
