//! Animation definition sheet.
//!
//! Definitions are JSON records mirroring the catapult sprite sheets. Each
//! catapult keeps the definitions whose `IsAI` filter matches its side (or
//! that have no filter) and must end up with every clip in [`ClipName`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::clip::Animation;
use crate::error::{CatapultError, Result};

/// One sprite-sheet clip definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnimationDefinition {
    /// Name the state machine looks the clip up by (e.g. "Fire")
    pub alias: String,
    /// Texture asset of the sheet. Kept for hosts that draw.
    pub sheet_name: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub sheet_columns: u32,
    pub sheet_rows: u32,
    /// Frames per second
    pub speed: u32,
    /// Frame at which a follow-up sequence starts (the release frame of "Fire")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_frame: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<i32>,
    /// `Some(true)` for AI-only sheets, `Some(false)` for human-only, `None` for both
    #[serde(rename = "IsAI", default, skip_serializing_if = "Option::is_none")]
    pub is_ai: Option<bool>,
}

impl AnimationDefinition {
    fn applies_to(&self, is_ai: bool) -> bool {
        self.is_ai.is_none_or(|filter| filter == is_ai)
    }

    fn build(&self) -> Result<Animation> {
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(CatapultError::InvalidClip {
                alias: self.alias.clone(),
                message: "frame size is zero".to_string(),
            });
        }
        if self.sheet_columns == 0 || self.sheet_rows == 0 {
            return Err(CatapultError::InvalidClip {
                alias: self.alias.clone(),
                message: "sheet has no frames".to_string(),
            });
        }
        if self.speed == 0 {
            return Err(CatapultError::InvalidClip {
                alias: self.alias.clone(),
                message: "speed must be at least one frame per second".to_string(),
            });
        }

        let mut animation = Animation::new(
            Vec2::new(self.frame_width as f32, self.frame_height as f32),
            self.sheet_columns as usize,
            self.sheet_rows as usize,
            self.speed,
        );
        if let (Some(x), Some(y)) = (self.offset_x, self.offset_y) {
            animation.offset = Vec2::new(x as f32, y as f32);
        }
        Ok(animation)
    }
}

/// Clips the catapult state machine drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipName {
    Aim,
    Fire,
    FireMiss,
    Destroyed,
    HitSmoke,
}

impl ClipName {
    pub const ALL: [ClipName; 5] = [
        ClipName::Aim,
        ClipName::Fire,
        ClipName::FireMiss,
        ClipName::Destroyed,
        ClipName::HitSmoke,
    ];

    /// Alias used in definition sheets.
    pub fn alias(&self) -> &'static str {
        match self {
            ClipName::Aim => "Aim",
            ClipName::Fire => "Fire",
            ClipName::FireMiss => "fireMiss",
            ClipName::Destroyed => "Destroyed",
            ClipName::HitSmoke => "hitSmoke",
        }
    }

    pub fn from_alias(alias: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|clip| clip.alias() == alias)
    }
}

/// The clips of one catapult, resolved at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSet {
    pub aim: Animation,
    pub fire: Animation,
    pub fire_miss: Animation,
    pub destroyed: Animation,
    pub hit_smoke: Animation,
    /// "Fire" frame at which the boulder leaves the bucket
    pub fire_split_frame: usize,
}

impl AnimationSet {
    /// Resolve the clips for one side from a definition sheet.
    ///
    /// Definitions for other sides are skipped, unknown aliases are ignored,
    /// and a missing clip or release frame is an error.
    pub fn from_definitions(definitions: &[AnimationDefinition], is_ai: bool) -> Result<Self> {
        let mut slots: [Option<Animation>; 5] = Default::default();
        let mut fire_split_frame = None;

        for definition in definitions.iter().filter(|d| d.applies_to(is_ai)) {
            let Some(clip) = ClipName::from_alias(&definition.alias) else {
                log::debug!("[Animation] ignoring unused clip {:?}", definition.alias);
                continue;
            };

            let slot = &mut slots[clip as usize];
            if slot.is_some() {
                return Err(CatapultError::DuplicateClip(definition.alias.clone()));
            }
            let animation = definition.build()?;

            if clip == ClipName::Fire {
                let split = definition
                    .split_frame
                    .ok_or_else(|| CatapultError::MissingSplitFrame(definition.alias.clone()))?
                    as usize;
                if split >= animation.frame_count() {
                    return Err(CatapultError::InvalidClip {
                        alias: definition.alias.clone(),
                        message: format!(
                            "split frame {} outside {} frames",
                            split,
                            animation.frame_count()
                        ),
                    });
                }
                fire_split_frame = Some(split);
            }

            *slot = Some(animation);
        }

        let [aim, fire, fire_miss, destroyed, hit_smoke] = slots;
        let take = |slot: Option<Animation>, clip: ClipName| {
            slot.ok_or_else(|| CatapultError::MissingClip {
                alias: clip.alias().to_string(),
                is_ai,
            })
        };

        Ok(Self {
            aim: take(aim, ClipName::Aim)?,
            fire: take(fire, ClipName::Fire)?,
            fire_miss: take(fire_miss, ClipName::FireMiss)?,
            destroyed: take(destroyed, ClipName::Destroyed)?,
            hit_smoke: take(hit_smoke, ClipName::HitSmoke)?,
            fire_split_frame: fire_split_frame
                .ok_or_else(|| CatapultError::MissingSplitFrame(ClipName::Fire.alias().to_string()))?,
        })
    }
}

/// Parse a definition sheet from JSON text.
pub fn parse_definitions(json: &str) -> Result<Vec<AnimationDefinition>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a definition sheet from a JSON file.
pub fn load_definitions(path: &Path) -> Result<Vec<AnimationDefinition>> {
    let text = std::fs::read_to_string(path).map_err(|e| CatapultError::io(path, e))?;
    let definitions = parse_definitions(&text)?;
    log::info!(
        "[Animation] loaded {} clip definitions from {}",
        definitions.len(),
        path.display()
    );
    Ok(definitions)
}

/// Built-in definition sheet for the blue (human) and red (AI) catapults.
pub fn default_definitions() -> Vec<AnimationDefinition> {
    let def = |alias: &str,
               sheet: &str,
               frame: (u32, u32),
               sheet_size: (u32, u32),
               speed: u32,
               is_ai: Option<bool>| AnimationDefinition {
        alias: alias.to_string(),
        sheet_name: sheet.to_string(),
        frame_width: frame.0,
        frame_height: frame.1,
        sheet_columns: sheet_size.0,
        sheet_rows: sheet_size.1,
        speed,
        split_frame: None,
        offset_x: None,
        offset_y: None,
        is_ai,
    };

    let mut definitions = Vec::new();
    for (is_ai, color) in [(false, "Blue/blue"), (true, "Red/red")] {
        definitions.push(def(
            "Aim",
            &format!("Textures/Catapults/{color}Pullback"),
            (75, 60),
            (18, 1),
            30,
            Some(is_ai),
        ));
        let mut fire = def(
            "Fire",
            &format!("Textures/Catapults/{color}Fire"),
            (75, 60),
            (10, 3),
            30,
            Some(is_ai),
        );
        fire.split_frame = Some(20);
        definitions.push(fire);
        definitions.push(def(
            "Destroyed",
            &format!("Textures/Catapults/{color}Destroyed"),
            (122, 62),
            (5, 3),
            20,
            Some(is_ai),
        ));
    }

    let mut fire_miss = def("fireMiss", "Textures/Catapults/fireMiss", (90, 80), (10, 1), 20, None);
    fire_miss.offset_x = Some(-40);
    fire_miss.offset_y = Some(-50);
    definitions.push(fire_miss);

    let mut hit_smoke = def("hitSmoke", "Textures/Catapults/smoke", (128, 128), (4, 3), 20, None);
    hit_smoke.offset_x = Some(-30);
    hit_smoke.offset_y = Some(-80);
    definitions.push(hit_smoke);

    definitions
}
