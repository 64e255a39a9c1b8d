//! Weather effect controller
//!
//! At most one effect is active. Activating any kind first reverts whatever
//! is active, so repeated activation of the same kind lands in the same state.
//! Timed effects carry their own deadline, checked by [`EffectController::poll`]
//! on every frame; a superseded effect's deadline disappears with it.

use rand::Rng;
use serde::Serialize;

use super::instance::AnimationInstance;
use super::Lighting;
use crate::models::{WeatherKind, RAIN, SUNLIGHT, WIND};
use crate::types::{Millis, Rgb, Vec3};

/// One falling drop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raindrop {
    pub position: Vec3,
    /// Units fallen per tick
    pub fall_speed: f32,
}

/// Fixed-size particle set recycled as drops reach the ground
#[derive(Debug, Clone)]
pub struct RainShower {
    drops: Vec<Raindrop>,
}

impl RainShower {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let drops = (0..RAIN.particles)
            .map(|_| Raindrop {
                position: Vec3::new(
                    rng.gen_range(-RAIN.spread..RAIN.spread),
                    rng.gen_range(RAIN.spawn_min_y..RAIN.spawn_max_y),
                    rng.gen_range(-RAIN.spread..RAIN.spread),
                ),
                fall_speed: rng.gen_range(RAIN.min_fall_speed..RAIN.max_fall_speed),
            })
            .collect();
        Self { drops }
    }

    /// Move every drop down one tick, recycling drops below the ground
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for drop in &mut self.drops {
            drop.position.y -= drop.fall_speed;
            if drop.position.y < RAIN.ground_y {
                drop.position = Vec3::new(
                    rng.gen_range(-RAIN.spread..RAIN.spread),
                    RAIN.respawn_y,
                    rng.gen_range(-RAIN.spread..RAIN.spread),
                );
            }
        }
    }

    pub fn drops(&self) -> &[Raindrop] {
        &self.drops
    }
}

/// The effect currently applied to the scene
#[derive(Debug, Clone)]
pub enum ActiveEffect {
    Rain(RainShower),
    Wind { expires_at: Millis },
    Sunlight { expires_at: Millis },
}

impl ActiveEffect {
    pub fn kind(&self) -> WeatherKind {
        match self {
            ActiveEffect::Rain(_) => WeatherKind::Rain,
            ActiveEffect::Wind { .. } => WeatherKind::Wind,
            ActiveEffect::Sunlight { .. } => WeatherKind::Sunlight,
        }
    }
}

/// Observable controller state
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EffectState {
    Idle,
    Rain,
    Wind,
    Sunlight,
}

#[derive(Debug, Default)]
pub struct EffectController {
    active: Option<ActiveEffect>,
}

impl EffectController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EffectState {
        match &self.active {
            None => EffectState::Idle,
            Some(ActiveEffect::Rain(_)) => EffectState::Rain,
            Some(ActiveEffect::Wind { .. }) => EffectState::Wind,
            Some(ActiveEffect::Sunlight { .. }) => EffectState::Sunlight,
        }
    }

    /// Active effects; never more than one
    pub fn active_effects(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.active.iter()
    }

    pub fn rain(&self) -> Option<&RainShower> {
        match &self.active {
            Some(ActiveEffect::Rain(shower)) => Some(shower),
            _ => None,
        }
    }

    /// Replace the active effect with `kind`
    pub fn activate<R: Rng + ?Sized>(
        &mut self,
        kind: WeatherKind,
        now: Millis,
        instances: &mut [AnimationInstance],
        lighting: &mut Lighting,
        rng: &mut R,
    ) {
        self.clear(instances, lighting);

        self.active = match kind {
            WeatherKind::Rain => Some(ActiveEffect::Rain(RainShower::new(rng))),
            WeatherKind::Wind => Some(ActiveEffect::Wind {
                expires_at: now + WIND.duration_ms,
            }),
            WeatherKind::Sunlight => {
                lighting.intensity = SUNLIGHT.intensity;
                lighting.color = Rgb::from_hex(SUNLIGHT.tint);
                Some(ActiveEffect::Sunlight {
                    expires_at: now + SUNLIGHT.duration_ms,
                })
            }
            WeatherKind::Clear => None,
        };
        self.adopt(instances);

        tracing::debug!(weather = kind.key(), plants = instances.len(), "Weather effect activated");
    }

    /// Apply the active effect's per-plant modifiers, e.g. to a freshly built scene
    pub fn adopt(&self, instances: &mut [AnimationInstance]) {
        match &self.active {
            Some(ActiveEffect::Rain(_)) => {
                for instance in instances {
                    instance.rain_intensity = RAIN.intensity;
                }
            }
            Some(ActiveEffect::Wind { .. }) => {
                for instance in instances {
                    instance.apply_wind(WIND.strength);
                }
            }
            Some(ActiveEffect::Sunlight { .. }) => {
                let glow = Rgb::from_hex(SUNLIGHT.glow);
                for instance in instances {
                    instance.emissive = glow;
                }
            }
            None => {}
        }
    }

    /// Revert the active effect and reset every plant to neutral modifiers
    pub fn clear(&mut self, instances: &mut [AnimationInstance], lighting: &mut Lighting) {
        if let Some(ActiveEffect::Sunlight { .. }) = self.active {
            lighting.reset_neutral();
        }
        self.active = None;

        for instance in instances {
            if instance.original_sway_amplitude.is_some() {
                instance.restore_wind(WIND.strength);
            }
            instance.reset_modifiers();
        }
    }

    /// Run the reversion of a timed effect whose deadline has passed.
    ///
    /// Returns the kind that expired, if any.
    pub fn poll(
        &mut self,
        now: Millis,
        instances: &mut [AnimationInstance],
        lighting: &mut Lighting,
    ) -> Option<WeatherKind> {
        let expired = match self.active {
            Some(ActiveEffect::Wind { expires_at }) if now >= expires_at => WeatherKind::Wind,
            Some(ActiveEffect::Sunlight { expires_at }) if now >= expires_at => {
                WeatherKind::Sunlight
            }
            _ => return None,
        };

        match expired {
            WeatherKind::Wind => {
                for instance in instances.iter_mut() {
                    instance.restore_wind(WIND.strength);
                }
            }
            _ => {
                lighting.reset_neutral();
                for instance in instances.iter_mut() {
                    instance.emissive = Rgb::BLACK;
                }
            }
        }
        self.active = None;

        tracing::debug!(weather = expired.key(), "Weather effect expired");
        Some(expired)
    }

    /// Per-tick particle motion
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(ActiveEffect::Rain(shower)) = &mut self.active {
            shower.step(rng);
        }
    }
}
