//! Per-plant animation state and the per-frame pose update

use serde::Serialize;
use std::f64::consts::TAU;

use crate::models::{AnimationType, CropKind, CropProfile};
use crate::types::{PlantId, Rgb, Vec3};

/// Seasonal palette period is `TAU / SEASONAL_RATE` seconds
const SEASONAL_RATE: f64 = 0.1;

/// Fraction of full height a plant shows at growth stage zero
const SEEDLING_SCALE: f32 = 0.1;

/// Where and how a plant is drawn this frame
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlantPose {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub color: Rgb,
    pub emissive: Rgb,
}

/// Animation state for one rendered plant
#[derive(Debug, Clone)]
pub struct AnimationInstance {
    pub plant: PlantId,
    pub crop: CropKind,
    pub row: usize,
    pub col: usize,
    pub base_position: Vec3,
    pub phase: f64,
    growth_stage: f32,
    /// Working copy of the catalog amplitude; wind scales this, never the catalog
    pub sway_amplitude: f32,
    /// Amplitude captured when wind first scaled this plant
    pub original_sway_amplitude: Option<f32>,
    pub rain_intensity: f32,
    pub wind_strength: f32,
    pub seasonal_multiplier: f32,
    pub emissive: Rgb,
    pose: PlantPose,
}

impl AnimationInstance {
    pub fn new(
        plant: PlantId,
        crop: CropKind,
        row: usize,
        col: usize,
        base_position: Vec3,
        phase: f64,
        growth_stage: f32,
    ) -> Self {
        let profile = crop.profile();
        let mut instance = Self {
            plant,
            crop,
            row,
            col,
            base_position,
            phase,
            growth_stage: growth_stage.clamp(0.0, 1.0),
            sway_amplitude: profile.sway_amplitude,
            original_sway_amplitude: None,
            rain_intensity: 1.0,
            wind_strength: 1.0,
            seasonal_multiplier: 1.0,
            emissive: Rgb::BLACK,
            pose: PlantPose {
                position: base_position,
                rotation: Vec3::ZERO,
                scale: Vec3::ONE,
                color: profile.base_color(),
                emissive: Rgb::BLACK,
            },
        };
        instance.pose.scale.y = growth_scale(instance.growth_stage);
        instance
    }

    pub fn profile(&self) -> &'static CropProfile {
        self.crop.profile()
    }

    pub fn growth_stage(&self) -> f32 {
        self.growth_stage
    }

    /// Set the growth stage, clamped to [0, 1]
    pub fn set_growth_stage(&mut self, stage: f32) {
        self.growth_stage = stage.clamp(0.0, 1.0);
    }

    pub fn pose(&self) -> &PlantPose {
        &self.pose
    }

    /// Back to neutral weather modifiers. Wind amplitude is restored separately.
    pub fn reset_modifiers(&mut self) {
        self.rain_intensity = 1.0;
        self.wind_strength = 1.0;
        self.emissive = Rgb::BLACK;
    }

    /// Scale the sway amplitude by `strength`, capturing the pre-wind value once
    pub fn apply_wind(&mut self, strength: f32) {
        let original = *self
            .original_sway_amplitude
            .get_or_insert(self.sway_amplitude);
        self.sway_amplitude = original * strength;
        self.wind_strength = strength;
    }

    /// Undo [`apply_wind`](Self::apply_wind).
    ///
    /// Falls back to dividing out `strength` when no original was captured.
    pub fn restore_wind(&mut self, strength: f32) {
        self.sway_amplitude = match self.original_sway_amplitude.take() {
            Some(original) => original,
            None if self.wind_strength != 1.0 => self.sway_amplitude / strength,
            None => self.sway_amplitude,
        };
        self.wind_strength = 1.0;
    }

    /// Advance one render tick at simulated time `t` (seconds)
    pub fn update(&mut self, t: f64) {
        let profile = self.crop.profile();
        let speed = profile.sway_speed;
        let amplitude = self.sway_amplitude * self.rain_intensity;
        let base_y = self.base_position.y;

        let mut position = self.base_position;
        let mut rotation = Vec3::ZERO;
        let mut scale = Vec3::ONE;

        match profile.animation {
            AnimationType::Sway => {
                rotation.z = (t * speed + self.phase).sin() as f32 * amplitude;
                rotation.x = (t * speed * 0.7 + self.phase).cos() as f32 * amplitude * 0.5;
            }
            AnimationType::Bounce => {
                let bounce = (t * speed + self.phase).sin().abs() as f32;
                position.y = base_y + bounce * amplitude * 0.5;
                scale.y = 1.0 + bounce * 0.2;
            }
            AnimationType::Pulse => {
                let pulse = (((t * speed + self.phase).sin() + 1.0) * 0.5) as f32;
                scale.x = 1.0 + pulse * 0.3;
                scale.z = 1.0 + pulse * 0.3;
                position.y = base_y - pulse * 0.1;
            }
            AnimationType::Wave => {
                let row = self.row as f64;
                let col = self.col as f64;
                rotation.z = (t * speed + self.phase + row * 0.5).sin() as f32 * amplitude;
                position.y = base_y + (t * speed * 2.0 + col * 0.8).sin() as f32 * 0.1;
            }
        }

        self.growth_stage = (self.growth_stage + profile.growth_rate * 0.01).min(1.0);
        scale.y *= growth_scale(self.growth_stage);

        self.pose = PlantPose {
            position,
            rotation,
            scale,
            color: seasonal_color(&profile.seasonal_palette(), t),
            emissive: self.emissive,
        };
    }
}

/// Vertical scale for a growth stage: 10% at zero, full height at one
pub fn growth_scale(stage: f32) -> f32 {
    SEEDLING_SCALE + stage * (1.0 - SEEDLING_SCALE)
}

/// Palette slot and blend fraction for simulated time `t`.
///
/// An empty palette yields slot zero with no blend.
pub fn seasonal_blend(palette_len: usize, t: f64) -> (usize, usize, f32) {
    if palette_len == 0 {
        return (0, 0, 0.0);
    }
    let cycle = (t * SEASONAL_RATE).rem_euclid(TAU) / TAU;
    let position = cycle * palette_len as f64;
    let index = (position.floor() as usize).min(palette_len - 1);
    let next = (index + 1) % palette_len;
    (index, next, position.fract() as f32)
}

/// Color cycling through `palette`, interpolating between neighbouring entries
pub fn seasonal_color(palette: &[Rgb], t: f64) -> Rgb {
    let (index, next, blend) = seasonal_blend(palette.len(), t);
    match (palette.get(index), palette.get(next)) {
        (Some(&from), Some(&to)) => from.lerp(to, blend),
        _ => Rgb::WHITE,
    }
}
