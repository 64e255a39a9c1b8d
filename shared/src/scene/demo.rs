//! The small rotating-crop showcase: every catalog crop on one ring

use rand::Rng;
use serde::Serialize;
use std::f64::consts::TAU;

use super::instance::PlantPose;
use crate::models::{AnimationType, CropKind};
use crate::types::{Rgb, Vec3};

pub const PLANTS_PER_CROP: usize = 5;

const RING_RADIUS: f32 = 3.0;
const SUB_ANGLE_STEP: f32 = 0.2;
const SUB_RADIUS_STEP: f32 = 0.3;
/// Palette slots advanced per simulated second
const PALETTE_RATE: f64 = 0.2;

/// One plant of the showcase ring
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoPlant {
    pub crop: CropKind,
    /// Position within its crop's group of five
    pub index: usize,
    pub phase: f64,
    pub base_position: Vec3,
    pub pose: PlantPose,
}

impl DemoPlant {
    fn update(&mut self, t: f64) {
        let profile = self.crop.profile();
        let speed = profile.sway_speed;
        let amplitude = profile.sway_amplitude;
        let base_y = self.base_position.y;
        let wave = t * speed + self.phase;

        let mut position = self.base_position;
        let mut rotation = Vec3::ZERO;
        let mut scale = Vec3::ONE;

        match profile.animation {
            AnimationType::Sway => {
                rotation.z = wave.sin() as f32 * amplitude;
                position.y = base_y + (t * speed * 0.5).sin() as f32 * 0.1;
            }
            AnimationType::Bounce => {
                position.y = base_y + wave.sin().abs() as f32 * amplitude;
                scale.y = 1.0 + (t * speed * 2.0).sin() as f32 * 0.1;
            }
            AnimationType::Pulse => {
                let pulse = ((wave.sin() + 1.0) * 0.5) as f32;
                scale = Vec3::new(1.0 + pulse * 0.2, 1.0 + pulse * 0.1, 1.0 + pulse * 0.2);
            }
            AnimationType::Wave => {
                let index = self.index as f64;
                rotation.z = (wave + index * 0.5).sin() as f32 * amplitude;
                position.y = base_y + (t * speed * 2.0 + index * 0.8).sin() as f32 * 0.15;
            }
        }

        self.pose = PlantPose {
            position,
            rotation,
            scale,
            color: palette_color(&profile.seasonal_palette(), t),
            emissive: Rgb::BLACK,
        };
    }
}

/// Palette entry for simulated time `t`, stepping one slot every five seconds
pub fn palette_color(palette: &[Rgb], t: f64) -> Rgb {
    if palette.is_empty() {
        return Rgb::WHITE;
    }
    let position = (t * PALETTE_RATE).max(0.0);
    let index = position.floor() as usize % palette.len();
    let next = (index + 1) % palette.len();
    palette[index].lerp(palette[next], position.fract() as f32)
}

/// All catalog crops, five plants each, spread around a ring
#[derive(Debug, Clone)]
pub struct RotationDemo {
    plants: Vec<DemoPlant>,
}

impl RotationDemo {
    pub fn scatter<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let groups = CropKind::ALL.len() as f32;
        let mut plants = Vec::with_capacity(CropKind::ALL.len() * PLANTS_PER_CROP);

        for (group, crop) in CropKind::ALL.into_iter().enumerate() {
            let angle = group as f32 / groups * std::f32::consts::TAU;
            let height = crop.profile().height;

            for index in 0..PLANTS_PER_CROP {
                // Offsets run -2..=2 around the group's centre plant
                let offset = index as f32 - 2.0;
                let sub_angle = angle + offset * SUB_ANGLE_STEP;
                let sub_radius = RING_RADIUS + offset * SUB_RADIUS_STEP;
                let base_position = Vec3::new(
                    sub_angle.cos() * sub_radius,
                    height / 2.0,
                    sub_angle.sin() * sub_radius,
                );
                plants.push(DemoPlant {
                    crop,
                    index,
                    phase: rng.gen_range(0.0..TAU),
                    base_position,
                    pose: PlantPose {
                        position: base_position,
                        rotation: Vec3::ZERO,
                        scale: Vec3::ONE,
                        color: crop.profile().base_color(),
                        emissive: Rgb::BLACK,
                    },
                });
            }
        }

        Self { plants }
    }

    /// Pose every plant for simulated time `t` (seconds)
    pub fn update(&mut self, t: f64) {
        for plant in &mut self.plants {
            plant.update(t);
        }
    }

    pub fn plants(&self) -> &[DemoPlant] {
        &self.plants
    }
}
