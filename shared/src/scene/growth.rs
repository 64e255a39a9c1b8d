//! One-shot transitions of every plant to a named growth stage

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::instance::AnimationInstance;
use crate::error::DomainError;
use crate::types::Millis;

/// Length of a stage transition on the wall clock
pub const TRANSITION_MS: Millis = 2000.0;

/// Growth stages offered by the visualizer controls
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Seedling,
    Growth,
    Mature,
    Harvest,
}

impl GrowthStage {
    pub fn target(&self) -> f32 {
        match self {
            GrowthStage::Seedling => 0.2,
            GrowthStage::Growth => 0.5,
            GrowthStage::Mature => 1.0,
            GrowthStage::Harvest => 0.8,
        }
    }
}

impl FromStr for GrowthStage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "seedling" => Ok(GrowthStage::Seedling),
            "growth" => Ok(GrowthStage::Growth),
            "mature" => Ok(GrowthStage::Mature),
            "harvest" => Ok(GrowthStage::Harvest),
            other => Err(DomainError::UnknownGrowthStage(other.to_string())),
        }
    }
}

/// Linear interpolation of every plant's stage towards a target
#[derive(Debug, Clone)]
pub struct GrowthTransition {
    generation: u32,
    target: f32,
    started_at: Millis,
    /// Starting stage of each plant, indexed like the scene's instances
    from: Vec<f32>,
}

impl GrowthTransition {
    pub fn start(
        generation: u32,
        stage: GrowthStage,
        instances: &[AnimationInstance],
        now: Millis,
    ) -> Self {
        Self {
            generation,
            target: stage.target(),
            started_at: now,
            from: instances.iter().map(|i| i.growth_stage()).collect(),
        }
    }

    /// Scene generation the transition was started against
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn progress(&self, now: Millis) -> f32 {
        ((now - self.started_at) / TRANSITION_MS).clamp(0.0, 1.0) as f32
    }

    /// Write interpolated stages; returns `true` once the window has closed
    pub fn apply(&self, instances: &mut [AnimationInstance], now: Millis) -> bool {
        let progress = self.progress(now);
        for (instance, &from) in instances.iter_mut().zip(&self.from) {
            instance.set_growth_stage(from + (self.target - from) * progress);
        }
        progress >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CropKind;
    use crate::types::{PlantId, Vec3};

    fn plants(stages: &[f32]) -> Vec<AnimationInstance> {
        stages
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                AnimationInstance::new(
                    PlantId { generation: 1, index: i as u32 },
                    CropKind::Legumes,
                    0,
                    i,
                    Vec3::ZERO,
                    0.0,
                    s,
                )
            })
            .collect()
    }

    #[test]
    fn test_parse_stages() {
        assert_eq!("harvest".parse::<GrowthStage>(), Ok(GrowthStage::Harvest));
        assert!("flowering".parse::<GrowthStage>().is_err());
    }

    #[test]
    fn test_interpolates_over_two_seconds() {
        let mut instances = plants(&[0.0, 1.0]);
        let transition = GrowthTransition::start(1, GrowthStage::Growth, &instances, 1000.0);

        assert!(!transition.apply(&mut instances, 2000.0));
        assert!((instances[0].growth_stage() - 0.25).abs() < 1e-6);
        assert!((instances[1].growth_stage() - 0.75).abs() < 1e-6);

        assert!(transition.apply(&mut instances, 3000.0));
        assert_eq!(instances[0].growth_stage(), 0.5);
        assert_eq!(instances[1].growth_stage(), 0.5);
    }

    #[test]
    fn test_late_frames_stay_at_target() {
        let mut instances = plants(&[0.9]);
        let transition = GrowthTransition::start(1, GrowthStage::Seedling, &instances, 0.0);
        assert!(transition.apply(&mut instances, 60_000.0));
        assert!((instances[0].growth_stage() - 0.2).abs() < 1e-6);
    }
}
