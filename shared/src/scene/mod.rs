//! Farm visualizer animation layer
//!
//! [`FarmVisualizer`] is the owned context behind the rotation demo: it holds
//! the current scene generation, the weather effect, the sun and the season
//! cycle. The page calls [`FarmVisualizer::frame`] once per animation frame and
//! then hands the result to a [`RenderBackend`].

mod ambient;
mod composer;
mod demo;
mod effects;
mod growth;
mod instance;
mod season;

pub use ambient::*;
pub use composer::*;
pub use demo::*;
pub use effects::*;
pub use growth::*;
pub use instance::*;
pub use season::*;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::models::{
    CropDetail, CropProfile, RotationCycle, Season, WeatherKind, NEUTRAL_LIGHT_INTENSITY,
};
use crate::types::{Millis, PlantId, Rgb, Vec3};

/// The scene's main directional light
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Lighting {
    pub intensity: f32,
    pub color: Rgb,
}

impl Lighting {
    pub fn reset_neutral(&mut self) {
        *self = Self::default();
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            intensity: NEUTRAL_LIGHT_INTENSITY,
            color: Rgb::WHITE,
        }
    }
}

/// Size of the canvas the scene is projected onto
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Whatever draws the scene (WebGL on the page, a recorder in tests)
pub trait RenderBackend {
    fn begin_frame(&mut self, _viewport: &Viewport, _sun: &Lighting) {}
    fn draw_plot(&mut self, plot: &Plot);
    fn draw_plant(&mut self, plant: PlantId, crop: &CropProfile, pose: &PlantPose);
    fn draw_rain(&mut self, drops: &[Raindrop]);
}

/// Owned state of the crop rotation visualizer
pub struct FarmVisualizer {
    composer: SceneComposer,
    effects: EffectController,
    lighting: Lighting,
    seasons: SeasonalCycle,
    growth: Option<GrowthTransition>,
    viewport: Viewport,
    rng: ChaCha8Rng,
}

impl FarmVisualizer {
    /// Build the initial scene for `cycle` at wall-clock time `now`
    pub fn new(seed: u64, cycle: RotationCycle, now: Millis) -> Self {
        let mut visualizer = Self {
            composer: SceneComposer::new(),
            effects: EffectController::new(),
            lighting: Lighting::default(),
            seasons: SeasonalCycle::new(now),
            growth: None,
            viewport: Viewport::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        visualizer.rebuild(cycle);
        visualizer
    }

    /// Replace the scene with a fresh generation for `cycle`.
    ///
    /// The active weather effect carries over to the new plants; an in-flight
    /// growth transition is dropped.
    pub fn rebuild(&mut self, cycle: RotationCycle) {
        self.composer.build(cycle, &mut self.rng);
        self.effects.adopt(self.composer.instances_mut());
        self.growth = None;
        tracing::info!(%cycle, plants = self.composer.instances().len(), "Switched rotation cycle");
    }

    pub fn activate_weather(&mut self, kind: WeatherKind, now: Millis) {
        self.effects.activate(
            kind,
            now,
            self.composer.instances_mut(),
            &mut self.lighting,
            &mut self.rng,
        );
    }

    /// Activate a weather effect by name; unknown names are ignored
    pub fn activate_weather_named(&mut self, name: &str, now: Millis) {
        match name.parse() {
            Ok(kind) => self.activate_weather(kind, now),
            Err(e) => tracing::debug!(error = %e, "Ignoring weather request"),
        }
    }

    /// Start a two-second transition of every plant towards `stage`
    pub fn set_growth_stage(&mut self, stage: GrowthStage, now: Millis) {
        self.growth = Some(GrowthTransition::start(
            self.composer.generation(),
            stage,
            self.composer.instances(),
            now,
        ));
    }

    /// Start a growth transition by name; unknown names are ignored
    pub fn set_growth_stage_named(&mut self, name: &str, now: Millis) {
        match name.parse() {
            Ok(stage) => self.set_growth_stage(stage, now),
            Err(e) => tracing::debug!(error = %e, "Ignoring growth stage request"),
        }
    }

    /// Only affects projection, never simulation state
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport { width, height };
    }

    /// Advance everything by one render tick at wall-clock time `now`
    pub fn frame(&mut self, now: Millis) {
        let instances = self.composer.instances_mut();
        self.effects.poll(now, instances, &mut self.lighting);
        self.seasons.poll(now, &mut self.lighting, instances);

        if let Some(transition) = &self.growth {
            let finished = transition.generation() != self.composer.generation()
                || transition.apply(self.composer.instances_mut(), now);
            if finished {
                self.growth = None;
            }
        }

        self.composer.advance(now * 0.001);
        self.effects.step(&mut self.rng);
    }

    /// Hand the current frame to `backend`
    pub fn render<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
        backend.begin_frame(&self.viewport, &self.lighting);
        for plot in self.composer.plots() {
            backend.draw_plot(plot);
        }
        for instance in self.composer.instances() {
            backend.draw_plant(instance.plant, instance.profile(), instance.pose());
        }
        if let Some(rain) = self.effects.rain() {
            backend.draw_rain(rain.drops());
        }
    }

    pub fn scene(&self) -> &SceneComposer {
        &self.composer
    }

    pub fn effects(&self) -> &EffectController {
        &self.effects
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    pub fn season(&self) -> Option<Season> {
        self.seasons.current()
    }

    pub fn is_growing(&self) -> bool {
        self.growth.is_some()
    }
}

/// Serializable snapshot of one rendered frame
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub aspect: f32,
    pub sun: Lighting,
    pub plots: Vec<Plot>,
    pub plants: Vec<PlantFrame>,
    pub rain: Vec<Vec3>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantFrame {
    pub id: PlantId,
    pub crop: &'static str,
    pub height: f32,
    pub detail: CropDetail,
    pub pose: PlantPose,
}

impl Frame {
    pub fn capture(visualizer: &FarmVisualizer) -> Self {
        let mut frame = Frame::default();
        visualizer.render(&mut frame);
        frame
    }
}

impl RenderBackend for Frame {
    fn begin_frame(&mut self, viewport: &Viewport, sun: &Lighting) {
        self.aspect = viewport.aspect();
        self.sun = *sun;
    }

    fn draw_plot(&mut self, plot: &Plot) {
        self.plots.push(plot.clone());
    }

    fn draw_plant(&mut self, plant: PlantId, crop: &CropProfile, pose: &PlantPose) {
        self.plants.push(PlantFrame {
            id: plant,
            crop: crop.kind.key(),
            height: crop.height,
            detail: crop.detail,
            pose: *pose,
        });
    }

    fn draw_rain(&mut self, drops: &[Raindrop]) {
        self.rain.extend(drops.iter().map(|d| d.position));
    }
}
