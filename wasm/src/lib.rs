//! WebAssembly module for Crop Rotation Hub
//!
//! Provides the browser side of the marketing page:
//! - The crop rotation visualizer driven by `requestAnimationFrame`
//! - The decorative background field
//! - The rotating-crop showcase ring
//! - The rotation calculator, run without a server round trip

use serde::Serialize;
use wasm_bindgen::prelude::*;

use shared::scene::{AmbientField, FarmVisualizer, FloatingKind, Frame, Lighting, RotationDemo};
use shared::types::{Millis, Rgb, Vec3};
use shared::{
    generate_recommendation, validate_calculator_form, RotationCycle, RotationRecommendation,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

fn seeded_rng(seed: u64) -> rand_chacha::ChaCha8Rng {
    use rand::SeedableRng;
    rand_chacha::ChaCha8Rng::seed_from_u64(seed)
}

/// Parse a JSON string produced by this module into a plain JS object
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(js_error)?;
    js_sys::JSON::parse(&json)
}

// =============================================================================
// Rotation visualizer
// =============================================================================

/// Handle the page holds for the rotation demo canvas
#[wasm_bindgen]
pub struct FarmView {
    visualizer: FarmVisualizer,
}

#[wasm_bindgen]
impl FarmView {
    /// Build the scene for a 2, 3 or 4 year rotation; other values fall back to 2
    #[wasm_bindgen(constructor)]
    pub fn new(years: u32, now: Millis) -> FarmView {
        FarmView::with_seed(random_seed(), years, now)
    }

    #[wasm_bindgen(js_name = setRotationCycle)]
    pub fn set_rotation_cycle(&mut self, years: u32) {
        self.visualizer.rebuild(cycle_or_default(years));
    }

    /// `rain`, `wind`, `sunlight` or `clear`; anything else is ignored
    #[wasm_bindgen(js_name = activateWeather)]
    pub fn activate_weather(&mut self, name: &str, now: Millis) {
        self.visualizer.activate_weather_named(name, now);
    }

    /// `seedling`, `growth`, `mature` or `harvest`; anything else is ignored
    #[wasm_bindgen(js_name = setGrowthStage)]
    pub fn set_growth_stage(&mut self, name: &str, now: Millis) {
        self.visualizer.set_growth_stage_named(name, now);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.visualizer.resize(width, height);
    }

    /// Advance one tick and return the frame as JSON
    pub fn frame(&mut self, now: Millis) -> Result<String, JsValue> {
        self.frame_json(now).map_err(js_error)
    }

    #[wasm_bindgen(js_name = activeEffects)]
    pub fn active_effects(&self) -> Vec<JsValue> {
        self.visualizer
            .effects()
            .active_effects()
            .map(|effect| JsValue::from_str(effect.kind().key()))
            .collect()
    }
}

impl FarmView {
    pub fn with_seed(seed: u64, years: u32, now: Millis) -> FarmView {
        FarmView {
            visualizer: FarmVisualizer::new(seed, cycle_or_default(years), now),
        }
    }

    fn frame_json(&mut self, now: Millis) -> serde_json::Result<String> {
        self.visualizer.frame(now);
        serde_json::to_string(&Frame::capture(&self.visualizer))
    }
}

fn cycle_or_default(years: u32) -> RotationCycle {
    RotationCycle::try_from(years).unwrap_or_default()
}

// =============================================================================
// Background field
// =============================================================================

#[derive(Serialize)]
struct AmbientSnapshot {
    sun: Lighting,
    elements: Vec<ElementSnapshot>,
}

#[derive(Serialize)]
struct ElementSnapshot {
    kind: FloatingKind,
    color: Rgb,
    position: Vec3,
    rotation: Vec3,
}

/// Leaves and flowers drifting behind the hero text
#[wasm_bindgen]
pub struct AmbientView {
    field: AmbientField,
}

#[wasm_bindgen]
impl AmbientView {
    #[wasm_bindgen(constructor)]
    pub fn new() -> AmbientView {
        AmbientView::with_seed(random_seed())
    }

    /// Advance to `now` and return element positions and the sun as JSON
    pub fn frame(&mut self, now: Millis) -> Result<String, JsValue> {
        self.frame_json(now).map_err(js_error)
    }
}

impl AmbientView {
    pub fn with_seed(seed: u64) -> AmbientView {
        AmbientView {
            field: AmbientField::scatter(&mut seeded_rng(seed)),
        }
    }

    fn snapshot(&self) -> AmbientSnapshot {
        AmbientSnapshot {
            sun: *self.field.sun(),
            elements: self
                .field
                .elements()
                .iter()
                .map(|e| ElementSnapshot {
                    kind: e.kind,
                    color: e.kind.color(),
                    position: e.position,
                    rotation: e.rotation,
                })
                .collect(),
        }
    }

    fn frame_json(&mut self, now: Millis) -> serde_json::Result<String> {
        self.field.update(now * 0.001);
        serde_json::to_string(&self.snapshot())
    }
}

impl Default for AmbientView {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Showcase ring
// =============================================================================

/// Every catalog crop animating on one ring
#[wasm_bindgen]
pub struct DemoView {
    demo: RotationDemo,
}

#[wasm_bindgen]
impl DemoView {
    #[wasm_bindgen(constructor)]
    pub fn new() -> DemoView {
        DemoView::with_seed(random_seed())
    }

    /// Pose the ring for wall-clock `now` and return its plants as JSON
    pub fn frame(&mut self, now: Millis) -> Result<String, JsValue> {
        self.frame_json(now).map_err(js_error)
    }
}

impl DemoView {
    pub fn with_seed(seed: u64) -> DemoView {
        DemoView {
            demo: RotationDemo::scatter(&mut seeded_rng(seed)),
        }
    }

    fn frame_json(&mut self, now: Millis) -> serde_json::Result<String> {
        self.demo.update(now * 0.001);
        serde_json::to_string(self.demo.plants())
    }
}

impl Default for DemoView {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Validate the calculator form and compute a recommendation
fn recommend(
    farm_size: Option<&str>,
    current_crop: Option<&str>,
    soil_type: Option<&str>,
) -> Result<RotationRecommendation, &'static str> {
    let input = validate_calculator_form(farm_size, current_crop, soil_type)?;
    Ok(generate_recommendation(
        input.farm_size,
        &input.current_crop,
        &input.soil_type,
    ))
}

/// Rotation recommendation for the submitted form values
#[wasm_bindgen(js_name = generateRecommendation)]
pub fn generate_recommendation_js(
    farm_size: Option<String>,
    current_crop: Option<String>,
    soil_type: Option<String>,
) -> Result<JsValue, JsValue> {
    let recommendation = recommend(
        farm_size.as_deref(),
        current_crop.as_deref(),
        soil_type.as_deref(),
    )
    .map_err(|message| {
        web_sys::console::warn_1(&JsValue::from_str(message));
        js_error(message)
    })?;
    to_js(&recommendation)
}

/// Title, crops, benefits and timeline of a rotation cycle
#[wasm_bindgen(js_name = rotationInfo)]
pub fn rotation_info(years: u32) -> Result<JsValue, JsValue> {
    let cycle = RotationCycle::try_from(years).map_err(js_error)?;
    to_js(&cycle.info())
}
