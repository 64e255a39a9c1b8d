//! Property tests for the farm visualizer
//!
//! Covers scene sizing, growth monotonicity, seasonal color blending and the
//! reversibility and idempotence of weather effects.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use shared::scene::{
    seasonal_blend, seasonal_color, EffectController, EffectState, Lighting, SceneComposer,
    PLANTS_PER_PLOT,
};
use shared::{CropKind, RotationCycle, WeatherKind, WIND};

fn cycle_strategy() -> impl Strategy<Value = RotationCycle> {
    prop::sample::select(RotationCycle::ALL.to_vec())
}

fn weather_strategy() -> impl Strategy<Value = WeatherKind> {
    prop::sample::select(vec![
        WeatherKind::Rain,
        WeatherKind::Wind,
        WeatherKind::Sunlight,
        WeatherKind::Clear,
    ])
}

fn built(cycle: RotationCycle, seed: u64) -> (SceneComposer, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut composer = SceneComposer::new();
    composer.build(cycle, &mut rng);
    (composer, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every build yields exactly 16 plants per plot with valid stages
    #[test]
    fn prop_build_size_and_stage_range(cycle in cycle_strategy(), seed in any::<u64>()) {
        let (composer, _) = built(cycle, seed);
        prop_assert_eq!(composer.instances().len(), cycle.years() * PLANTS_PER_PLOT);
        for instance in composer.instances() {
            prop_assert!((0.0..=1.0).contains(&instance.growth_stage()));
        }
    }

    /// Without a stage request, growth never decreases and never exceeds one
    #[test]
    fn prop_growth_is_monotonic(
        cycle in cycle_strategy(),
        seed in any::<u64>(),
        start in 0.0f64..1.0e6,
        ticks in 1usize..200,
    ) {
        let (mut composer, _) = built(cycle, seed);
        let mut previous: Vec<f32> =
            composer.instances().iter().map(|i| i.growth_stage()).collect();
        for tick in 0..ticks {
            composer.advance(start + tick as f64 / 60.0);
            for (instance, before) in composer.instances().iter().zip(previous.iter_mut()) {
                prop_assert!(instance.growth_stage() >= *before);
                prop_assert!(instance.growth_stage() <= 1.0);
                *before = instance.growth_stage();
            }
        }
    }

    /// Blend fraction zero reproduces the palette entry exactly
    #[test]
    fn prop_seasonal_color_at_slot_start(
        crop_index in 0usize..4,
        cycles in 0u32..50,
        slot in 0usize..4,
    ) {
        let palette = CropKind::ALL[crop_index].profile().seasonal_palette();
        let (index, next, blend) = seasonal_blend(palette.len(), 0.0);
        prop_assert_eq!((index, next, blend), (0, 1, 0.0));

        // Anywhere in the cycle the color is between the slot's two entries
        let slot_start = slot as f64 * std::f64::consts::FRAC_PI_2;
        let t = (cycles as f64 * std::f64::consts::TAU + slot_start + 0.5) / 0.1;
        let (index, next, blend) = seasonal_blend(palette.len(), t);
        let color = seasonal_color(&palette, t);
        let expected = palette[index].lerp(palette[next], blend);
        prop_assert_eq!(color, expected);
        prop_assert!((0.0..1.0).contains(&blend));
    }

    /// Wind always restores the pre-activation amplitude after its duration
    #[test]
    fn prop_wind_round_trip(
        cycle in cycle_strategy(),
        seed in any::<u64>(),
        now in 0.0f64..1.0e12,
    ) {
        let (mut composer, mut rng) = built(cycle, seed);
        let mut lighting = Lighting::default();
        let mut effects = EffectController::new();
        let before: Vec<f32> = composer.instances().iter().map(|i| i.sway_amplitude).collect();

        effects.activate(WeatherKind::Wind, now, composer.instances_mut(), &mut lighting, &mut rng);
        effects.poll(now + WIND.duration_ms, composer.instances_mut(), &mut lighting);

        for (instance, original) in composer.instances().iter().zip(&before) {
            prop_assert!((instance.sway_amplitude - original).abs() < 1e-6);
        }
        prop_assert_eq!(effects.state(), EffectState::Idle);
    }

    /// Activating the same effect twice equals activating it once
    #[test]
    fn prop_activate_is_idempotent(
        cycle in cycle_strategy(),
        seed in any::<u64>(),
        first in weather_strategy(),
        kind in weather_strategy(),
    ) {
        let (mut once, mut rng_a) = built(cycle, seed);
        let (mut twice, mut rng_b) = built(cycle, seed);
        let mut light_once = Lighting::default();
        let mut light_twice = Lighting::default();
        let mut effects_once = EffectController::new();
        let mut effects_twice = EffectController::new();

        effects_once.activate(first, 0.0, once.instances_mut(), &mut light_once, &mut rng_a);
        effects_twice.activate(first, 0.0, twice.instances_mut(), &mut light_twice, &mut rng_b);

        effects_once.activate(kind, 10.0, once.instances_mut(), &mut light_once, &mut rng_a);
        effects_twice.activate(kind, 10.0, twice.instances_mut(), &mut light_twice, &mut rng_b);
        effects_twice.activate(kind, 10.0, twice.instances_mut(), &mut light_twice, &mut rng_b);

        prop_assert_eq!(effects_once.state(), effects_twice.state());
        prop_assert_eq!(
            effects_once.active_effects().count(),
            effects_twice.active_effects().count()
        );
        prop_assert_eq!(light_once, light_twice);
        for (a, b) in once.instances().iter().zip(twice.instances()) {
            prop_assert_eq!(a.sway_amplitude, b.sway_amplitude);
            prop_assert_eq!(a.rain_intensity, b.rain_intensity);
            prop_assert_eq!(a.wind_strength, b.wind_strength);
            prop_assert_eq!(a.emissive, b.emissive);
        }
    }
}

#[test]
fn clear_after_any_effect_leaves_nothing_active() {
    for kind in [WeatherKind::Rain, WeatherKind::Wind, WeatherKind::Sunlight] {
        let (mut composer, mut rng) = built(RotationCycle::THREE_YEAR, 99);
        let mut lighting = Lighting::default();
        let mut effects = EffectController::new();

        effects.activate(kind, 0.0, composer.instances_mut(), &mut lighting, &mut rng);
        effects.activate(
            WeatherKind::Clear,
            1.0,
            composer.instances_mut(),
            &mut lighting,
            &mut rng,
        );

        assert_eq!(effects.active_effects().count(), 0);
        assert_eq!(effects.state(), EffectState::Idle);
        assert!(composer
            .instances()
            .iter()
            .all(|i| i.rain_intensity == 1.0 && i.wind_strength == 1.0));
    }
}
