//! Weather and season tables

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;
use crate::types::{Millis, Rgb};

/// Weather effects selectable from the visualizer controls
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeatherKind {
    Rain,
    Wind,
    Sunlight,
    /// Removes whatever effect is active
    Clear,
}

impl WeatherKind {
    pub fn key(&self) -> &'static str {
        match self {
            WeatherKind::Rain => "rain",
            WeatherKind::Wind => "wind",
            WeatherKind::Sunlight => "sunlight",
            WeatherKind::Clear => "clear",
        }
    }
}

impl FromStr for WeatherKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rain" => Ok(WeatherKind::Rain),
            "wind" => Ok(WeatherKind::Wind),
            "sunlight" => Ok(WeatherKind::Sunlight),
            "clear" => Ok(WeatherKind::Clear),
            other => Err(DomainError::UnknownWeather(other.to_string())),
        }
    }
}

/// Rain shower parameters
pub struct RainSettings {
    /// Multiplier applied to the sway amplitude of every plant
    pub intensity: f32,
    pub particles: usize,
    /// Half-width of the square the drops fall over
    pub spread: f32,
    pub spawn_min_y: f32,
    pub spawn_max_y: f32,
    /// Height recycled drops restart from
    pub respawn_y: f32,
    /// Drops below this height are recycled
    pub ground_y: f32,
    pub min_fall_speed: f32,
    pub max_fall_speed: f32,
}

pub struct WindSettings {
    pub strength: f32,
    pub duration_ms: Millis,
}

pub struct SunlightSettings {
    pub intensity: f32,
    pub tint: u32,
    pub glow: u32,
    pub duration_ms: Millis,
}

pub const RAIN: RainSettings = RainSettings {
    intensity: 1.5,
    particles: 200,
    spread: 25.0,
    spawn_min_y: 10.0,
    spawn_max_y: 40.0,
    respawn_y: 30.0,
    ground_y: -1.0,
    min_fall_speed: 0.2,
    max_fall_speed: 0.7,
};

pub const WIND: WindSettings = WindSettings {
    strength: 1.2,
    duration_ms: 5000.0,
};

pub const SUNLIGHT: SunlightSettings = SunlightSettings {
    intensity: 1.5,
    tint: 0xFFFFAA,
    glow: 0x221100,
    duration_ms: 4000.0,
};

/// Light intensity the sun returns to once a sunlight effect ends
pub const NEUTRAL_LIGHT_INTENSITY: f32 = 1.0;

/// Seasons cycled by the visualizer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Length of one season on the wall clock
    pub const PERIOD_MS: Millis = 10_000.0;

    /// Season shown at wall-clock time `now`
    pub fn at(now: Millis) -> Season {
        let slot = (now / Self::PERIOD_MS).floor().rem_euclid(Self::ALL.len() as f64);
        Self::ALL[slot as usize]
    }

    /// Growth multiplier stored on every plant
    pub fn multiplier(&self) -> f32 {
        match self {
            Season::Spring => 0.8,
            Season::Summer => 1.2,
            Season::Autumn => 0.9,
            Season::Winter => 0.4,
        }
    }

    pub fn light_color(&self) -> Rgb {
        Rgb::from_hex(match self {
            Season::Spring => 0xAAFFAA,
            Season::Summer => 0xFFFFAA,
            Season::Autumn => 0xFFAAAA,
            Season::Winter => 0xAAAAFF,
        })
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Autumn => write!(f, "autumn"),
            Season::Winter => write!(f, "winter"),
        }
    }
}

/// Field conditions served by the weather endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldConditions {
    pub temperature: i32,
    pub humidity: i32,
    pub rainfall: f64,
    pub soil_moisture: i32,
    pub forecast: String,
}

impl FieldConditions {
    /// Fixed report shown until a live weather source is wired in
    pub fn placeholder() -> Self {
        Self {
            temperature: 25,
            humidity: 65,
            rainfall: 2.5,
            soil_moisture: 45,
            forecast: "Favorable for planting".to_string(),
        }
    }
}
