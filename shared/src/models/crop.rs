//! Crop catalog: visual and animation parameters for each rotation crop

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;
use crate::types::Rgb;

/// Rotation crops shown in the farm visualizer, in catalog order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CropKind {
    Wheat,
    Legumes,
    RootCrops,
    CoverCrop,
}

impl CropKind {
    /// Catalog order; plots are assigned round-robin over this list
    pub const ALL: [CropKind; 4] = [
        CropKind::Wheat,
        CropKind::Legumes,
        CropKind::RootCrops,
        CropKind::CoverCrop,
    ];

    /// Crop used when a lookup key is not in the catalog
    pub const DEFAULT: CropKind = CropKind::Wheat;

    pub fn key(&self) -> &'static str {
        match self {
            CropKind::Wheat => "wheat",
            CropKind::Legumes => "legumes",
            CropKind::RootCrops => "rootCrops",
            CropKind::CoverCrop => "coverCrop",
        }
    }

    pub fn profile(&self) -> &'static CropProfile {
        &CROP_CATALOG[*self as usize]
    }

    /// Crop occupying plot `plot_index` of a rotation
    pub fn for_plot(plot_index: usize) -> CropKind {
        Self::ALL[plot_index % Self::ALL.len()]
    }
}

impl FromStr for CropKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "wheat" => Ok(CropKind::Wheat),
            "legumes" => Ok(CropKind::Legumes),
            "rootCrops" | "root_crops" => Ok(CropKind::RootCrops),
            "coverCrop" | "cover_crop" => Ok(CropKind::CoverCrop),
            other => Err(DomainError::UnknownCrop(other.to_string())),
        }
    }
}

impl std::fmt::Display for CropKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.profile().name)
    }
}

/// How a crop moves each frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    /// Wheat-like swaying about two axes
    Sway,
    /// Legume-like bobbing with a vertical stretch
    Bounce,
    /// Root crop swelling in width
    Pulse,
    /// Cover crop wave rolling across rows
    Wave,
}

/// Small decorative meshes attached to each plant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum CropDetail {
    /// A single elongated ear near the top of the stalk
    Ear { color: u32, height_fraction: f32 },
    /// Stacked cone leaves
    Leaves { color: u32, count: u8 },
    /// A flattened bulb below the base
    RootBulge { color: u32, depth_fraction: f32 },
    /// Thin side branches
    Branches { color: u32, count: u8, length_fraction: f32 },
}

/// Immutable catalog entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropProfile {
    pub kind: CropKind,
    pub name: &'static str,
    pub color: u32,
    pub height: f32,
    pub sway_speed: f64,
    pub sway_amplitude: f32,
    pub growth_rate: f32,
    pub seasonal_colors: [u32; 4],
    pub animation: AnimationType,
    pub detail: CropDetail,
}

impl CropProfile {
    pub fn base_color(&self) -> Rgb {
        Rgb::from_hex(self.color)
    }

    pub fn seasonal_palette(&self) -> [Rgb; 4] {
        self.seasonal_colors.map(Rgb::from_hex)
    }
}

/// The crop catalog, indexed by `CropKind as usize`
pub static CROP_CATALOG: [CropProfile; 4] = [
    CropProfile {
        kind: CropKind::Wheat,
        name: "Wheat",
        color: 0xFFD700,
        height: 2.2,
        sway_speed: 0.008,
        sway_amplitude: 0.15,
        growth_rate: 0.02,
        seasonal_colors: [0xDDD700, 0xFFD700, 0xFFC700, 0xB8860B],
        animation: AnimationType::Sway,
        detail: CropDetail::Ear {
            color: 0xDAA520,
            height_fraction: 0.4,
        },
    },
    CropProfile {
        kind: CropKind::Legumes,
        name: "Legumes",
        color: 0x8BC34A,
        height: 1.8,
        sway_speed: 0.012,
        sway_amplitude: 0.1,
        growth_rate: 0.025,
        seasonal_colors: [0x4CAF50, 0x8BC34A, 0x66BB6A, 0x388E3C],
        animation: AnimationType::Bounce,
        detail: CropDetail::Leaves {
            color: 0x228B22,
            count: 3,
        },
    },
    CropProfile {
        kind: CropKind::RootCrops,
        name: "Root Crops",
        color: 0xFF5722,
        height: 1.2,
        sway_speed: 0.006,
        sway_amplitude: 0.05,
        growth_rate: 0.015,
        seasonal_colors: [0xFF7043, 0xFF5722, 0xF4511E, 0xD84315],
        animation: AnimationType::Pulse,
        detail: CropDetail::RootBulge {
            color: 0xCD853F,
            depth_fraction: 0.3,
        },
    },
    CropProfile {
        kind: CropKind::CoverCrop,
        name: "Cover Crop",
        color: 0x4CAF50,
        height: 1.0,
        sway_speed: 0.015,
        sway_amplitude: 0.2,
        growth_rate: 0.03,
        seasonal_colors: [0x66BB6A, 0x4CAF50, 0x43A047, 0x2E7D32],
        animation: AnimationType::Wave,
        detail: CropDetail::Branches {
            color: 0x32CD32,
            count: 2,
            length_fraction: 0.6,
        },
    },
];

/// Look up a catalog entry by key
pub fn lookup_crop(key: &str) -> Option<&'static CropProfile> {
    key.parse::<CropKind>().ok().map(|kind| kind.profile())
}

/// Look up a catalog entry, falling back to [`CropKind::DEFAULT`] for unknown keys
pub fn lookup_crop_or_default(key: &str) -> &'static CropProfile {
    lookup_crop(key).unwrap_or_else(|| CropKind::DEFAULT.profile())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_indexed_by_kind() {
        for kind in CropKind::ALL {
            assert_eq!(kind.profile().kind, kind);
        }
    }

    #[test]
    fn test_lookup_accepts_both_spellings() {
        assert_eq!(lookup_crop("rootCrops").map(|p| p.kind), Some(CropKind::RootCrops));
        assert_eq!(lookup_crop("root_crops").map(|p| p.kind), Some(CropKind::RootCrops));
        assert_eq!(lookup_crop("cover_crop").map(|p| p.kind), Some(CropKind::CoverCrop));
        assert!(lookup_crop("barley").is_none());
    }

    #[test]
    fn test_unknown_key_falls_back_to_wheat() {
        assert_eq!(lookup_crop_or_default("barley").kind, CropKind::Wheat);
    }

    #[test]
    fn test_round_robin_assignment() {
        assert_eq!(CropKind::for_plot(0), CropKind::Wheat);
        assert_eq!(CropKind::for_plot(3), CropKind::CoverCrop);
        assert_eq!(CropKind::for_plot(4), CropKind::Wheat);
    }

    #[test]
    fn test_animation_types_match_crops() {
        assert_eq!(CropKind::Wheat.profile().animation, AnimationType::Sway);
        assert_eq!(CropKind::Legumes.profile().animation, AnimationType::Bounce);
        assert_eq!(CropKind::RootCrops.profile().animation, AnimationType::Pulse);
        assert_eq!(CropKind::CoverCrop.profile().animation, AnimationType::Wave);
    }
}
