//! Rotation calculator
//!
//! Maps a farm size, the crop currently grown and the soil type to a rotation
//! recommendation. Everything is a static table lookup plus simple arithmetic,
//! so the same inputs always produce the same record.

use serde::{Deserialize, Serialize};

/// Crops the calculator knows a history for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldCrop {
    Wheat,
    Rice,
    Maize,
    Cotton,
    Legumes,
}

impl FieldCrop {
    pub fn parse(key: &str) -> Option<FieldCrop> {
        match key.trim() {
            "wheat" => Some(FieldCrop::Wheat),
            "rice" => Some(FieldCrop::Rice),
            "maize" => Some(FieldCrop::Maize),
            "cotton" => Some(FieldCrop::Cotton),
            "legumes" => Some(FieldCrop::Legumes),
            _ => None,
        }
    }

    fn history(&self) -> Option<&'static CropHistory> {
        match self {
            FieldCrop::Wheat => Some(&WHEAT_HISTORY),
            FieldCrop::Rice => Some(&RICE_HISTORY),
            FieldCrop::Maize => Some(&MAIZE_HISTORY),
            FieldCrop::Cotton => Some(&COTTON_HISTORY),
            FieldCrop::Legumes => None,
        }
    }

    fn yield_multiplier(&self) -> f64 {
        match self {
            FieldCrop::Wheat => 1.2,
            FieldCrop::Rice => 1.0,
            FieldCrop::Maize => 1.3,
            FieldCrop::Cotton => 1.1,
            FieldCrop::Legumes => 1.0,
        }
    }

    fn sustainability(&self) -> i32 {
        match self {
            FieldCrop::Wheat => 10,
            FieldCrop::Legumes => 20,
            FieldCrop::Maize => 5,
            FieldCrop::Cotton => -5,
            FieldCrop::Rice => 0,
        }
    }
}

/// Soil types offered by the calculator form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Clay,
    Sandy,
    Loam,
    Silt,
}

impl SoilType {
    /// Soil whose advice is used for unrecognised soil types
    pub const DEFAULT: SoilType = SoilType::Loam;

    pub fn parse(key: &str) -> Option<SoilType> {
        match key.trim() {
            "clay" => Some(SoilType::Clay),
            "sandy" => Some(SoilType::Sandy),
            "loam" => Some(SoilType::Loam),
            "silt" => Some(SoilType::Silt),
            _ => None,
        }
    }

    fn profile(&self) -> &'static SoilProfile {
        match self {
            SoilType::Clay => &CLAY,
            SoilType::Sandy => &SANDY,
            SoilType::Loam => &LOAM,
            SoilType::Silt => &SILT,
        }
    }

    fn bonus(&self) -> i32 {
        match self {
            SoilType::Loam => 15,
            SoilType::Clay => 10,
            SoilType::Silt => 8,
            SoilType::Sandy => 5,
        }
    }
}

struct CropHistory {
    next: &'static [&'static str],
    soil_benefit: &'static str,
    pest_control: &'static str,
    market_value: &'static str,
}

const WHEAT_HISTORY: CropHistory = CropHistory {
    next: &["legumes", "root_crops"],
    soil_benefit: "Depletes nitrogen, rotate with nitrogen-fixing legumes",
    pest_control: "Breaks cereal pest cycles, reduces wheat diseases",
    market_value: "High demand, stable prices",
};

const RICE_HISTORY: CropHistory = CropHistory {
    next: &["legumes", "vegetables"],
    soil_benefit: "Benefits from nitrogen-fixing rotation crops",
    pest_control: "Reduces water-borne pests and diseases",
    market_value: "Staple crop, consistent market",
};

const MAIZE_HISTORY: CropHistory = CropHistory {
    next: &["legumes", "small_grains"],
    soil_benefit: "Heavy nitrogen feeder, needs legume companion",
    pest_control: "Disrupts corn borer and rootworm cycles",
    market_value: "Versatile crop, multiple market channels",
};

const COTTON_HISTORY: CropHistory = CropHistory {
    next: &["cereals", "legumes"],
    soil_benefit: "Deep roots improve soil structure",
    pest_control: "Breaks cotton-specific pest cycles",
    market_value: "Cash crop, weather-dependent prices",
};

/// Used for any crop without a history entry
const GENERAL_HISTORY: CropHistory = CropHistory {
    next: &["legumes"],
    soil_benefit: "General rotation needed",
    pest_control: "Standard pest management",
    market_value: "Variable market conditions",
};

struct SoilProfile {
    advice: &'static str,
    management: &'static str,
}

const CLAY: SoilProfile = SoilProfile {
    advice: "Excellent for root crops, improve drainage for better yields",
    management: "Add organic matter, avoid compaction",
};

const SANDY: SoilProfile = SoilProfile {
    advice: "Good drainage, requires frequent fertilization",
    management: "Increase organic matter, regular irrigation",
};

const LOAM: SoilProfile = SoilProfile {
    advice: "Ideal for most crops, maintain organic content",
    management: "Balanced nutrition, crop rotation",
};

const SILT: SoilProfile = SoilProfile {
    advice: "Fertile but prone to compaction",
    management: "Minimize tillage, cover crops",
};

const BASE_SUSTAINABILITY: i32 = 70;
const BASE_YIELD_INCREASE: f64 = 15.0;

/// Calculator output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RotationRecommendation {
    pub farm_size: f64,
    pub current_crop: String,
    pub soil_type: String,
    pub recommendations: Vec<String>,
    pub soil_advice: String,
    pub soil_management: String,
    pub crop_advice: String,
    pub pest_control: String,
    pub market_insight: String,
    pub estimated_yield_increase: String,
    pub recommended_cycle: String,
    pub sustainability_score: u8,
}

/// Build the full recommendation for a farm.
///
/// Unknown crops use the general rotation advice; unknown soils use loam's advice.
pub fn generate_recommendation(
    farm_size: f64,
    current_crop: &str,
    soil_type: &str,
) -> RotationRecommendation {
    let crop = FieldCrop::parse(current_crop);
    let history = crop
        .and_then(|c| c.history())
        .unwrap_or(&GENERAL_HISTORY);
    let soil = SoilType::parse(soil_type)
        .unwrap_or(SoilType::DEFAULT)
        .profile();

    RotationRecommendation {
        farm_size,
        current_crop: current_crop.to_string(),
        soil_type: soil_type.to_string(),
        recommendations: history.next.iter().map(|s| s.to_string()).collect(),
        soil_advice: soil.advice.to_string(),
        soil_management: soil.management.to_string(),
        crop_advice: history.soil_benefit.to_string(),
        pest_control: history.pest_control.to_string(),
        market_insight: history.market_value.to_string(),
        estimated_yield_increase: calculate_yield_increase(farm_size, current_crop),
        recommended_cycle: recommended_cycle(farm_size).to_string(),
        sustainability_score: calculate_sustainability_score(current_crop, soil_type),
    }
}

/// Expected yield gain as a `"N-M%"` range
pub fn calculate_yield_increase(farm_size: f64, current_crop: &str) -> String {
    let mut base = BASE_YIELD_INCREASE;
    if farm_size > 10.0 {
        base += 5.0;
    }
    if farm_size > 20.0 {
        base += 3.0;
    }

    let multiplier = FieldCrop::parse(current_crop)
        .map(|c| c.yield_multiplier())
        .unwrap_or(1.0);
    let low = (base * multiplier).round() as i64;

    format!("{}-{}%", low, low + 10)
}

/// Sustainability score in [0, 100]
pub fn calculate_sustainability_score(current_crop: &str, soil_type: &str) -> u8 {
    let crop_score = FieldCrop::parse(current_crop)
        .map(|c| c.sustainability())
        .unwrap_or(0);
    // Unknown soils earn no bonus even though their advice falls back to loam
    let soil_bonus = SoilType::parse(soil_type).map(|s| s.bonus()).unwrap_or(0);

    (BASE_SUSTAINABILITY + crop_score + soil_bonus).clamp(0, 100) as u8
}

/// Suggested rotation length label for a farm size
pub fn recommended_cycle(farm_size: f64) -> &'static str {
    if farm_size > 5.0 {
        "4-year rotation"
    } else {
        "3-year rotation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_wheat_farm_on_loam() {
        let rec = generate_recommendation(3.0, "wheat", "loam");
        assert_eq!(rec.recommendations, vec!["legumes", "root_crops"]);
        assert_eq!(rec.recommended_cycle, "3-year rotation");
        assert_eq!(rec.sustainability_score, 95);
        assert_eq!(rec.estimated_yield_increase, "18-28%");
    }

    #[test]
    fn test_medium_cotton_farm_on_sandy_soil() {
        let rec = generate_recommendation(12.0, "cotton", "sandy");
        assert_eq!(rec.estimated_yield_increase, "22-32%");
        assert_eq!(rec.sustainability_score, 70);
        assert_eq!(rec.recommended_cycle, "4-year rotation");
        assert_eq!(rec.recommendations, vec!["cereals", "legumes"]);
    }

    #[test]
    fn test_large_maize_farm() {
        // (15 + 5 + 3) * 1.3 = 29.9
        assert_eq!(calculate_yield_increase(25.0, "maize"), "30-40%");
    }

    #[test]
    fn test_unknown_crop_uses_general_advice() {
        let rec = generate_recommendation(2.0, "sorghum", "clay");
        assert_eq!(rec.recommendations, vec!["legumes"]);
        assert_eq!(rec.crop_advice, "General rotation needed");
        assert_eq!(rec.estimated_yield_increase, "15-25%");
        assert_eq!(rec.sustainability_score, 80);
    }

    #[test]
    fn test_unknown_soil_uses_loam_advice_without_bonus() {
        let rec = generate_recommendation(2.0, "wheat", "peat");
        assert_eq!(rec.soil_advice, LOAM.advice);
        assert_eq!(rec.soil_type, "peat");
        assert_eq!(rec.sustainability_score, 80);
    }

    #[test]
    fn test_legumes_have_no_history_but_score_highest() {
        let rec = generate_recommendation(4.0, "legumes", "loam");
        assert_eq!(rec.recommendations, vec!["legumes"]);
        assert_eq!(rec.sustainability_score, 100);
    }

    #[test]
    fn test_cycle_boundary_at_five() {
        assert_eq!(recommended_cycle(5.0), "3-year rotation");
        assert_eq!(recommended_cycle(5.5), "4-year rotation");
    }
}
