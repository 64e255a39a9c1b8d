//! Validation utilities for the rotation calculator form

// ============================================================================
// Calculator Form
// ============================================================================

/// Advisory shown when any calculator field is left empty
pub const MISSING_FIELDS: &str = "Please fill in all fields";

/// A calculator submission that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorInput {
    pub farm_size: f64,
    pub current_crop: String,
    pub soil_type: String,
}

/// Validate the three calculator fields as submitted by the page
pub fn validate_calculator_form(
    farm_size: Option<&str>,
    current_crop: Option<&str>,
    soil_type: Option<&str>,
) -> Result<CalculatorInput, &'static str> {
    let (Some(farm_size), Some(current_crop), Some(soil_type)) = (
        non_blank(farm_size),
        non_blank(current_crop),
        non_blank(soil_type),
    ) else {
        return Err(MISSING_FIELDS);
    };

    let farm_size = parse_farm_size(farm_size)?;

    Ok(CalculatorInput {
        farm_size,
        current_crop: current_crop.to_string(),
        soil_type: soil_type.to_string(),
    })
}

/// Parse a farm size in hectares
pub fn parse_farm_size(raw: &str) -> Result<f64, &'static str> {
    let size: f64 = raw
        .trim()
        .parse()
        .map_err(|_| "Farm size must be a number")?;
    validate_farm_size(size)?;
    Ok(size)
}

/// Validate farm size is a positive, finite number of hectares
pub fn validate_farm_size(size: f64) -> Result<(), &'static str> {
    if !size.is_finite() {
        return Err("Farm size must be a number");
    }
    if size <= 0.0 {
        return Err("Farm size must be greater than zero");
    }
    Ok(())
}

fn non_blank(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}
