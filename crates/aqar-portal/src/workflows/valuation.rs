//! Instant valuation heuristic.
//!
//! Maps land/building attributes to an estimated market value using a
//! hand-tuned per-location multiplier over baseline per-square-meter prices,
//! with straight-line depreciation on the building share. This is a teaser
//! figure for the portal landing page, not an appraisal.

use serde::{Deserialize, Serialize};

/// Baseline land price per square meter before the location multiplier.
const LAND_PRICE_PER_SQM: f64 = 45.0;
/// Baseline building price per square meter before the location multiplier.
const BUILDING_PRICE_PER_SQM: f64 = 120.0;
/// Flat minimum base used when per-area pricing yields nothing.
const BASE_LAND_PRICE: f64 = 25_000.0;
/// Depreciation accrues 1% per year of building age.
const DEPRECIATION_PER_YEAR: f64 = 0.01;
/// Depreciation never removes more than half the building value.
const DEPRECIATION_CAP: f64 = 0.5;

/// Known location tags with hand-tuned demand multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Muscat,
    Bawshar,
    Seeb,
    Mabella,
    Sohar,
    Salalah,
    Nizwa,
    #[serde(other)]
    Other,
}

impl Location {
    /// Resolve a raw form tag; anything unrecognized maps to [`Location::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "muscat" => Self::Muscat,
            "bawshar" => Self::Bawshar,
            "seeb" => Self::Seeb,
            "mabella" => Self::Mabella,
            "sohar" => Self::Sohar,
            "salalah" => Self::Salalah,
            "nizwa" => Self::Nizwa,
            _ => Self::Other,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Muscat => 1.60,
            Self::Bawshar => 1.45,
            Self::Seeb => 1.25,
            Self::Mabella => 1.10,
            Self::Sohar => 1.05,
            Self::Salalah => 1.15,
            Self::Nizwa => 0.95,
            Self::Other => 1.00,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::Other
    }
}

/// Form-derived attributes for the instant estimate.
///
/// Missing or unparseable numeric fields coerce to zero rather than failing;
/// the form never blocks on partial input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuationInput {
    pub land_area_sqm: f64,
    pub location: Location,
    pub building_age_years: f64,
    pub built_area_sqm: f64,
}

impl ValuationInput {
    /// Build an input from raw optional form values.
    pub fn from_form(
        land_area: Option<f64>,
        location: Option<&str>,
        building_age: Option<f64>,
        built_area: Option<f64>,
    ) -> Self {
        Self {
            land_area_sqm: land_area.unwrap_or(0.0),
            location: location.map(Location::from_tag).unwrap_or_default(),
            building_age_years: building_age.unwrap_or(0.0),
            built_area_sqm: built_area.unwrap_or(0.0),
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Estimate a property value in whole currency units.
pub fn estimate(input: &ValuationInput) -> f64 {
    let multiplier = input.location.multiplier();

    let land_sqm_price = LAND_PRICE_PER_SQM * multiplier;
    let building_sqm_price = BUILDING_PRICE_PER_SQM * multiplier;

    let age = non_negative(input.building_age_years);
    let depreciation = (age * DEPRECIATION_PER_YEAR).min(DEPRECIATION_CAP);
    let building_multiplier = 1.0 - depreciation;

    let land = non_negative(input.land_area_sqm);
    let built = non_negative(input.built_area_sqm);

    let land_value = land * land_sqm_price;
    let building_value = built * building_sqm_price * building_multiplier;
    let mut total = land_value + building_value;

    // Minimum-base branch carried over from the previous portal build. With
    // both areas clamped non-negative a positive area always yields a
    // positive total, so this cannot fire today; kept until product confirms
    // the intended trigger condition.
    if total == 0.0 && (land > 0.0 || built > 0.0) {
        total = BASE_LAND_PRICE * multiplier;
    }

    total.round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_location_uses_unit_multiplier() {
        assert_eq!(Location::from_tag("buraimi").multiplier(), 1.00);
        assert_eq!(Location::from_tag("").multiplier(), 1.00);
    }

    #[test]
    fn known_tags_resolve_case_insensitively() {
        assert_eq!(Location::from_tag(" Muscat "), Location::Muscat);
        assert_eq!(Location::Muscat.multiplier(), 1.60);
        assert_eq!(Location::Nizwa.multiplier(), 0.95);
    }

    #[test]
    fn empty_input_estimates_zero() {
        let input = ValuationInput::from_form(None, None, None, None);
        assert_eq!(estimate(&input), 0.0);
    }

    #[test]
    fn land_and_building_both_contribute() {
        let input = ValuationInput {
            land_area_sqm: 600.0,
            location: Location::Seeb,
            building_age_years: 0.0,
            built_area_sqm: 250.0,
        };
        // 600 * 45 * 1.25 + 250 * 120 * 1.25
        assert_eq!(estimate(&input), 71_250.0);
    }

    #[test]
    fn depreciation_caps_at_half_the_building_value() {
        let fresh = ValuationInput {
            land_area_sqm: 0.0,
            location: Location::Other,
            building_age_years: 0.0,
            built_area_sqm: 100.0,
        };
        let old = ValuationInput {
            building_age_years: 50.0,
            ..fresh
        };
        let ancient = ValuationInput {
            building_age_years: 120.0,
            ..fresh
        };
        assert_eq!(estimate(&old), estimate(&fresh) / 2.0);
        assert_eq!(estimate(&ancient), estimate(&old));
    }

    #[test]
    fn negative_and_non_finite_fields_coerce_to_zero() {
        let input = ValuationInput {
            land_area_sqm: -400.0,
            location: Location::Muscat,
            building_age_years: f64::NAN,
            built_area_sqm: 100.0,
        };
        // Only the building counts, with no depreciation.
        assert_eq!(estimate(&input), (100.0f64 * 120.0 * 1.60).round());
    }

    #[test]
    fn estimate_rounds_to_whole_units() {
        let input = ValuationInput {
            land_area_sqm: 10.7,
            location: Location::Sohar,
            building_age_years: 3.0,
            built_area_sqm: 0.0,
        };
        let value = estimate(&input);
        assert_eq!(value, value.round());
    }
}
