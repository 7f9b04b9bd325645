//! Daily price suggestion from category and location.
//!
//! Prices are in Tunisian Dinar (TND). Each known category has a fixed base
//! price; listings within [`PREMIUM_RADIUS_KM`] of Kelibia centre get a
//! peak-area premium on top.

use crate::classification::CategorySlug;
use crate::geo::{self, GeoPoint, KELIBIA_CENTER};

// ---------------------------------------------------------------------------
// Price table
// ---------------------------------------------------------------------------

/// Base price per day for each known category.
pub const BASE_PRICES: [(CategorySlug, f64); 3] = [
    (CategorySlug::Accommodation, 150.0),
    (CategorySlug::Mobility, 60.0),
    (CategorySlug::WaterBeachActivities, 30.0),
];

/// Base price for slugs that are not in [`BASE_PRICES`].
pub const FALLBACK_BASE_PRICE: f64 = 100.0;

// ---------------------------------------------------------------------------
// Proximity premium
// ---------------------------------------------------------------------------

/// Distance from Kelibia centre (inclusive) inside which the premium applies.
pub const PREMIUM_RADIUS_KM: f64 = 5.0;
/// Price multiplier inside the premium zone (+20%).
pub const PREMIUM_MULTIPLIER: f64 = 1.20;

// ---------------------------------------------------------------------------
// Suggestion
// ---------------------------------------------------------------------------

/// Outcome of a price suggestion.
///
/// Only `price_per_day` is part of the public answer; the other fields
/// describe how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PriceSuggestion {
    pub price_per_day: f64,
    pub base_price: f64,
    pub distance_km: f64,
    pub premium_applied: bool,
}

/// Look up the base price for a category slug by exact match.
pub fn base_price(category_slug: &str) -> f64 {
    CategorySlug::from_slug(category_slug)
        .and_then(|category| {
            BASE_PRICES
                .iter()
                .find(|(c, _)| *c == category)
                .map(|(_, price)| *price)
        })
        .unwrap_or(FALLBACK_BASE_PRICE)
}

/// Whether a listing `distance_km` from Kelibia centre is in the premium zone.
pub fn in_premium_zone(distance_km: f64) -> bool {
    distance_km <= PREMIUM_RADIUS_KM
}

/// Round to two decimal places, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Suggest a daily price for a listing of `category_slug` at `location`.
///
/// Unknown slugs fall back to [`FALLBACK_BASE_PRICE`] rather than failing.
pub fn suggest_price(category_slug: &str, location: GeoPoint) -> PriceSuggestion {
    let base = base_price(category_slug);
    let distance_km = geo::distance_km(location, KELIBIA_CENTER);
    let premium_applied = in_premium_zone(distance_km);

    let price = if premium_applied {
        base * PREMIUM_MULTIPLIER
    } else {
        base
    };

    PriceSuggestion {
        price_per_day: round_to_cents(price),
        base_price: base,
        distance_km,
        premium_applied,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const FAR_AWAY: GeoPoint = GeoPoint::new(0.0, 0.0);

    // -- base prices --

    #[test]
    fn accommodation_far_from_center_gets_base_price() {
        let s = suggest_price("accommodation", FAR_AWAY);
        assert_eq!(s.price_per_day, 150.0);
        assert!(!s.premium_applied);
        assert!(s.distance_km > 4000.0);
    }

    #[test]
    fn unknown_category_falls_back_to_default_price() {
        assert_eq!(suggest_price("unknown-label", FAR_AWAY).price_per_day, 100.0);
        assert_eq!(suggest_price("", FAR_AWAY).price_per_day, 100.0);
    }

    #[test]
    fn base_price_lookup_is_exact() {
        assert_eq!(base_price("mobility"), 60.0);
        assert_eq!(base_price("water-beach-activities"), 30.0);
        assert_eq!(base_price("Mobility"), FALLBACK_BASE_PRICE);
    }

    // -- premium zone --

    #[test]
    fn mobility_at_center_gets_premium() {
        let s = suggest_price("mobility", KELIBIA_CENTER);
        assert_eq!(s.price_per_day, 72.0);
        assert_eq!(s.distance_km, 0.0);
        assert!(s.premium_applied);
    }

    #[test]
    fn premium_applies_to_every_category_at_center() {
        assert_eq!(suggest_price("accommodation", KELIBIA_CENTER).price_per_day, 180.0);
        assert_eq!(
            suggest_price("water-beach-activities", KELIBIA_CENTER).price_per_day,
            36.0
        );
        assert_eq!(suggest_price("unknown-label", KELIBIA_CENTER).price_per_day, 120.0);
    }

    #[test]
    fn premium_boundary_is_inclusive() {
        assert!(in_premium_zone(PREMIUM_RADIUS_KM));
        assert!(in_premium_zone(0.0));
        assert!(!in_premium_zone(5.000_001));
    }

    #[test]
    fn point_on_the_radius_gets_premium() {
        // Due north of the centre by 5 km of arc; lands within 1e-13 km of
        // the radius, on the inside.
        let s = suggest_price("mobility", GeoPoint::new(36.90276608029593, 11.0920));
        assert!((s.distance_km - PREMIUM_RADIUS_KM).abs() < 1e-9, "got {}", s.distance_km);
        assert!(s.distance_km <= PREMIUM_RADIUS_KM);
        assert!(s.premium_applied);
        assert_eq!(s.price_per_day, 72.0);
    }

    #[test]
    fn premium_follows_distance_threshold_across_the_radius() {
        // Sweep northwards from ~4.4 km to ~5.3 km in ~22 m steps.
        let (mut seen_inside, mut seen_outside) = (false, false);
        for step in 0..40 {
            let lat = 36.8978 + step as f64 * 0.0002;
            let s = suggest_price("accommodation", GeoPoint::new(lat, 11.0920));
            let inside = s.distance_km <= PREMIUM_RADIUS_KM;
            assert_eq!(s.premium_applied, inside, "lat {lat}");
            let expected = if inside { 180.0 } else { 150.0 };
            assert_eq!(s.price_per_day, expected, "lat {lat}");
            seen_inside |= inside;
            seen_outside |= !inside;
        }
        assert!(seen_inside && seen_outside);
    }

    #[test]
    fn point_just_inside_radius_gets_premium() {
        // ~4.89 km north of the centre.
        let s = suggest_price("mobility", GeoPoint::new(36.9018, 11.0920));
        assert!(s.distance_km < PREMIUM_RADIUS_KM);
        assert_eq!(s.price_per_day, 72.0);
    }

    #[test]
    fn point_just_outside_radius_gets_base_price() {
        // ~5.11 km north of the centre.
        let s = suggest_price("mobility", GeoPoint::new(36.9038, 11.0920));
        assert!(s.distance_km > PREMIUM_RADIUS_KM);
        assert_eq!(s.price_per_day, 60.0);
    }

    // -- rounding --

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_to_cents(12.344), 12.34);
        assert_eq!(round_to_cents(12.346), 12.35);
        assert_eq!(round_to_cents(72.0), 72.0);
    }

    #[test]
    fn suggestion_is_deterministic() {
        let loc = GeoPoint::new(36.85, 11.1);
        let first = suggest_price("accommodation", loc);
        for _ in 0..10 {
            assert_eq!(suggest_price("accommodation", loc), first);
        }
    }
}
