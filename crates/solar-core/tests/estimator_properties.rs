//! Property-based tests for the estimator and the hand-off links.
//!
//! 1. Outputs stay above their floors for any non-negative spend
//! 2. System size and savings never decrease as spend grows
//! 3. Same input, same output
//! 4. Any lead message survives the WhatsApp link unchanged
//! 5. Spend coercion never panics and agrees with plain integers

use proptest::prelude::*;
use solar_core::{
    estimate, format_lead_message, parse_spend, BusinessConfig, EstimatorConstants, HandOff,
    LeadContact, PropertyType, SLIDER_RANGE,
};

fn spend_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![0.0f64..20_000.0, (0u32..20_000).prop_map(f64::from)]
}

fn property_type_strategy() -> impl Strategy<Value = PropertyType> {
    prop_oneof![
        Just(PropertyType::Casa),
        Just(PropertyType::Negocio),
        Just(PropertyType::Industria),
    ]
}

fn contact_strategy() -> impl Strategy<Value = LeadContact> {
    (
        ".{0,24}",
        ".{0,24}",
        ".{0,16}",
        ".{0,24}",
        property_type_strategy(),
    )
        .prop_map(|(name, email, phone, neighborhood, property_type)| LeadContact {
            name,
            email,
            phone,
            neighborhood,
            property_type,
        })
}

proptest! {
    #[test]
    fn outputs_respect_floors(spend in spend_strategy()) {
        let constants = EstimatorConstants::default();
        let out = estimate(spend);
        prop_assert!(out.system_size_kwp >= 0.0);
        prop_assert!(out.monthly_energy >= 1.0);
        prop_assert!(out.estimated_cost >= constants.min_system_cost);
        prop_assert!(out.payback_months >= constants.min_payback_months);
    }

    #[test]
    fn size_and_savings_are_monotonic(a in spend_strategy(), b in spend_strategy()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (small, large) = (estimate(lo), estimate(hi));
        prop_assert!(small.system_size_kwp <= large.system_size_kwp);
        prop_assert!(small.monthly_savings <= large.monthly_savings);
        prop_assert!(small.estimated_cost <= large.estimated_cost);
    }

    #[test]
    fn estimate_is_deterministic(spend in any::<f64>()) {
        let first = estimate(spend);
        let second = estimate(spend);
        prop_assert_eq!(first.monthly_energy.to_bits(), second.monthly_energy.to_bits());
        prop_assert_eq!(first.system_size_kwp.to_bits(), second.system_size_kwp.to_bits());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn lead_message_round_trips_through_link(
        contact in contact_strategy(),
        spend in 0u32..10_000,
    ) {
        let handoff = HandOff::new(&BusinessConfig::default()).unwrap();
        let message = format_lead_message(&contact, spend, &estimate(f64::from(spend)));
        prop_assert!(!message.is_empty());

        let link = handoff.whatsapp_link(&message);
        prop_assert!(link.starts_with("https://wa.me/523312345678?text="));
        prop_assert_eq!(HandOff::message_from_link(&link).unwrap(), Some(message));
    }

    #[test]
    fn parse_spend_handles_any_text(raw in ".{0,32}") {
        let _ = parse_spend(&raw);
    }

    #[test]
    fn parse_spend_reads_integers(value in any::<u32>()) {
        prop_assert_eq!(parse_spend(&value.to_string()), value);
    }

    #[test]
    fn slider_snap_stays_in_range(value in any::<u32>()) {
        let snapped = SLIDER_RANGE.snap(value);
        prop_assert!(SLIDER_RANGE.contains(snapped));
        prop_assert_eq!((snapped - SLIDER_RANGE.min) % SLIDER_RANGE.step, 0);
    }
}
