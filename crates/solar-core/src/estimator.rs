//! Savings estimator
//!
//! Maps a monthly electricity bill to a recommended photovoltaic system
//! size, monthly savings, installed cost and payback period. The model is
//! intentionally simple: a flat tariff, a fixed monthly yield per kWp and a
//! flat cost per kWp, with floors that keep small bills from producing
//! nonsensical quotes.

use serde::{Deserialize, Serialize};

/// Tunable business assumptions behind the estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConstants {
    /// Residential tariff (MXN per kWh)
    pub price_per_kwh: f64,
    /// Monthly production of one installed kWp (kWh)
    pub kwh_per_kwp_month: f64,
    /// Installed cost per kWp (MXN)
    pub cost_per_kwp: f64,
    /// Share of the bill a well-sized system offsets
    pub savings_ratio: f64,
    /// Smallest installation worth quoting (MXN)
    pub min_system_cost: u64,
    /// Shortest payback ever reported (months)
    pub min_payback_months: u32,
}

impl Default for EstimatorConstants {
    fn default() -> Self {
        Self {
            price_per_kwh: 2.8,
            kwh_per_kwp_month: 140.0,
            cost_per_kwp: 25_000.0,
            savings_ratio: 0.90,
            min_system_cost: 20_000,
            min_payback_months: 6,
        }
    }
}

/// Derived estimate; never mutated independently of its input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorOutput {
    /// Energy the bill pays for (kWh/month), never below 1
    pub monthly_energy: f64,
    /// Recommended capacity in kWp, two decimals
    pub system_size_kwp: f64,
    pub monthly_savings: u64,
    pub estimated_cost: u64,
    pub payback_months: u32,
}

impl EstimatorConstants {
    /// Estimate a system for the given monthly spend.
    ///
    /// Negative, NaN and infinite spends are treated as zero, so the result
    /// always sits at or above the configured floors. A spend too small to
    /// save a whole peso reports the minimum payback.
    pub fn estimate(&self, monthly_spend: f64) -> EstimatorOutput {
        let spend = if monthly_spend.is_finite() { monthly_spend.max(0.0) } else { 0.0 };

        let monthly_energy = (spend / self.price_per_kwh).max(1.0);
        let system_size_kwp = round2(monthly_energy / self.kwh_per_kwp_month);
        let monthly_savings = (spend * self.savings_ratio).round() as u64;
        let estimated_cost = ((system_size_kwp * self.cost_per_kwp).round() as u64)
            .max(self.min_system_cost);
        // No savings means no payback horizon; report the floor.
        let payback_months = match monthly_savings {
            0 => self.min_payback_months,
            savings => ((estimated_cost as f64 / savings as f64).round() as u32)
                .max(self.min_payback_months),
        };

        EstimatorOutput {
            monthly_energy,
            system_size_kwp,
            monthly_savings,
            estimated_cost,
            payback_months,
        }
    }
}

/// Estimate with the default constants
pub fn estimate(monthly_spend: f64) -> EstimatorOutput {
    EstimatorConstants::default().estimate(monthly_spend)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_scenario() {
        let out = estimate(1200.0);
        assert_relative_eq!(out.monthly_energy, 428.5714, epsilon = 0.0001);
        assert_relative_eq!(out.system_size_kwp, 3.06, epsilon = 1e-9);
        assert_eq!(out.monthly_savings, 1080);
        assert_eq!(out.estimated_cost, 76_500);
        assert_eq!(out.payback_months, 71);
    }

    #[test]
    fn test_zero_spend_hits_floors() {
        let out = estimate(0.0);
        assert_relative_eq!(out.monthly_energy, 1.0);
        assert_relative_eq!(out.system_size_kwp, 0.01, epsilon = 1e-9);
        assert_eq!(out.monthly_savings, 0);
        assert_eq!(out.estimated_cost, 20_000);
        assert_eq!(out.payback_months, 6);
    }

    #[test]
    fn test_single_unit_of_savings() {
        let out = estimate(1.0);
        assert_eq!(out.monthly_savings, 1);
        assert_eq!(out.payback_months, 20_000);
    }

    #[test]
    fn test_small_bill_uses_minimum_cost() {
        let out = estimate(300.0);
        assert_relative_eq!(out.system_size_kwp, 0.77, epsilon = 1e-9);
        assert_eq!(out.estimated_cost, 20_000);
        assert_eq!(out.monthly_savings, 270);
        assert_eq!(out.payback_months, 74);
    }

    #[test]
    fn test_large_bill_hits_payback_floor_with_custom_constants() {
        let constants = EstimatorConstants {
            cost_per_kwp: 100.0,
            ..Default::default()
        };
        let out = constants.estimate(8000.0);
        assert_eq!(out.estimated_cost, 20_000);
        assert_eq!(out.monthly_savings, 7200);
        assert_eq!(out.payback_months, 6);
    }

    #[test]
    fn test_degenerate_inputs_are_zeroed() {
        let zero = estimate(0.0);
        assert_eq!(estimate(-500.0), zero);
        assert_eq!(estimate(f64::NAN), zero);
        assert_eq!(estimate(f64::INFINITY), zero);
    }

    #[test]
    fn test_round2() {
        assert_relative_eq!(round2(3.0612), 3.06);
        assert_relative_eq!(round2(0.005), 0.01);
        assert_relative_eq!(round2(57.1428), 57.14);
    }

    #[test]
    fn test_constants_serde() {
        let json = serde_json::to_string(&EstimatorConstants::default()).unwrap();
        let back: EstimatorConstants = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EstimatorConstants::default());
    }
}
