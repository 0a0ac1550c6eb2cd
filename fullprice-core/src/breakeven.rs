//! Break-even analysis between a lower-upfront, higher-recurring option and
//! a higher-upfront, lower-recurring one.
//!
//! Every product/metric pair reduces to a linear accrual model
//! `cumulative(t) = initial + slope * t` over years of use. Two such lines
//! either cross at a meaningful point in the future or they do not; a
//! crossing in the past or implausibly far out is reported as no break-even
//! rather than as a negative or huge number.

use crate::lifecycle::{self, extract};
use fullprice_schemas::{
    impact::{MetricKey, Phase},
    product::Product,
};
use serde::Serialize;

/// Slope differences at or below this are treated as parallel lines.
pub const SLOPE_EPSILON: f64 = 1e-6;

/// Crossings beyond this many years are not meaningful break-evens.
pub const MAX_HORIZON_YEARS: f64 = 100.0;

/// Linear accrual model for one product and metric:
/// `cumulative(t) = initial + slope * t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakEvenParams {
    /// Upfront cost or embodied impact at t = 0.
    pub initial: f64,
    /// Annual accrual rate.
    pub slope: f64,
}

/// Derives the linear accrual model for a product and metric.
///
/// Consumables have no meaningful upfront/durable split: everything is
/// run-rate, so `initial` is 0 and `slope` is the full annual figure. A
/// durable pays its purchase price (or the embodied impact of manufacturing
/// one item) upfront and accrues only the use phase annually.
pub fn break_even_params(product: &Product, metric: MetricKey) -> BreakEvenParams {
    if lifecycle::is_consumable(product) {
        let slope = if metric == MetricKey::CostUsd {
            product.purchase_price_usd * lifecycle::items_per_year(product)
        } else {
            lifecycle::annual_impact(product, metric)
        };
        return BreakEvenParams {
            initial: 0.0,
            slope,
        };
    }

    if metric == MetricKey::CostUsd {
        BreakEvenParams {
            initial: product.purchase_price_usd,
            slope: extract(product.phase_impact(Phase::Use, metric)),
        }
    } else {
        // Embodied impact of one durable item; bought rarely, so not scaled
        // by items-per-year.
        let phase = |phase| extract(product.phase_impact(phase, metric));
        BreakEvenParams {
            initial: phase(Phase::Production) + phase(Phase::Transport) + phase(Phase::EndOfLife),
            slope: phase(Phase::Use),
        }
    }
}

/// Solves for the crossing of two accrual lines within the default
/// 100-year horizon.
pub fn break_even_intersection(a: BreakEvenParams, b: BreakEvenParams) -> Option<f64> {
    intersection_within(a, b, MAX_HORIZON_YEARS)
}

/// Solves `a.initial + a.slope*t = b.initial + b.slope*t` for t, returning
/// `None` for parallel lines or crossings outside `(0, horizon_years)`.
pub fn intersection_within(
    a: BreakEvenParams,
    b: BreakEvenParams,
    horizon_years: f64,
) -> Option<f64> {
    let slope_diff = a.slope - b.slope;
    if slope_diff.abs() <= SLOPE_EPSILON {
        return None;
    }
    let t = (b.initial - a.initial) / slope_diff;
    (t > 0.0 && t < horizon_years).then_some(t)
}

/// Break-even between two products directly from their catalog records.
///
/// This variant frames the accrual differently from [`break_even_params`]:
/// the upfront figure for environmental metrics is the non-use phases scaled
/// by items-per-year, and the slope is the full annual impact. Both
/// orderings are evaluated and the smaller positive crossing wins, since the
/// two framings can disagree on which amortization is the reference. When
/// one product dominates the other on both upfront and annual figures there
/// is no crossing to report.
pub fn advanced_break_even(a: &Product, b: &Product, metric: MetricKey) -> Option<f64> {
    match (one_way(a, b, metric), one_way(b, a, metric)) {
        (Some(t1), Some(t2)) => Some(t1.min(t2)),
        (t1, t2) => t1.or(t2),
    }
}

fn one_way(a: &Product, b: &Product, metric: MetricKey) -> Option<f64> {
    let upfront_a = upfront(a, metric);
    let upfront_b = upfront(b, metric);
    let annual_a = lifecycle::annual_impact(a, metric);
    let annual_b = lifecycle::annual_impact(b, metric);

    if annual_a == annual_b {
        return None;
    }
    // One product dominating both dimensions means the lines never cross
    // forward in time.
    if upfront_a <= upfront_b && annual_a <= annual_b {
        return None;
    }
    if upfront_b <= upfront_a && annual_b <= annual_a {
        return None;
    }

    let t = (upfront_a - upfront_b) / (annual_b - annual_a);
    (t > 0.0 && t < MAX_HORIZON_YEARS).then_some(t)
}

fn upfront(product: &Product, metric: MetricKey) -> f64 {
    if metric == MetricKey::CostUsd {
        return product.purchase_price_usd;
    }
    if product.impacts_by_phase.is_none() {
        return 0.0;
    }
    let phase = |phase| extract(product.phase_impact(phase, metric));
    let per_item =
        phase(Phase::Production) + phase(Phase::Transport) + phase(Phase::EndOfLife);
    per_item * lifecycle::items_per_year(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fullprice_schemas::impact::ImpactValue;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn product(uses_per_year: f64, lifespan_uses: f64, price: f64) -> Product {
        Product {
            product_id: "test".to_string(),
            name: "Test Product".to_string(),
            description: None,
            category: None,
            purchase_price_usd: price,
            uses_per_year,
            average_lifespan_uses: lifespan_uses,
            impacts: HashMap::new(),
            impacts_by_phase: None,
            components: None,
        }
    }

    fn set_phase(product: &mut Product, phase: Phase, metric: MetricKey, value: f64) {
        product
            .impacts_by_phase
            .get_or_insert_with(HashMap::new)
            .entry(phase)
            .or_default()
            .insert(metric, ImpactValue::Annotated {
                value,
                sources: vec![],
            });
    }

    #[test]
    fn consumable_cost_accrues_at_annual_run_rate() {
        // Paper napkin: $0.02 each, 365 a year.
        let napkin = product(365.0, 1.0, 0.02);
        let params = break_even_params(&napkin, MetricKey::CostUsd);
        assert_eq!(params.initial, 0.0);
        assert!((params.slope - 7.3).abs() < 1e-9);
    }

    #[test]
    fn durable_cost_pays_price_upfront() {
        // Cloth napkin: $2.00 upfront, $0.01 of washing a year.
        let mut napkin = product(250.0, 5000.0, 2.0);
        set_phase(&mut napkin, Phase::Use, MetricKey::CostUsd, 0.01);
        let params = break_even_params(&napkin, MetricKey::CostUsd);
        assert_eq!(params.initial, 2.0);
        assert_eq!(params.slope, 0.01);
    }

    #[test]
    fn durable_environmental_upfront_is_embodied_impact() {
        let mut bottle = product(365.0, 1000.0, 15.0);
        set_phase(&mut bottle, Phase::Production, MetricKey::GreenhouseGasKg, 4.0);
        set_phase(&mut bottle, Phase::Transport, MetricKey::GreenhouseGasKg, 1.0);
        set_phase(&mut bottle, Phase::EndOfLife, MetricKey::GreenhouseGasKg, 0.5);
        set_phase(&mut bottle, Phase::Use, MetricKey::GreenhouseGasKg, 0.2);
        let params = break_even_params(&bottle, MetricKey::GreenhouseGasKg);
        assert_eq!(params.initial, 5.5);
        assert_eq!(params.slope, 0.2);
    }

    #[test]
    fn consumable_environmental_slope_is_annualized_impact() {
        let mut cup = product(200.0, 1.0, 0.1);
        cup.impacts
            .insert(MetricKey::GreenhouseGasKg, ImpactValue::Number(0.05));
        let params = break_even_params(&cup, MetricKey::GreenhouseGasKg);
        assert_eq!(params.initial, 0.0);
        assert!((params.slope - 10.0).abs() < 1e-9);
    }

    #[test]
    fn finds_crossing_of_diverging_lines() {
        // 10t = 50 at t = 5.
        let disposable = BreakEvenParams {
            initial: 0.0,
            slope: 10.0,
        };
        let durable = BreakEvenParams {
            initial: 50.0,
            slope: 0.0,
        };
        let t = break_even_intersection(disposable, durable).unwrap();
        assert!((t - 5.0).abs() < 1e-9);
    }

    #[test]
    fn dominated_option_has_no_break_even() {
        // Second line starts higher and grows faster; crossing is in the past.
        let a = BreakEvenParams {
            initial: 0.0,
            slope: 10.0,
        };
        let b = BreakEvenParams {
            initial: 50.0,
            slope: 20.0,
        };
        assert_eq!(break_even_intersection(a, b), None);
    }

    #[test]
    fn parallel_lines_have_no_break_even() {
        let a = BreakEvenParams {
            initial: 0.0,
            slope: 10.0,
        };
        let b = BreakEvenParams {
            initial: 50.0,
            slope: 10.0,
        };
        assert_eq!(break_even_intersection(a, b), None);
    }

    #[test]
    fn crossings_past_the_horizon_are_discarded() {
        let a = BreakEvenParams {
            initial: 0.0,
            slope: 1.0,
        };
        let b = BreakEvenParams {
            initial: 200.0,
            slope: 0.0,
        };
        assert_eq!(break_even_intersection(a, b), None);
        assert!(intersection_within(a, b, 500.0).is_some());
    }

    #[test]
    fn tighter_horizons_reject_later_crossings() {
        let a = BreakEvenParams {
            initial: 0.0,
            slope: 1.0,
        };
        let b = BreakEvenParams {
            initial: 60.0,
            slope: 0.0,
        };
        assert_eq!(intersection_within(a, b, 50.0), None);
        assert!((break_even_intersection(a, b).unwrap() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn advanced_break_even_crosses_disposable_and_durable() {
        // Disposable: no upfront, $7.30 of napkins a year.
        let mut disposable = product(365.0, 1.0, 0.0);
        disposable
            .impacts
            .insert(MetricKey::CostUsd, ImpactValue::Annotated {
                value: 7.3,
                sources: vec![],
            });
        // Durable: $20 upfront, $1 of washing a year.
        let mut durable = product(250.0, 5000.0, 20.0);
        durable
            .impacts
            .insert(MetricKey::CostUsd, ImpactValue::Annotated {
                value: 1.0,
                sources: vec![],
            });

        // 7.3t = 20 + 1t  =>  t = 20 / 6.3
        let t = advanced_break_even(&disposable, &durable, MetricKey::CostUsd).unwrap();
        assert!((t - 20.0 / 6.3).abs() < 1e-9);
    }

    #[test]
    fn advanced_break_even_is_none_when_one_product_dominates() {
        // Durable is cheaper upfront and annually; nothing to break even.
        let mut cheap = product(250.0, 5000.0, 5.0);
        cheap
            .impacts
            .insert(MetricKey::CostUsd, ImpactValue::Annotated {
                value: 1.0,
                sources: vec![],
            });
        let mut pricey = product(365.0, 1.0, 10.0);
        pricey
            .impacts
            .insert(MetricKey::CostUsd, ImpactValue::Annotated {
                value: 7.3,
                sources: vec![],
            });
        assert_eq!(
            advanced_break_even(&cheap, &pricey, MetricKey::CostUsd),
            None
        );
    }

    #[test]
    fn advanced_break_even_is_none_for_equal_annual_impacts() {
        let mut a = product(365.0, 1.0, 0.0);
        a.impacts
            .insert(MetricKey::CostUsd, ImpactValue::Annotated {
                value: 5.0,
                sources: vec![],
            });
        let mut b = product(250.0, 5000.0, 10.0);
        b.impacts
            .insert(MetricKey::CostUsd, ImpactValue::Annotated {
                value: 5.0,
                sources: vec![],
            });
        assert_eq!(advanced_break_even(&a, &b, MetricKey::CostUsd), None);
    }
}
