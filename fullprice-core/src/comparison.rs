//! Pairwise comparison and scoring over annualized impacts.

use crate::lifecycle::{self, extract};
use fullprice_schemas::{
    impact::MetricKey,
    product::{Component, Product},
};
use serde::Serialize;
use std::cmp::Ordering;

// Fixed scale constants that bring the four environmental dimensions onto a
// comparable magnitude before averaging.
const GHG_SCALE: f64 = 100.0;
const WATER_SCALE: f64 = 10_000.0;
const ENERGY_SCALE: f64 = 10.0;
const LAND_SCALE: f64 = 100.0;

/// Result of comparing two products on one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Annual impact of A minus annual impact of B; positive means A has
    /// more impact.
    pub difference: f64,
    /// Difference relative to B's annual impact, in percent. 0 when B's
    /// impact is 0.
    pub percent_difference: f64,
    /// Name of the product with the lower annual impact. Lower is better
    /// for every supported metric; ties go to A.
    pub winner: String,
    pub product_a_impact: f64,
    pub product_b_impact: f64,
}

/// Compares two products on one metric using their annualized impacts.
pub fn compare_products(a: &Product, b: &Product, metric: MetricKey) -> Comparison {
    let impact_a = lifecycle::annual_impact(a, metric);
    let impact_b = lifecycle::annual_impact(b, metric);

    let difference = impact_a - impact_b;
    let percent_difference = if impact_b != 0.0 {
        (difference / impact_b) * 100.0
    } else {
        0.0
    };
    let winner = if difference > 0.0 {
        b.name.clone()
    } else {
        a.name.clone()
    };

    Comparison {
        difference,
        percent_difference,
        winner,
        product_a_impact: impact_a,
        product_b_impact: impact_b,
    }
}

fn weighted_impact(ghg: f64, water: f64, energy: f64, land: f64) -> f64 {
    ghg / GHG_SCALE + water / WATER_SCALE + energy / ENERGY_SCALE + land / LAND_SCALE
}

/// Overall environmental footprint score. Lower is better. Increasing any
/// single raw impact never decreases the score.
pub fn environmental_score(product: &Product) -> f64 {
    weighted_impact(
        extract(product.impact(MetricKey::GreenhouseGasKg)),
        extract(product.impact(MetricKey::WaterLiters)),
        extract(product.impact(MetricKey::EnergyKwh)),
        extract(product.impact(MetricKey::LandM2)),
    ) / 4.0
}

/// A component annotated with its weighted total impact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedComponent {
    #[serde(flatten)]
    pub component: Component,
    pub total_impact: f64,
}

/// Ranks a product's components by weighted total impact, highest first.
/// Components with equal totals keep their catalog order. Products without
/// component data yield an empty list.
pub fn component_breakdown(product: &Product) -> Vec<RankedComponent> {
    let Some(components) = &product.components else {
        return Vec::new();
    };

    let mut ranked: Vec<RankedComponent> = components
        .iter()
        .map(|component| RankedComponent {
            total_impact: component_total_impact(component),
            component: component.clone(),
        })
        .collect();
    // sort_by is stable, so ties preserve catalog order.
    ranked.sort_by(|a, b| {
        b.total_impact
            .partial_cmp(&a.total_impact)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

fn component_total_impact(component: &Component) -> f64 {
    let get = |metric: MetricKey| component.impacts.get(&metric).copied().unwrap_or(0.0);
    weighted_impact(
        get(MetricKey::GreenhouseGasKg),
        get(MetricKey::WaterLiters),
        get(MetricKey::EnergyKwh),
        get(MetricKey::LandM2),
    )
}
