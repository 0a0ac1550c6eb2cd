//! Lifecycle normalization: turns the per-item and per-phase figures in the
//! catalog into annualized quantities that can be compared across products
//! with very different usage patterns.
//!
//! The single normalization factor is items-per-year, how many physical
//! units a user must buy annually:
//!
//! ```text
//! items_per_year = uses_per_year / average_lifespan_uses
//! ```
//!
//! A paper napkin used daily (365 uses/year, 1 use per item) costs 365 items
//! a year; a cloth napkin used 250 times a year that survives 500 uses costs
//! 0.5 items a year. Multiplying a per-item impact by this factor makes the
//! two directly comparable.

use fullprice_schemas::{
    impact::{ImpactValue, MetricKey, Phase, Source},
    product::Product,
};
use serde::Serialize;

/// Usage fields are assumed positive; zero or missing values fall back to 1
/// so the normalization arithmetic stays defined everywhere.
fn positive_or_one(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        1.0
    }
}

/// Extracts a plain number from an optional impact entry. Absent entries
/// degrade to 0 rather than failing.
pub fn extract(raw: Option<&ImpactValue>) -> f64 {
    raw.map_or(0.0, ImpactValue::value)
}

pub fn uses_per_year(product: &Product) -> f64 {
    positive_or_one(product.uses_per_year)
}

pub fn lifespan_uses(product: &Product) -> f64 {
    positive_or_one(product.average_lifespan_uses)
}

/// How many items a user must purchase per year.
pub fn items_per_year(product: &Product) -> f64 {
    uses_per_year(product) / lifespan_uses(product)
}

/// Years one purchased item lasts before replacement.
pub fn years_until_replacement(product: &Product) -> f64 {
    lifespan_uses(product) / uses_per_year(product)
}

/// A consumable is replaced at (or before) every use. The classification
/// decides which lifecycle phases count as upfront versus recurring.
pub fn is_consumable(product: &Product) -> bool {
    lifespan_uses(product) <= 1.0
}

/// Annual aggregate impact of a product for one metric.
///
/// Annotated catalog values are already annualized upstream and pass through
/// untouched; legacy bare numbers are per-item figures and scale by
/// items-per-year. Missing entries are 0.
pub fn annual_impact(product: &Product, metric: MetricKey) -> f64 {
    match product.impact(metric) {
        Some(ImpactValue::Annotated { value, .. }) => *value,
        Some(ImpactValue::Number(per_item)) => per_item * items_per_year(product),
        None => 0.0,
    }
}

/// One annualized phase figure with its provenance carried through from the
/// catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseImpact {
    pub value: f64,
    pub sources: Vec<Source>,
}

/// Annualized impact of one metric split across the four lifecycle phases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseBreakdown {
    pub production: PhaseImpact,
    pub transport: PhaseImpact,
    pub end_of_life: PhaseImpact,
    #[serde(rename = "use")]
    pub use_phase: PhaseImpact,
    pub total: f64,
}

/// Annual impact for one metric, broken down by lifecycle phase.
///
/// Returns `None` when the product carries no phase data at all, which
/// callers must treat differently from an all-zero breakdown.
///
/// Convention: production, transport and end-of-life are per-item figures
/// and scale by items-per-year; the use phase arrives from the exporter
/// already annualized and is taken as-is. Scaling it again would double
/// count a year of use.
pub fn annual_impact_by_phase(product: &Product, metric: MetricKey) -> Option<PhaseBreakdown> {
    product.impacts_by_phase.as_ref()?;

    let scale = items_per_year(product);
    let production = phase_impact(product, Phase::Production, metric, scale);
    let transport = phase_impact(product, Phase::Transport, metric, scale);
    let end_of_life = phase_impact(product, Phase::EndOfLife, metric, scale);
    let use_phase = phase_impact(product, Phase::Use, metric, 1.0);

    let total = production.value + transport.value + end_of_life.value + use_phase.value;
    Some(PhaseBreakdown {
        production,
        transport,
        end_of_life,
        use_phase,
        total,
    })
}

fn phase_impact(product: &Product, phase: Phase, metric: MetricKey, scale: f64) -> PhaseImpact {
    let raw = product.phase_impact(phase, metric);
    PhaseImpact {
        value: extract(raw) * scale,
        sources: raw.map_or_else(Vec::new, |entry| entry.sources().to_vec()),
    }
}
