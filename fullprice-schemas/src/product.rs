use crate::impact::{ImpactValue, MetricKey, Phase};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_one() -> f64 {
    1.0
}

/// A material-level slice of a product, used for the "which material
/// contributes most" breakdown. Impacts here are plain per-item numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub component_id: String,
    pub material_name: String,
    #[serde(default)]
    pub weight_grams: f64,
    #[serde(default)]
    pub impacts: HashMap<MetricKey, f64>,
}

/// A product in the catalog, as exported to static JSON.
///
/// `impacts` holds the aggregate per-metric figures; `impacts_by_phase`
/// (when present) breaks them out by lifecycle stage. Usage fields default
/// to 1 so that a bare product record still yields well-defined
/// annualization arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Price at purchase for a single item.
    #[serde(default)]
    pub purchase_price_usd: f64,
    /// Average uses per year (365 for daily use, 1 for yearly).
    #[serde(default = "default_one")]
    pub uses_per_year: f64,
    /// Uses a single purchased item survives; 1 denotes single-use.
    #[serde(default = "default_one")]
    pub average_lifespan_uses: f64,
    #[serde(default)]
    pub impacts: HashMap<MetricKey, ImpactValue>,
    /// Per-phase breakdown. `None` means the catalog carries no phase
    /// detail for this product, which is distinct from all-zero phases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impacts_by_phase: Option<HashMap<Phase, HashMap<MetricKey, ImpactValue>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
}

impl Product {
    /// The raw aggregate impact entry for a metric, if the catalog has one.
    pub fn impact(&self, metric: MetricKey) -> Option<&ImpactValue> {
        self.impacts.get(&metric)
    }

    /// The raw phase entry for a metric, if phase data exists at all.
    pub fn phase_impact(&self, phase: Phase, metric: MetricKey) -> Option<&ImpactValue> {
        self.impacts_by_phase
            .as_ref()
            .and_then(|phases| phases.get(&phase))
            .and_then(|metrics| metrics.get(&metric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_fields_default_to_one() {
        let product: Product = serde_json::from_str(
            r#"{"product_id": "paper-napkin", "name": "Paper Napkin"}"#,
        )
        .unwrap();
        assert_eq!(product.uses_per_year, 1.0);
        assert_eq!(product.average_lifespan_uses, 1.0);
        assert_eq!(product.purchase_price_usd, 0.0);
        assert!(product.impacts_by_phase.is_none());
    }

    #[test]
    fn phase_impact_requires_phase_data() {
        let product: Product = serde_json::from_str(
            r#"{
                "product_id": "cloth-napkin",
                "name": "Cloth Napkin",
                "impacts_by_phase": {
                    "use": {"cost_usd": {"value": 0.01}}
                }
            }"#,
        )
        .unwrap();
        let entry = product.phase_impact(Phase::Use, MetricKey::CostUsd).unwrap();
        assert_eq!(entry.value(), 0.01);
        assert!(product.phase_impact(Phase::Production, MetricKey::CostUsd).is_none());
    }
}
