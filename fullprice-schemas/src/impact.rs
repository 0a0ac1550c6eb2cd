use serde::{Deserialize, Serialize};

/// The five impact dimensions tracked for every product.
///
/// Keys match the metric names used in the exported catalog JSON, so the
/// enum doubles as the map key for `impacts` and `impacts_by_phase`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    GreenhouseGasKg,
    WaterLiters,
    EnergyKwh,
    LandM2,
    CostUsd,
}

impl MetricKey {
    pub const ALL: [MetricKey; 5] = [
        MetricKey::CostUsd,
        MetricKey::GreenhouseGasKg,
        MetricKey::WaterLiters,
        MetricKey::EnergyKwh,
        MetricKey::LandM2,
    ];

    /// True for every metric except cost. Environmental metrics draw their
    /// upfront figure from the lifecycle phases rather than the purchase price.
    pub fn is_environmental(&self) -> bool {
        !matches!(self, MetricKey::CostUsd)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricKey::GreenhouseGasKg => "CO2e Emissions",
            MetricKey::WaterLiters => "Water Usage",
            MetricKey::EnergyKwh => "Energy",
            MetricKey::LandM2 => "Land Use",
            MetricKey::CostUsd => "Cost",
        }
    }

    /// The snake_case key used in catalog JSON and output file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::GreenhouseGasKg => "greenhouse_gas_kg",
            MetricKey::WaterLiters => "water_liters",
            MetricKey::EnergyKwh => "energy_kwh",
            MetricKey::LandM2 => "land_m2",
            MetricKey::CostUsd => "cost_usd",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MetricKey::GreenhouseGasKg => "kg CO2e",
            MetricKey::WaterLiters => "L",
            MetricKey::EnergyKwh => "kWh",
            MetricKey::LandM2 => "m2",
            MetricKey::CostUsd => "USD",
        }
    }
}

/// A lifecycle stage at which impact accrues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Production,
    Transport,
    Use,
    EndOfLife,
}

/// One line of provenance for a calculated impact value, as emitted by the
/// catalog exporter. `sub_sources` nests component-level contributions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Source {
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_sources: Vec<Source>,
}

/// An impact figure as it appears in the catalog.
///
/// The exporter has shipped two shapes over time: a bare number (a legacy
/// per-item figure) and a record carrying an already-annualized value plus
/// the provenance behind it. Everything downstream must go through
/// [`ImpactValue::value`] instead of matching on the variants, so the two
/// shapes cannot drift apart at call sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImpactValue {
    Number(f64),
    Annotated {
        value: f64,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        sources: Vec<Source>,
    },
}

impl ImpactValue {
    /// Extracts the plain numeric value. Idempotent and total.
    pub fn value(&self) -> f64 {
        match self {
            ImpactValue::Number(n) => *n,
            ImpactValue::Annotated { value, .. } => *value,
        }
    }

    /// The provenance records, empty for legacy numeric values.
    pub fn sources(&self) -> &[Source] {
        match self {
            ImpactValue::Number(_) => &[],
            ImpactValue::Annotated { sources, .. } => sources,
        }
    }

    /// True when the value came in as the rich, pre-annualized record.
    pub fn is_annotated(&self) -> bool {
        matches!(self, ImpactValue::Annotated { .. })
    }
}

impl Default for ImpactValue {
    fn default() -> Self {
        ImpactValue::Number(0.0)
    }
}

impl From<f64> for ImpactValue {
    fn from(n: f64) -> Self {
        ImpactValue::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_legacy_numeric_value() {
        let raw: ImpactValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(raw, ImpactValue::Number(2.5));
        assert_eq!(raw.value(), 2.5);
        assert!(raw.sources().is_empty());
    }

    #[test]
    fn deserializes_annotated_value_with_sources() {
        let raw: ImpactValue = serde_json::from_str(
            r#"{"value": 36.5, "sources": [{"item": "Paper pulp", "value": 0.1}]}"#,
        )
        .unwrap();
        assert_eq!(raw.value(), 36.5);
        assert!(raw.is_annotated());
        assert_eq!(raw.sources().len(), 1);
        assert_eq!(raw.sources()[0].item, "Paper pulp");
    }

    #[test]
    fn extraction_is_idempotent() {
        let raw = ImpactValue::Annotated {
            value: 7.0,
            sources: vec![],
        };
        assert_eq!(raw.value(), raw.value());
    }

    #[test]
    fn metric_keys_round_trip_as_map_keys() {
        let json = r#"{"greenhouse_gas_kg": 1.0, "cost_usd": 0.02}"#;
        let map: std::collections::HashMap<MetricKey, ImpactValue> =
            serde_json::from_str(json).unwrap();
        assert_eq!(map[&MetricKey::GreenhouseGasKg].value(), 1.0);
        assert_eq!(map[&MetricKey::CostUsd].value(), 0.02);
    }
}
