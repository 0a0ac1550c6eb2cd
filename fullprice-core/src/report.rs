//! Machine-readable comparison artifacts: a per-metric CSV table and a JSON
//! summary covering every core computation for a product pair.

use crate::{
    breakeven::{self, BreakEvenParams},
    comparison::{self, Comparison, RankedComponent},
    error::FullPriceError,
    lifecycle::{self, PhaseBreakdown},
};
use csv::Writer;
use fullprice_schemas::{impact::MetricKey, product::Product};
use serde::Serialize;
use std::fs;

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    metric: &'a str,
    unit: &'a str,
    annual_impact_a: f64,
    annual_impact_b: f64,
    difference: f64,
    percent_difference: f64,
    winner: String,
    break_even_years: Option<f64>,
}

/// Everything the presentation layer needs about one metric of a pair.
#[derive(Debug, Serialize)]
pub struct MetricSummary {
    pub metric: MetricKey,
    pub comparison: Comparison,
    pub params_a: BreakEvenParams,
    pub params_b: BreakEvenParams,
    pub break_even_years: Option<f64>,
    pub advanced_break_even_years: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phases_a: Option<PhaseBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phases_b: Option<PhaseBreakdown>,
}

/// Full comparison of two products across all metrics.
#[derive(Debug, Serialize)]
pub struct ComparisonSummary {
    pub product_a: String,
    pub product_b: String,
    pub environmental_score_a: f64,
    pub environmental_score_b: f64,
    pub metrics: Vec<MetricSummary>,
    pub components_a: Vec<RankedComponent>,
    pub components_b: Vec<RankedComponent>,
}

/// Computes the complete comparison record for a product pair.
pub fn comparison_summary(a: &Product, b: &Product) -> ComparisonSummary {
    let metrics = MetricKey::ALL
        .iter()
        .map(|&metric| {
            let params_a = breakeven::break_even_params(a, metric);
            let params_b = breakeven::break_even_params(b, metric);
            MetricSummary {
                metric,
                comparison: comparison::compare_products(a, b, metric),
                params_a,
                params_b,
                break_even_years: breakeven::break_even_intersection(params_a, params_b),
                advanced_break_even_years: breakeven::advanced_break_even(a, b, metric),
                phases_a: lifecycle::annual_impact_by_phase(a, metric),
                phases_b: lifecycle::annual_impact_by_phase(b, metric),
            }
        })
        .collect();

    ComparisonSummary {
        product_a: a.name.clone(),
        product_b: b.name.clone(),
        environmental_score_a: comparison::environmental_score(a),
        environmental_score_b: comparison::environmental_score(b),
        metrics,
        components_a: comparison::component_breakdown(a),
        components_b: comparison::component_breakdown(b),
    }
}

/// Writes one CSV row per metric for a product pair.
pub fn write_comparison_csv(
    path: &str,
    summary: &ComparisonSummary,
) -> Result<(), FullPriceError> {
    let mut writer =
        Writer::from_path(path).map_err(|e| FullPriceError::CsvError(path.to_string(), e))?;

    for entry in &summary.metrics {
        let row = ReportRow {
            metric: entry.metric.as_str(),
            unit: entry.metric.unit(),
            annual_impact_a: entry.comparison.product_a_impact,
            annual_impact_b: entry.comparison.product_b_impact,
            difference: entry.comparison.difference,
            percent_difference: entry.comparison.percent_difference,
            winner: entry.comparison.winner.clone(),
            break_even_years: entry.break_even_years,
        };
        writer
            .serialize(row)
            .map_err(|e| FullPriceError::CsvError(path.to_string(), e))?;
    }
    writer
        .flush()
        .map_err(|e| FullPriceError::FileIO(path.to_string(), e))?;
    Ok(())
}

/// Writes the full summary as pretty-printed JSON.
pub fn write_comparison_json(
    path: &str,
    summary: &ComparisonSummary,
) -> Result<(), FullPriceError> {
    let file =
        fs::File::create(path).map_err(|e| FullPriceError::FileIO(path.to_string(), e))?;
    serde_json::to_writer_pretty(file, summary)?;
    Ok(())
}
