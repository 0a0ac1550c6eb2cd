use crate::{config::Catalog, plotting, request::ComparisonRequest};
use anyhow::Result;
use fullprice_core::report;

/// Runs the full comparison for a request: computes every metric summary,
/// writes the CSV and JSON artifacts, renders the break-even charts and
/// prints a console summary.
pub fn run_comparison(
    catalog: &Catalog,
    request: &ComparisonRequest,
    output_dir: &str,
) -> Result<()> {
    let product_a = catalog.product(&request.product_a)?;
    let product_b = catalog.product(&request.product_b)?;

    println!("--- Comparing '{}' vs '{}' ---", product_a.name, product_b.name);
    let summary = report::comparison_summary(product_a, product_b);

    println!(
        "\n{:<20} {:>14} {:>14}  {:<24} {:>12}",
        "Metric", product_a.name, product_b.name, "Winner", "Break-even"
    );
    for entry in &summary.metrics {
        let break_even = match entry.break_even_years {
            Some(t) if t < 0.5 => format!("{} days", (t * 365.0).round() as i64),
            Some(t) => format!("{:.1} yrs", t),
            None => "-".to_string(),
        };
        println!(
            "{:<20} {:>14.3} {:>14.3}  {:<24} {:>12}",
            entry.metric.label(),
            entry.comparison.product_a_impact,
            entry.comparison.product_b_impact,
            entry.comparison.winner,
            break_even
        );
    }

    println!(
        "\nEnvironmental score: {} {:.4} vs {} {:.4} (lower is better)",
        product_a.name,
        summary.environmental_score_a,
        product_b.name,
        summary.environmental_score_b
    );

    for (name, components) in [
        (&product_a.name, &summary.components_a),
        (&product_b.name, &summary.components_b),
    ] {
        if let Some(top) = components.first() {
            println!(
                "Highest-impact material in {}: {} ({:.4})",
                name, top.component.material_name, top.total_impact
            );
        }
    }

    report::write_comparison_csv(&format!("{}/comparison.csv", output_dir), &summary)?;
    report::write_comparison_json(&format!("{}/comparison.json", output_dir), &summary)?;

    plotting::plot_break_even_charts(output_dir, product_a, product_b, &request.metrics())?;

    Ok(())
}
