//! Renders per-metric break-even charts: two cumulative accrual lines and
//! the crossing point, when one exists inside the chart's horizon.

use anyhow::Result;
use fullprice_core::breakeven::{self, BreakEvenParams};
use fullprice_schemas::{impact::MetricKey, product::Product};
use plotters::prelude::*;

/// Charts ignore crossings further out than this, tighter than the engine's
/// general 100-year bound.
const CHART_HORIZON_YEARS: f64 = 50.0;

/// Generates one break-even chart per requested metric.
pub fn plot_break_even_charts(
    output_dir: &str,
    product_a: &Product,
    product_b: &Product,
    metrics: &[MetricKey],
) -> Result<()> {
    println!("[Plotting] Generating break-even charts...");
    for metric in metrics {
        plot_metric(output_dir, product_a, product_b, *metric)?;
    }
    println!("[Plotting] Charts have been saved to '{}'.", output_dir);
    Ok(())
}

fn plot_metric(
    output_dir: &str,
    product_a: &Product,
    product_b: &Product,
    metric: MetricKey,
) -> Result<()> {
    let params_a = breakeven::break_even_params(product_a, metric);
    let params_b = breakeven::break_even_params(product_b, metric);
    let break_even = breakeven::intersection_within(params_a, params_b, CHART_HORIZON_YEARS);

    // Show at least 5 years, or half again past the break-even, capped at 20.
    let max_year = break_even.map_or(5.0, |t| (t * 1.5).ceil().clamp(5.0, 20.0));
    let max_y = [
        params_a.initial + params_a.slope * max_year,
        params_b.initial + params_b.slope * max_year,
    ]
    .into_iter()
    .fold(1.0, f64::max)
        * 1.1;

    let path = format!("{}/break_even_{}.png", output_dir, metric.as_str());
    let root = BitMapBackend::new(&path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Cumulative {} Over Time", metric.label()),
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..max_year, 0f64..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Years")
        .y_desc(metric.unit())
        .draw()?;

    for (product, params, color) in [
        (product_a, params_a, RED),
        (product_b, params_b, BLUE),
    ] {
        let line = accrual_line(params, max_year);
        chart
            .draw_series(LineSeries::new(line, color.stroke_width(2)))?
            .label(&product.name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
    }

    if let Some(t) = break_even {
        let y = params_a.initial + params_a.slope * t;
        chart.draw_series(std::iter::once(Circle::new((t, y), 5, BLACK.filled())))?;
        let label = if t < 1.0 {
            format!("{} days", (t * 365.0).round() as i64)
        } else {
            format!("{:.1} yrs", t)
        };
        chart.draw_series(std::iter::once(Text::new(
            label,
            (t, y + max_y * 0.05),
            ("sans-serif", 18).into_font(),
        )))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

// Straight lines only need their endpoints.
fn accrual_line(params: BreakEvenParams, max_year: f64) -> Vec<(f64, f64)> {
    vec![
        (0.0, params.initial),
        (max_year, params.initial + params.slope * max_year),
    ]
}
