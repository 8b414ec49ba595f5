//! Report rendering: plain text table, JSON, CSV

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::FarmReport;

use crate::error::{AppError, AppResult};

/// Output format for the rendered report
#[derive(Debug, Clone, Copy, Deserialize, ValueEnum, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render(report: &FarmReport, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => render_csv(report),
    }
}

fn fmt_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

fn fmt_optional(value: Option<Decimal>) -> String {
    value.map(fmt_decimal).unwrap_or_else(|| "-".to_string())
}

fn render_text(report: &FarmReport) -> String {
    let mut lines = Vec::with_capacity(report.batches.len() + 5);

    lines.push(match &report.environment {
        Some(env) => format!(
            "Environment: sun={} wind={}",
            env.sun.map_or("-", |l| l.as_str()),
            env.wind.map_or("-", |l| l.as_str()),
        ),
        None => "Environment: none".to_string(),
    });
    lines.push(format!(
        "{:<16} {:>10} {:>12} {:>12} {:>12} {:>12}",
        "crop", "count", "yield", "cost", "revenue", "profit"
    ));

    for batch in &report.batches {
        lines.push(format!(
            "{:<16} {:>10} {:>12} {:>12} {:>12} {:>12}",
            batch.name,
            fmt_decimal(batch.num_crops),
            fmt_decimal(batch.batch_yield),
            fmt_optional(batch.cost),
            fmt_optional(batch.revenue),
            fmt_optional(batch.profit),
        ));
    }

    lines.push(format!("Total yield: {}", fmt_decimal(report.total_yield)));
    lines.push(match report.total_profit {
        Some(profit) => format!("Total profit: {}", fmt_decimal(profit)),
        None => {
            let unpriced: Vec<&str> = report.unpriced_batches().map(|b| b.name.as_str()).collect();
            format!("Total profit: n/a (unpriced: {})", unpriced.join(", "))
        }
    });

    lines.join("\n")
}

/// Export batch rows as CSV
fn render_csv(report: &FarmReport) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for batch in &report.batches {
        wtr.serialize(batch)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Output(format!("CSV writer error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::Output(format!("UTF-8 conversion error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{farm_report, CalculatorOptions, CropBatch, EnvironmentFactors, Farm, Level, Plant};

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn report(env: Option<EnvironmentFactors>) -> FarmReport {
        let farm = Farm::new(vec![
            CropBatch::new(
                Plant::new("corn", dec(30))
                    .with_costs(dec(1))
                    .with_sale_price(dec(2)),
                dec(20),
            ),
            CropBatch::new(Plant::new("bean", dec(2)), dec(5)),
        ]);
        farm_report(&farm, env.as_ref(), CalculatorOptions::default()).unwrap()
    }

    #[test]
    fn test_render_text() {
        let text = render(&report(None), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Environment: none");
        assert!(lines[2].starts_with("corn"));
        assert!(lines[2].ends_with("1180"));
        assert!(lines[3].starts_with("bean"));
        assert!(lines[3].trim_end().ends_with('-'));
        assert_eq!(lines[4], "Total yield: 610");
        assert_eq!(lines[5], "Total profit: n/a (unpriced: bean)");
    }

    #[test]
    fn test_render_text_environment_header() {
        let env = EnvironmentFactors::sun_only(Level::High);
        let text = render(&report(Some(env)), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Environment: sun=high wind=-"));
    }

    #[test]
    fn test_render_json() {
        let json = render(&report(None), OutputFormat::Json).unwrap();
        let parsed: FarmReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report(None));
    }

    #[test]
    fn test_render_csv() {
        let csv = render(&report(None), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "name,numCrops,plantYield,batchYield,cost,revenue,profit"
        );
        assert!(lines[1].starts_with("corn,20,30,600,20,1200,1180"));
        assert_eq!(lines[2], "bean,5,2,10,,,");
    }
}
