//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::report::Report;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use trigen_domain::TestPlan;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a generated plan for display.
    ///
    /// Plain mode shows the execute log verbatim (the same bytes the save
    /// action exports); table and JSON modes are display-only views.
    pub fn format_plan(&self, tester: &str, plan: &TestPlan, report: &Report) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(report.text.clone()),
            OutputFormat::Table => self.format_plan_table(plan),
            OutputFormat::Json => self.format_plan_json(tester, plan),
        }
    }

    /// Format the cases as a pretty table.
    fn format_plan_table(&self, plan: &TestPlan) -> Result<String> {
        let mut builder = Builder::default();
        builder.push_record(["ID", "Width", "Height", "Area"]);

        for case in &plan.cases {
            builder.push_record([
                case.id.to_string(),
                case.width.to_string(),
                case.height.to_string(),
                format!("{:.2}", case.area()),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format the plan as JSON.
    fn format_plan_json(&self, tester: &str, plan: &TestPlan) -> Result<String> {
        let tester = if tester.is_empty() { "Unknown" } else { tester };
        let cases: Vec<serde_json::Value> = plan
            .cases
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.id,
                    "width": c.width,
                    "height": c.height,
                    "area": c.area(),
                })
            })
            .collect();

        let json = serde_json::json!({
            "tester": tester,
            "strategy": plan.strategy.as_str(),
            "width_points": plan.widths.points,
            "height_points": plan.heights.points,
            "total": plan.total(),
            "cases": cases,
        });

        Ok(serde_json::to_string_pretty(&json)?)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format the separately displayed total-case count.
    pub fn summary(&self, total: usize) -> String {
        self.info(&format!("Total Cases: {}", total))
    }

    /// Format a saved-file confirmation.
    pub fn saved(&self, path: &str) -> String {
        self.success(&format!("Log written to {}", path))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use trigen_domain::{Range, Strategy};

    fn test_plan() -> TestPlan {
        TestPlan::generate(
            Range::new(1, 10),
            Range::new(1, 10),
            Strategy::BoundaryValueAnalysis,
        )
    }

    fn test_report(plan: &TestPlan) -> Report {
        let started = Utc.with_ymd_and_hms(2024, 3, 7, 14, 30, 5).unwrap();
        let finished = Utc.with_ymd_and_hms(2024, 3, 7, 14, 30, 6).unwrap();
        Report::render("Alice", plan, started, finished)
    }

    #[test]
    fn test_plain_format_is_report_text() {
        let plan = test_plan();
        let report = test_report(&plan);
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let output = formatter.format_plan("Alice", &plan, &report).unwrap();
        assert_eq!(output, report.text);
    }

    #[test]
    fn test_table_format() {
        let plan = test_plan();
        let report = test_report(&plan);
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_plan("Alice", &plan, &report).unwrap();
        assert!(output.contains("Width"));
        assert!(output.contains("Height"));
        assert!(output.contains("12.50"));
    }

    #[test]
    fn test_json_format() {
        let plan = test_plan();
        let report = test_report(&plan);
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_plan("Alice", &plan, &report).unwrap();
        assert!(output.contains("\"strategy\": \"BVA\""));
        assert!(output.contains("\"total\": 9"));
        assert!(output.contains("\"width_points\""));
    }

    #[test]
    fn test_json_empty_tester_is_unknown() {
        let plan = test_plan();
        let report = test_report(&plan);
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_plan("", &plan, &report).unwrap();
        assert!(output.contains("\"tester\": \"Unknown\""));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.summary(9), "ℹ Total Cases: 9");
    }
}
