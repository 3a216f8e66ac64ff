//! Execute-log rendering.
//!
//! The log layout is a fixed contract: header block, fixed-width case table,
//! footer with the finish time and total count. The saved file contains this
//! text byte for byte, so rendering never depends on terminal state.

use chrono::{DateTime, TimeZone};
use trigen_domain::TestPlan;

/// Width of the ID column.
const ID_WIDTH: usize = 6;
/// Width of the W and H columns.
const DIM_WIDTH: usize = 10;
/// Width of the Area column.
const AREA_WIDTH: usize = 15;
/// Length of the horizontal rule lines.
const RULE_WIDTH: usize = 50;

/// A rendered execute log, held for display and export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The full log text, exactly as exported
    pub text: String,
    /// Number of test cases in the log
    pub total: usize,
}

impl Report {
    /// Render a plan into an execute log.
    ///
    /// An empty tester name renders as the literal "Unknown". The start
    /// timestamp appears as date and time in the header; the finish
    /// timestamp appears as time only in the footer. Both are passed in so
    /// rendering itself is deterministic.
    pub fn render<Tz: TimeZone>(
        tester: &str,
        plan: &TestPlan,
        started: DateTime<Tz>,
        finished: DateTime<Tz>,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let tester = if tester.is_empty() { "Unknown" } else { tester };
        let rule = "-".repeat(RULE_WIDTH);

        let mut text = String::new();
        text.push_str(&format!("Tester Name : {}\n", tester));
        text.push_str(&format!(
            "DateTime Generate : {} {}\n",
            started.format("%d/%m/%Y"),
            started.format("%H:%M:%S")
        ));
        text.push_str(&format!("Mode : {}\n", plan.strategy));
        text.push_str(&rule);
        text.push('\n');
        text.push_str("Loop :\n");
        text.push_str(&format!(
            "{:<id$} {:<dim$} {:<dim$} {:<area$}\n",
            "ID",
            "W",
            "H",
            "Area",
            id = ID_WIDTH,
            dim = DIM_WIDTH,
            area = AREA_WIDTH,
        ));

        for case in &plan.cases {
            text.push_str(&format!(
                "{:<id$} {:<dim$} {:<dim$} {:<area$}\n",
                case.id,
                case.width,
                case.height,
                format!("{:.2}", case.area()),
                id = ID_WIDTH,
                dim = DIM_WIDTH,
                area = AREA_WIDTH,
            ));
        }

        text.push_str(&rule);
        text.push('\n');
        text.push_str(&format!("DateTime finish : {}\n", finished.format("%H:%M:%S")));
        text.push_str(&format!("Total number of test case :> {}", plan.total()));

        Self {
            text,
            total: plan.total(),
        }
    }
}
