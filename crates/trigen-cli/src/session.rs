//! Form session state.
//!
//! The interactive shell owns one `Session`: the current form fields plus
//! the last generated report. Every generation recomputes the plan and
//! report wholesale; nothing carries over between generations except the
//! report kept for display and export.

use crate::report::Report;
use chrono::Local;
use std::fs;
use std::path::Path;
use tracing::debug;
use trigen_domain::{Range, Strategy, TestPlan};

/// The form fields and last result of an interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Tester name, free text (empty renders as "Unknown")
    pub tester: String,
    /// Width range
    pub width: Range,
    /// Height range
    pub height: Range,
    /// Selected strategy
    pub strategy: Strategy,
    /// Last generated report, if any
    pub last_report: Option<Report>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            tester: String::new(),
            width: Range::new(1, 10),
            height: Range::new(1, 10),
            strategy: Strategy::BoundaryValueAnalysis,
            last_report: None,
        }
    }
}

impl Session {
    /// Generate a plan from the current form fields and keep its report.
    ///
    /// Returns the plan and report so the caller can render them in any
    /// display format; the report is also retained for a later save.
    pub fn generate(&mut self) -> (TestPlan, Report) {
        let started = Local::now();
        let plan = TestPlan::generate(self.width, self.height, self.strategy);
        let finished = Local::now();

        debug!(
            strategy = %self.strategy,
            total = plan.total(),
            "generated test plan"
        );

        let report = Report::render(&self.tester, &plan, started, finished);
        self.last_report = Some(report.clone());
        (plan, report)
    }

    /// Export the last report to a file.
    ///
    /// Returns `Ok(false)` without touching the filesystem when nothing has
    /// been generated yet: the save action is a guard, not an error.
    pub fn save_last(&self, path: &Path) -> crate::error::Result<bool> {
        match &self.last_report {
            None => Ok(false),
            Some(report) => {
                fs::write(path, &report.text)?;
                Ok(true)
            }
        }
    }

    /// One-line description of the current form fields.
    pub fn describe(&self) -> String {
        format!(
            "tester={} width=[{}, {}] height=[{}, {}] strategy={}",
            if self.tester.is_empty() {
                "Unknown"
            } else {
                &self.tester
            },
            self.width.min,
            self.width.max,
            self.height.min,
            self.height.max,
            self.strategy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_before_generate_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ExecuteLog.txt");

        let session = Session::default();
        let saved = session.save_last(&path).unwrap();
        assert!(!saved);
        assert!(!path.exists());
    }

    #[test]
    fn test_save_after_generate_exports_report_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ExecuteLog.txt");

        let mut session = Session {
            tester: "Alice".to_string(),
            ..Session::default()
        };
        session.generate();

        let saved = session.save_last(&path).unwrap();
        assert!(saved);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, session.last_report.as_ref().unwrap().text);
        assert!(written.starts_with("Tester Name : Alice\n"));
    }

    #[test]
    fn test_generate_returns_the_stored_report() {
        let mut session = Session::default();
        let (plan, report) = session.generate();
        assert_eq!(Some(&report), session.last_report.as_ref());
        assert_eq!(plan.total(), report.total);
    }

    #[test]
    fn test_generate_replaces_last_report() {
        let mut session = Session::default();
        session.generate();
        assert_eq!(session.last_report.as_ref().unwrap().total, 9);

        session.strategy = Strategy::WorstCase;
        session.generate();
        assert_eq!(session.last_report.as_ref().unwrap().total, 25);
    }

    #[test]
    fn test_describe_defaults() {
        let session = Session::default();
        assert_eq!(
            session.describe(),
            "tester=Unknown width=[1, 10] height=[1, 10] strategy=BVA"
        );
    }
}
