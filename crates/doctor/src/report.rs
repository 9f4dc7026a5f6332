//! The accumulated diagnostic report.

/// Three-way outcome of one named check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    /// Degraded but usable; carries a suggested remediation.
    Warn,
    /// Hard failure; drives a non-zero exit code.
    Fail,
}

/// One named check with its outcome and free-text remediation advice.
#[derive(Debug, Clone)]
pub struct Check {
    pub name: String,
    pub status: CheckStatus,
    pub detail: String,
    pub remedy: Option<String>,
}

/// In-memory tally of all checks from one validation run.
#[derive(Debug, Default)]
pub struct Report {
    pub checks: Vec<Check>,
}

impl Report {
    pub fn pass(&mut self, name: &str, detail: impl Into<String>) {
        self.push(name, CheckStatus::Pass, detail, None);
    }

    pub fn warn(&mut self, name: &str, detail: impl Into<String>, remedy: impl Into<String>) {
        self.push(name, CheckStatus::Warn, detail, Some(remedy.into()));
    }

    pub fn fail(&mut self, name: &str, detail: impl Into<String>, remedy: impl Into<String>) {
        self.push(name, CheckStatus::Fail, detail, Some(remedy.into()));
    }

    fn push(
        &mut self,
        name: &str,
        status: CheckStatus,
        detail: impl Into<String>,
        remedy: Option<String>,
    ) {
        self.checks.push(Check {
            name: name.to_string(),
            status,
            detail: detail.into(),
            remedy,
        });
    }

    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warn)
    }

    pub fn failures(&self) -> usize {
        self.count(CheckStatus::Fail)
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }

    /// True when the exit code should be zero: warnings are tolerated,
    /// failures are not.
    pub fn is_healthy(&self) -> bool {
        self.failures() == 0
    }

    /// Remediation lines for every non-passing check, failures first.
    pub fn remediation_checklist(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for status in [CheckStatus::Fail, CheckStatus::Warn] {
            for check in self.checks.iter().filter(|c| c.status == status) {
                if let Some(remedy) = &check.remedy {
                    lines.push(format!("{}: {}", check.name, remedy));
                }
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_is_a_pure_function_of_failures() {
        let mut report = Report::default();
        report.pass("sdk", "found");
        report.warn("avds", "none registered", "create one");
        assert!(report.is_healthy());
        assert_eq!(report.warnings(), 1);

        report.fail("adb", "not found", "install platform-tools");
        assert!(!report.is_healthy());
        assert_eq!(report.failures(), 1);
    }

    #[test]
    fn checklist_orders_failures_before_warnings() {
        let mut report = Report::default();
        report.warn("avds", "none", "run avdmanager");
        report.fail("adb", "missing", "install platform-tools");
        let lines = report.remediation_checklist();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("adb:"));
        assert!(lines[1].starts_with("avds:"));
    }
}
