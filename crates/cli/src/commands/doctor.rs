use anyhow::Result;
use console::style;

use skillbridge_doctor::{validate, Check, CheckStatus, DoctorEnv, Report};
use skillbridge_exec::SystemRunner;

fn status_tag(check: &Check) -> String {
    match check.status {
        CheckStatus::Pass => style(" ok ").green().to_string(),
        CheckStatus::Warn => style("warn").yellow().to_string(),
        CheckStatus::Fail => style("fail").red().bold().to_string(),
    }
}

fn render(report: &Report) {
    println!("== skillbridge doctor ==");
    for check in &report.checks {
        println!("[{}] {:<12} {}", status_tag(check), check.name, check.detail);
        if check.status == CheckStatus::Warn {
            if let Some(remedy) = &check.remedy {
                println!("       hint: {remedy}");
            }
        }
    }
    println!(
        "\n{} checks, {} warnings, {} errors",
        report.checks.len(),
        report.warnings(),
        report.failures()
    );
    if !report.is_healthy() {
        println!("\nTo fix:");
        for line in report.remediation_checklist() {
            println!("  - {line}");
        }
    }
}

/// Handle the `doctor` command. Exits non-zero when any check hard-fails.
pub(crate) fn handle_doctor_command() -> Result<()> {
    let env = DoctorEnv::from_process()?;
    let report = validate(&SystemRunner, &env);
    render(&report);
    if !report.is_healthy() {
        std::process::exit(1);
    }
    Ok(())
}
