use anyhow::Result;

use crate::engine::model::ScaffoldReport;
use crate::ui::cli::Cli;
use crate::ui::tree_view::build_tree_view;

#[cfg(feature = "colors")]
use colored::Colorize;

/// Handles all final output generation based on CLI arguments.
pub struct OutputHandler<'a> {
    report: &'a ScaffoldReport,
    args: &'a Cli,
}

impl<'a> OutputHandler<'a> {
    pub fn new(report: &'a ScaffoldReport, args: &'a Cli) -> Self {
        Self { report, args }
    }

    pub fn handle(&self) -> Result<()> {
        if self.args.json {
            return self.handle_json_output();
        }

        print_summary(self.report);
        if self.args.tree {
            println!("\n{}", build_tree_view(self.report).trim_end());
        }
        Ok(())
    }

    fn handle_json_output(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(self.report)?);
        Ok(())
    }
}

pub fn summary_lines(report: &ScaffoldReport) -> Vec<String> {
    let verb = if report.dry_run {
        "Would create"
    } else {
        "Created"
    };
    vec![
        format!("{verb}: {}", report.destination.display()),
        format!("Directories: {}", report.directories),
        format!("Files: {}", report.files),
        format!("Placeholder replacements: {}", report.replacements),
    ]
}

pub fn print_summary(report: &ScaffoldReport) {
    let line = "=".repeat(40);
    let body = summary_lines(report).join("\n");

    #[cfg(feature = "colors")]
    let body = if report.dry_run {
        body.yellow().to_string()
    } else {
        body.green().to_string()
    };

    println!("{line}\n{body}\n{line}");
}
