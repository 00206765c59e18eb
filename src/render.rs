//! Rendering of facts, reports, and bootstrap summaries.
//!
//! Everything here consumes the structured records read-only and writes them
//! as JSON or plain text to a caller-chosen destination (stdout or a file).

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::fs::File;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use crate::inspect::Facts;
use crate::validate::{Report, Severity};
use crate::vendor::VendorInfo;

/// Output format selector shared by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Serialize)]
struct BootstrapOutput<'a> {
    project_info: &'a Facts,
    vendor: &'a VendorInfo,
}

/// Write inspection facts in the requested format.
pub fn write_facts(w: &mut dyn Write, format: OutputFormat, facts: &Facts) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(w, facts),
        OutputFormat::Text => write_facts_text(w, facts),
    }
}

/// Write a validation report in the requested format.
pub fn write_report(w: &mut dyn Write, format: OutputFormat, report: &Report) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(w, report),
        OutputFormat::Text => write_report_text(w, report),
    }
}

/// Write a bootstrap summary (facts plus vendoring outcome).
pub fn write_bootstrap(
    w: &mut dyn Write,
    format: OutputFormat,
    facts: &Facts,
    vendor: &VendorInfo,
) -> Result<()> {
    let output = BootstrapOutput {
        project_info: facts,
        vendor,
    };
    match format {
        OutputFormat::Json => write_json(w, &output),
        OutputFormat::Text => {
            write_facts_text(w, facts)?;
            writeln!(w, "Vendor:        {}", vendor.status)
                .context("write bootstrap output")?;
            Ok(())
        }
    }
}

fn write_json<T: Serialize>(w: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, value).context("encode json")?;
    writeln!(w).context("write json output")?;
    Ok(())
}

fn write_facts_text(w: &mut dyn Write, facts: &Facts) -> Result<()> {
    writeln!(
        w,
        "Project Info\n\
         Dir:           {}\n\
         ModulePath:    {}\n\
         ImportPath:    {}\n\
         Name:          {}\n\
         GoVersion:     {}\n\
         HasVendor:     {}\n\
         HasGearDir:    {}\n\
         HasGearRules:  {}\n\
         HasGearSpec:   {}",
        facts.dir,
        facts.module_path,
        facts.import_path,
        facts.name,
        facts.go_version,
        facts.has_vendor,
        facts.has_gear_dir,
        facts.has_gear_rules,
        facts.has_gear_spec,
    )
    .context("write inspect output")
}

fn write_report_text(w: &mut dyn Write, report: &Report) -> Result<()> {
    writeln!(
        w,
        "Validate ({})\nVerdict: {}\nModulePath: {}\nName: {}\nIssues: {}",
        report.stage,
        colorize_severity(report.verdict),
        report.module_path,
        report.name,
        report.issues.len(),
    )
    .context("write validate output")?;

    for issue in &report.issues {
        writeln!(
            w,
            "- {} {} {} ({})",
            colorize_severity(issue.severity),
            issue.code,
            issue.message,
            issue.path,
        )
        .context("write validate output")?;
    }

    Ok(())
}

fn colorize_severity(severity: Severity) -> String {
    match severity {
        Severity::Ok => severity.to_string().green().to_string(),
        Severity::Warn => severity.to_string().yellow().to_string(),
        Severity::Error => severity.to_string().red().to_string(),
    }
}

/// Run `write_fn` against the chosen destination.
///
/// With no output path the destination is stdout. With one, the file is
/// created (refusing directories) and a note saying whether it was created
/// or overwritten goes to stderr, so scripted callers can tell.
pub fn with_output_writer<F>(output: Option<&Path>, write_fn: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let path = match output {
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            return write_fn(&mut handle);
        }
        Some(path) => path,
    };

    let existed = match std::fs::metadata(path) {
        Ok(meta) => {
            if meta.is_dir() {
                bail!("cannot write output to directory {}", path.display());
            }
            true
        }
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(e) => return Err(e).with_context(|| format!("stat {}", path.display())),
    };

    // `colored` keys its tty detection on the process's stdout, not the
    // writer in hand; a file destination never gets escape sequences.
    colored::control::set_override(false);

    let mut file =
        File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_fn(&mut file)?;
    file.flush()
        .with_context(|| format!("flush {}", path.display()))?;

    if existed {
        eprintln!("file was overwritten");
    } else {
        eprintln!("file was created");
    }

    Ok(())
}
