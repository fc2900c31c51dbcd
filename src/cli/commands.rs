use crate::batch;
use crate::config::{self, AppConfig};
use crate::error::{TrackerError, TrackerResult};
use crate::excel::{load_issues, load_issues_or_empty, write_issues};
use crate::export::export_csv;
use crate::reconcile::{reconcile, timestamp_now};
use crate::stats::collect;
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;

/// Execute the init command - create a header-only tracking workbook
pub fn init(path: Option<PathBuf>, force: bool) -> TrackerResult<()> {
    let path = path.unwrap_or_else(|| config::default_workbook_path(chrono::Local::now()));

    if path.exists() && !force {
        return Err(TrackerError::ExcelWrite(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    println!("{}", "📒 Issuetrack - New tracking workbook".bold().green());
    println!("   File: {}\n", path.display());

    write_issues(&path, &[])?;

    // Remember it as the default workbook for later commands
    let config = AppConfig {
        default_workbook: Some(path.clone()),
    };
    config::save_config(&config)?;

    println!("{}", "✅ Workbook created".bold().green());
    println!("   Set as default workbook\n");
    Ok(())
}

/// Execute the update command - reconcile a scraped batch into the workbook
pub fn update(
    batch_path: PathBuf,
    workbook: Option<PathBuf>,
    dry_run: bool,
    verbose: bool,
) -> TrackerResult<()> {
    let workbook = config::resolve_workbook(workbook)?;

    println!("{}", "📒 Issuetrack - Updating workbook".bold().green());
    println!("   Workbook: {}", workbook.display());
    println!("   Batch: {}\n", display_batch_source(&batch_path));

    if dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No changes will be written\n".yellow()
        );
    }

    let records = if batch_path.as_os_str() == "-" {
        let mut json = String::new();
        std::io::stdin().read_to_string(&mut json)?;
        batch::parse_batch(&json)?
    } else {
        batch::load_batch(&batch_path)?
    };

    if verbose {
        println!("{}", format!("📖 {} records in batch", records.len()).cyan());
    }

    let mut issues = load_issues_or_empty(&workbook)?;
    if verbose {
        println!(
            "{}",
            format!("📖 {} rows in workbook\n", issues.len()).cyan()
        );
    }

    let report = reconcile(&mut issues, &records, &timestamp_now());

    if verbose && !report.changes.is_empty() {
        println!("{}", "✏️  Field changes:".bold().cyan());
        for change in &report.changes {
            println!(
                "   {} of '{}': '{}' → '{}'",
                change.field.cyan(),
                change.title.bright_blue(),
                change.old.red(),
                change.new.green()
            );
        }
        println!();
    }

    if !dry_run {
        write_issues(&workbook, &issues)?;
    }

    println!("{}", "✅ Reconciliation complete:".bold().green());
    println!("   New:       {}", report.added.to_string().bold());
    println!("   Updated:   {}", report.updated.to_string().bold());
    println!("   Unchanged: {}", report.unchanged);
    if report.skipped > 0 {
        println!(
            "   {} {} record(s) skipped (empty title)",
            "⚠️".yellow(),
            report.skipped
        );
    }
    println!();

    if dry_run {
        println!("{}", "📋 Dry run complete - no changes written".yellow());
    }
    Ok(())
}

/// Execute the export command - workbook to CSV (UTF-8 with BOM)
pub fn export(workbook: Option<PathBuf>, output: Option<PathBuf>) -> TrackerResult<()> {
    let workbook = config::resolve_workbook(workbook)?;

    println!("{}", "📒 Issuetrack - Exporting to CSV".bold().green());
    println!("   Workbook: {}\n", workbook.display());

    let written = export_csv(&workbook, output.as_deref())?;

    println!("{}", "✅ Export complete".bold().green());
    println!("   CSV: {}\n", written.display());
    Ok(())
}

/// Execute the stats command - summary statistics of the workbook
pub fn stats(workbook: Option<PathBuf>) -> TrackerResult<()> {
    let workbook = config::resolve_workbook(workbook)?;

    println!("{}", "📒 Issuetrack - Workbook statistics".bold().green());
    println!("   Workbook: {}\n", workbook.display());

    let issues = load_issues(&workbook)?;
    let stats = collect(&issues);

    println!("   Total issues: {}", stats.total.to_string().bold());
    if let Some(ref ts) = stats.last_updated {
        println!("   Last updated: {}", ts.bright_yellow());
    }

    print_counts("By Status", &stats.by_status);
    print_counts("By Priority", &stats.by_priority);
    print_counts("By Type", &stats.by_type);
    println!();
    Ok(())
}

/// Execute the open command - open the workbook with the OS default app
pub fn open_workbook(workbook: Option<PathBuf>) -> TrackerResult<()> {
    let workbook = config::resolve_workbook(workbook)?;

    if !workbook.exists() {
        return Err(TrackerError::ExcelRead(format!(
            "Workbook not found: {}",
            workbook.display()
        )));
    }

    #[cfg(target_os = "windows")]
    let status = std::process::Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(&workbook)
        .status()?;

    #[cfg(target_os = "macos")]
    let status = std::process::Command::new("open").arg(&workbook).status()?;

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let status = std::process::Command::new("xdg-open")
        .arg(&workbook)
        .status()?;

    if !status.success() {
        return Err(TrackerError::ExcelRead(format!(
            "Failed to open {}",
            workbook.display()
        )));
    }

    println!("{} {}", "✅ Opened".bold().green(), workbook.display());
    Ok(())
}

fn display_batch_source(path: &std::path::Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn print_counts(label: &str, counts: &[(String, usize)]) {
    if counts.is_empty() {
        return;
    }
    println!("\n   {}:", label.bold().cyan());
    for (value, count) in counts {
        println!("      {:<20} {}", value.bright_blue(), count);
    }
}
