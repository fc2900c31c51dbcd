use clap::{Parser, Subcommand};
use issuetrack::cli;
use issuetrack::error::TrackerResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "issuetrack")]
#[command(about = "Reconcile scraped issue records into an Excel tracking workbook")]
#[command(long_about = "Issuetrack - Excel issue tracking for scraped batches

Maintains an .xlsx workbook of issue records keyed by Title. Scraped
batches (JSON arrays) are diffed against the sheet: new titles are
appended, changed fields updated in place, and every touched row gets a
fresh 'Last Updated' stamp.

COMMANDS:
  init     - Create a new tracking workbook
  update   - Reconcile a scraped batch into the workbook
  export   - Export the workbook to CSV (UTF-8 with BOM)
  stats    - Summary statistics (totals, by status/priority/type)
  open     - Open the workbook with the system default application

EXAMPLES:
  issuetrack init tracker.xlsx                # Create and set as default
  issuetrack update batch.json                # Reconcile into the default
  issuetrack update - -w tracker.xlsx < b.json
  issuetrack export -o report.csv
  issuetrack stats")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Create a new tracking workbook.

Writes a header-only sheet with the canonical columns:

  Title, Type, Priority, Status, Deadline, Due Date,
  Created By, Created On, Last Updated, Comments

Without PATH, a timestamped file (Issue_Tracker_YYYYmmdd_HHMMSS.xlsx) is
created in your Documents directory. The new workbook becomes the default
for later commands, so '-w' can be omitted.")]
    /// Create a new tracking workbook
    Init {
        /// Where to create the workbook (default: timestamped file in Documents)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    #[command(long_about = "Reconcile a scraped batch into the workbook.

BATCH is a JSON array of records keyed by the sheet headers, e.g.:

  [{\"Title\": \"VPN drops\", \"Status\": \"OPEN\", \"Priority\": \"High\"}]

Pass '-' to read the batch from stdin.

RECONCILIATION:
  Unseen titles are appended (Last Updated stamped).
  For known titles, Status, Priority, Type, Due Date, Deadline,
  Created By and Created On are compared as strings; differing values
  are overwritten and Last Updated restamped once per row.
  Comments in the sheet are never touched by a batch.

A missing workbook file is bootstrapped from the batch.
Use --dry-run to see the counts without writing.")]
    /// Reconcile a scraped batch (JSON) into the workbook
    Update {
        /// Batch file: JSON array of issue records ('-' for stdin)
        batch: PathBuf,

        /// Tracking workbook (default: the configured one)
        #[arg(short, long)]
        workbook: Option<PathBuf>,

        /// Report changes without writing the workbook
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// List every field change
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Export the workbook to CSV.

The CSV is written UTF-8 with a leading BOM so Excel re-opens it with the
right encoding. Without -o, the output lands next to the workbook with a
.csv extension.")]
    /// Export the workbook to CSV (UTF-8 with BOM)
    Export {
        /// Tracking workbook (default: the configured one)
        #[arg(short, long)]
        workbook: Option<PathBuf>,

        /// Output CSV path (default: workbook path with .csv extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    #[command(long_about = "Summary statistics of the workbook.

Shows the total row count, per-Status / per-Priority / per-Type counts
(descending, ties alphabetical) and the most recent Last Updated stamp.")]
    /// Summary statistics of the workbook
    Stats {
        /// Tracking workbook (default: the configured one)
        #[arg(short, long)]
        workbook: Option<PathBuf>,
    },

    #[command(long_about = "Open the workbook with the system default application.

Hands the file to the platform opener (start / open / xdg-open), so it
lands in whatever handles .xlsx - Excel, LibreOffice Calc, etc.")]
    /// Open the workbook with the system default application
    Open {
        /// Tracking workbook (default: the configured one)
        #[arg(short, long)]
        workbook: Option<PathBuf>,
    },
}

fn main() -> TrackerResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "issuetrack=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, force } => cli::init(path, force),

        Commands::Update {
            batch,
            workbook,
            dry_run,
            verbose,
        } => cli::update(batch, workbook, dry_run, verbose),

        Commands::Export { workbook, output } => cli::export(workbook, output),

        Commands::Stats { workbook } => cli::stats(workbook),

        Commands::Open { workbook } => cli::open_workbook(workbook),
    }
}
