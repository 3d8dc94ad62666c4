mod input;
mod logging;
mod model;
mod report;
mod resolver;
mod ui;

use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::warn;

use crate::input::load_table;
use crate::report::{DEFAULT_TOP_N, build_view, write_reports};
use crate::ui::repl;
use crate::ui::state::{DashboardState, Page};

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "gridfit",
    version,
    about = "Dashboard for precomputed team/teammate fit scores"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a score CSV and render the dashboard.
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Path to the score CSV.
    #[arg(long)]
    input: PathBuf,
    /// Write dashboard.txt, details.txt and summary.json into this
    /// directory instead of rendering to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Team to select; defaults to the first team in the table.
    #[arg(long)]
    team: Option<String>,
    /// Teammate to select; defaults to the team's first teammate.
    #[arg(long)]
    mate: Option<String>,
    /// Ranking depth for the top-combos section.
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: i64,
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
    #[arg(long, value_enum, default_value_t = PageArg::Dashboard)]
    page: PageArg,
    /// Read selection commands from stdin instead of rendering once.
    #[arg(long)]
    interactive: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum FormatArg {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PageArg {
    Dashboard,
    Details,
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;

    let table = load_table(&args.input).map_err(|e| e.to_string())?;
    let mut state = DashboardState::new(&table).ok_or("score table is empty")?;

    if let Some(team) = &args.team {
        state.select_team(&table, team).map_err(|e| e.to_string())?;
    }
    if let Some(mate) = &args.mate {
        state
            .select_teammate(&table, mate)
            .map_err(|e| e.to_string())?;
    }
    state.set_page(match args.page {
        PageArg::Dashboard => Page::Dashboard,
        PageArg::Details => Page::Details,
    });

    if args.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        repl::run(&table, &mut state, stdin.lock(), &mut stdout).map_err(|e| e.to_string())?;
        return Ok(());
    }

    let top = if args.top < 0 {
        warn!("--top {} is negative; using 0", args.top);
        0
    } else {
        args.top
    };

    let record = state.selected(&table).map_err(|e| e.to_string())?;
    let view = build_view(&table, record, top).map_err(|e| e.to_string())?;

    if let Some(out_dir) = &args.out {
        write_reports(&view, out_dir).map_err(|e| e.to_string())?;
        return Ok(());
    }

    match args.format {
        FormatArg::Json => {
            let json = report::json::render_summary_json(&view).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        FormatArg::Text => match state.page() {
            Page::Dashboard => print!("{}", report::text::render_dashboard(&view)),
            Page::Details => print!("{}", report::text::render_details()),
        },
    }

    Ok(())
}
