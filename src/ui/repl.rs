use std::io::{BufRead, Write};

use tracing::error;

use crate::report::{self, DEFAULT_TOP_N};
use crate::resolver::ScoreTable;
use crate::ui::state::{DashboardState, Page};

/// Line-oriented interactive loop. Every accepted command triggers a full
/// re-render of the current page from the immutable table; rejected commands
/// report and leave the state untouched.
pub fn run(
    table: &ScoreTable,
    state: &mut DashboardState,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> std::io::Result<()> {
    let mut top_n = DEFAULT_TOP_N;

    writeln!(out, "gridfit interactive mode; 'help' lists commands")?;
    render(table, state, top_n, out)?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (trimmed, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => write_help(out)?,
            "teams" => {
                writeln!(out, "teams: {}", table.teams().join(", "))?;
            }
            "mates" => {
                writeln!(
                    out,
                    "teammates of {}: {}",
                    state.team(),
                    table.teammates_of(state.team()).join(", ")
                )?;
            }
            "team" => match state.select_team(table, rest) {
                Ok(()) => render(table, state, top_n, out)?,
                Err(e) => writeln!(out, "{e}")?,
            },
            "mate" => match state.select_teammate(table, rest) {
                Ok(()) => render(table, state, top_n, out)?,
                Err(e) => writeln!(out, "{e}")?,
            },
            "page" => match rest {
                "dashboard" => {
                    state.set_page(Page::Dashboard);
                    render(table, state, top_n, out)?;
                }
                "details" => {
                    state.set_page(Page::Details);
                    render(table, state, top_n, out)?;
                }
                other => writeln!(out, "unknown page: {other} (use dashboard|details)")?,
            },
            "top" => match rest.parse::<i64>() {
                Ok(n) if n >= 0 => {
                    top_n = n;
                    render(table, state, top_n, out)?;
                }
                _ => writeln!(out, "top takes a non-negative count, got '{rest}'")?,
            },
            "show" => render(table, state, top_n, out)?,
            other => writeln!(out, "unknown command: {other} (try 'help')")?,
        }
    }

    Ok(())
}

fn render(
    table: &ScoreTable,
    state: &DashboardState,
    top_n: i64,
    out: &mut impl Write,
) -> std::io::Result<()> {
    match state.page() {
        Page::Details => out.write_all(report::text::render_details().as_bytes()),
        Page::Dashboard => {
            // The state invariant guarantees the selection resolves; a miss
            // here is a bug, not a user error.
            let record = match state.selected(table) {
                Ok(record) => record,
                Err(e) => {
                    error!("selection no longer resolves: {e}");
                    return Ok(());
                }
            };
            match report::build_view(table, record, top_n) {
                Ok(view) => out.write_all(report::text::render_dashboard(&view).as_bytes()),
                Err(e) => {
                    error!("failed to build dashboard view: {e}");
                    Ok(())
                }
            }
        }
    }
}

fn write_help(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "commands:")?;
    writeln!(out, "  teams            list available teams")?;
    writeln!(out, "  mates            list teammates of the current team")?;
    writeln!(out, "  team <name>      select a team")?;
    writeln!(out, "  mate <name>      select a teammate")?;
    writeln!(out, "  page <name>      switch page (dashboard|details)")?;
    writeln!(out, "  top <n>          set the ranking depth")?;
    writeln!(out, "  show             re-render the current page")?;
    writeln!(out, "  quit             exit")?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/ui/repl.rs"]
mod tests;
