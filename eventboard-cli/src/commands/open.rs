use anyhow::{Context, Result};
use eventboard_core::Route;
use owo_colors::OwoColorize;

use super::Board;

/// Navigate to a route outside this page: print it, and open it in the
/// browser when asked.
pub fn run(board: &Board, route: Route, open_in_browser: bool) -> Result<()> {
    let url = route.url(&board.config.base_url()?)?;

    println!("{} {}", "→".cyan(), route);
    println!("  {}", url.as_str().dimmed());

    if open_in_browser {
        open::that(url.as_str()).with_context(|| format!("Could not open {}", url))?;
    }

    Ok(())
}
