use anyhow::Result;
use eventboard_core::{BoardConfig, EventSource};
use owo_colors::OwoColorize;

use super::Board;

pub fn run(board: &Board) -> Result<()> {
    let config_path = BoardConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Events:  {}", board.source.describe());
    println!();
    println!("{}", "Effective configuration".bold());
    for line in board.config.to_toml()?.lines() {
        println!("  {}", line.dimmed());
    }

    Ok(())
}
