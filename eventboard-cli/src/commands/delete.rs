use anyhow::Result;
use eventboard_core::EventId;

use super::Board;
use crate::render::Render;

/// Delete happens in memory only; the next read brings the event back.
pub async fn run(board: &Board, id: EventId) -> Result<()> {
    let mut page = board.loaded_page().await;

    let notification = page.delete_event(id);

    println!("{}\n", notification.render());
    println!("{}", page.view().render());

    Ok(())
}
