use anyhow::Result;
use eventboard_core::Category;

use super::Board;
use crate::render::Render;

pub async fn run(board: &Board, search: Option<String>, category: Option<Category>) -> Result<()> {
    let mut page = board.loaded_page().await;

    page.set_search(search.unwrap_or_default());
    page.set_category(category);

    let filter = page.filter().render();
    if !filter.is_empty() {
        println!("{}\n", filter);
    }
    println!("{}", page.view().render());

    Ok(())
}
