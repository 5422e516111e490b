//! Interactive session: one page, kept alive until the user quits.
//!
//! Added and deleted events live as long as the session does.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use eventboard_core::view::{
    ADD_LABEL, CATEGORY_PLACEHOLDER, DELETE_LABEL, EDIT_LABEL, EMPTY_MESSAGE, FORM_HEADING,
    SAVE_LABEL, SEARCH_PLACEHOLDER,
};
use eventboard_core::{Category, EventId, EventsPage};
use owo_colors::OwoColorize;

use super::Board;
use super::add::{DraftArgs, fill_draft};
use crate::render::Render;

#[derive(Clone, Copy)]
enum Action {
    Search,
    Filter,
    Add,
    Edit,
    Delete,
    Reload,
    Quit,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::Search,
        Action::Filter,
        Action::Add,
        Action::Edit,
        Action::Delete,
        Action::Reload,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::Search => SEARCH_PLACEHOLDER,
            Action::Filter => CATEGORY_PLACEHOLDER,
            Action::Add => ADD_LABEL,
            Action::Edit => EDIT_LABEL,
            Action::Delete => DELETE_LABEL,
            Action::Reload => "Opnieuw laden",
            Action::Quit => "Stoppen",
        }
    }
}

pub async fn run(board: &Board) -> Result<()> {
    let mut page = board.loaded_page().await;

    loop {
        show(&page);

        let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        let choice = Select::new().items(&labels).default(0).interact()?;

        match Action::ALL[choice] {
            Action::Search => {
                let query: String = Input::new()
                    .with_prompt(format!("  {SEARCH_PLACEHOLDER}"))
                    .default(page.filter().query.clone())
                    .show_default(false)
                    .allow_empty(true)
                    .interact_text()?;
                page.set_search(query);
            }
            Action::Filter => {
                let category = pick_category(page.filter().category)?;
                page.set_category(category);
            }
            Action::Add => add(board, &mut page).await?,
            Action::Edit => {
                if let Some(id) = pick_event(&page)? {
                    let route = page.edit_event(id);
                    let open_in_browser = Confirm::new()
                        .with_prompt("  Openen in de browser?")
                        .default(false)
                        .interact()?;
                    super::open::run(board, route, open_in_browser)?;
                }
            }
            Action::Delete => {
                if let Some(id) = pick_event(&page)? {
                    let notification = page.delete_event(id);
                    println!("{}", notification.render());
                }
            }
            Action::Reload => {
                board.load(&mut page).await;
            }
            Action::Quit => return Ok(()),
        }

        println!();
    }
}

fn show(page: &EventsPage) {
    println!("{}", page.view().render());

    let filter = page.filter().render();
    if !filter.is_empty() {
        println!("\n{}", filter);
    }
    println!();
}

async fn add(board: &Board, page: &mut EventsPage) -> Result<()> {
    page.open_form();
    println!("{}", FORM_HEADING.bold());
    fill_draft(page, &DraftArgs::default(), true)?;

    let save = Confirm::new()
        .with_prompt(format!("  {}?", SAVE_LABEL))
        .default(true)
        .interact()?;

    if !save {
        page.close_form();
        return Ok(());
    }

    let added = page.add_event();
    println!("{}", added.notification.render());

    if added.reload {
        board.load(page).await;
    }

    Ok(())
}

/// Choose a category for the filter; the first item clears it.
fn pick_category(current: Option<Category>) -> Result<Option<Category>> {
    let mut items = vec![CATEGORY_PLACEHOLDER.to_string()];
    items.extend(Category::ALL.iter().map(|c| c.label().to_string()));

    let default = current
        .and_then(|c| Category::ALL.iter().position(|x| *x == c))
        .map(|i| i + 1)
        .unwrap_or(0);

    let selection = Select::new().items(&items).default(default).interact()?;

    Ok(match selection {
        0 => None,
        i => Some(Category::ALL[i - 1]),
    })
}

/// Choose one of the listed events, or nothing when the list is empty.
fn pick_event(page: &EventsPage) -> Result<Option<EventId>> {
    let events = page.filtered();
    if events.is_empty() {
        println!("{}", EMPTY_MESSAGE.dimmed());
        return Ok(None);
    }

    let items: Vec<String> = events.iter().map(|e| format!("{} {}", e.id, e.title)).collect();
    let selection = Select::new().items(&items).default(0).interact_opt()?;

    Ok(selection.map(|i| events[i].id))
}
