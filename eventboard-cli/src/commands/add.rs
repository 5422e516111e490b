use anyhow::Result;
use dialoguer::{Input, Select};
use eventboard_core::view::{CANCEL_LABEL, FORM_HEADING, SAVE_LABEL};
use eventboard_core::{Category, DraftField, EventsPage};
use owo_colors::OwoColorize;

use super::Board;
use crate::render::Render;
use crate::utils::tui::is_interactive;

/// Values given on the command line; missing ones are prompted for.
#[derive(Default)]
pub struct DraftArgs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub category: Option<Category>,
}

impl DraftArgs {
    fn is_complete(&self) -> bool {
        self.title.is_some()
            && self.description.is_some()
            && self.image.is_some()
            && self.start.is_some()
            && self.end.is_some()
            && self.category.is_some()
    }

    fn get(&self, field: DraftField) -> Option<String> {
        match field {
            DraftField::Title => self.title.clone(),
            DraftField::Description => self.description.clone(),
            DraftField::Image => self.image.clone(),
            DraftField::StartTime => self.start.clone(),
            DraftField::EndTime => self.end.clone(),
            DraftField::Category => self.category.map(|c| c.code().to_string()),
        }
    }
}

pub async fn run(board: &Board, args: DraftArgs) -> Result<()> {
    let mut page = board.loaded_page().await;
    let interactive = !args.is_complete() && is_interactive();

    page.open_form();
    if interactive {
        println!("{}", FORM_HEADING.bold());
    }
    fill_draft(&mut page, &args, interactive)?;

    if interactive && !confirm_save()? {
        page.close_form();
        return Ok(());
    }

    let added = page.add_event();
    println!("{}\n", added.notification.render());

    if added.reload {
        board.load(&mut page).await;
    }
    println!("{}", page.view().render());

    Ok(())
}

/// Fill every draft field, from `args` where given, otherwise by prompting
/// (or leaving it empty when not interactive).
pub fn fill_draft(page: &mut EventsPage, args: &DraftArgs, interactive: bool) -> Result<()> {
    for field in DraftField::ALL {
        let value = match args.get(field) {
            Some(value) => value,
            None if interactive => prompt_field(field, &page.draft().get(field))?,
            None => continue,
        };
        page.set_draft_field(field, &value)?;
    }
    Ok(())
}

/// Ask for one field. Nothing is required; an empty answer is kept.
fn prompt_field(field: DraftField, current: &str) -> Result<String> {
    if field == DraftField::Category {
        return prompt_category();
    }

    let prompt = if field.is_datetime() {
        format!("  {} (YYYY-MM-DDTHH:MM)", field.label())
    } else {
        format!("  {}", field.label())
    };

    let value: String = Input::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .show_default(!current.is_empty())
        .allow_empty(true)
        .interact_text()?;

    Ok(value)
}

/// Returns the select value: a category code, or `""` for none.
fn prompt_category() -> Result<String> {
    let mut items = vec!["(geen)".to_string()];
    items.extend(Category::ALL.iter().map(|c| c.label().to_string()));

    let selection = Select::new()
        .with_prompt(format!("  {}", DraftField::Category.label()))
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => String::new(),
        i => Category::ALL[i - 1].code().to_string(),
    })
}

fn confirm_save() -> Result<bool> {
    let selection = Select::new()
        .items(&[SAVE_LABEL, CANCEL_LABEL])
        .default(0)
        .interact()?;
    Ok(selection == 0)
}
