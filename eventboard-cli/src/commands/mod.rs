pub mod add;
pub mod browse;
pub mod categories;
pub mod config;
pub mod delete;
pub mod list;
pub mod open;

use eventboard_core::{BoardConfig, EventSource, EventsPage, LoadOutcome, Source};

use crate::utils::tui::create_spinner;

/// Configuration plus the resolved events source, shared by every command.
pub struct Board {
    pub config: BoardConfig,
    pub source: Source,
}

impl Board {
    /// A fresh page configured from the board settings. Nothing is loaded yet.
    pub fn page(&self) -> EventsPage {
        EventsPage::new()
            .with_id_strategy(self.config.id_strategy)
            .with_refetch_after_add(self.config.refetch_after_add)
    }

    /// Read the events document into `page`. Failures are logged, not returned.
    pub async fn load(&self, page: &mut EventsPage) -> LoadOutcome {
        let spinner = create_spinner(format!("Evenementen laden van {}", self.source.describe()));
        let outcome = page.load(&self.source).await;
        spinner.finish_and_clear();
        outcome
    }

    /// A page with the initial read done.
    pub async fn loaded_page(&self) -> EventsPage {
        let mut page = self.page();
        self.load(&mut page).await;
        page
    }
}
