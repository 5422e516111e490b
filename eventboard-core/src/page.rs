//! The events page state container.
//!
//! `EventsPage` owns everything the page shows: the event collection, the
//! add-event draft, the search/filter selection and whether the add form is
//! open. Every action is a single transition on this state. Only `load`
//! suspends, and it borrows the page mutably for the whole read.

use tracing::{debug, error};

use crate::category::Category;
use crate::config::IdStrategy;
use crate::draft::{DraftEvent, DraftField};
use crate::error::EventBoardResult;
use crate::event::{Event, EventId};
use crate::filter::EventFilter;
use crate::notification::Notification;
use crate::route::Route;
use crate::source::EventSource;
use crate::view::PageView;

/// Result of reading the events document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The collection was replaced by this many events.
    Loaded(usize),
    /// The read failed and was logged; the collection is unchanged.
    Failed,
}

/// What the caller should do after an event was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    pub id: EventId,
    pub notification: Notification,
    /// Re-read the events document. Whatever it returns replaces the
    /// collection, including the event just added.
    pub reload: bool,
}

#[derive(Debug, Clone)]
pub struct EventsPage {
    events: Vec<Event>,
    draft: DraftEvent,
    filter: EventFilter,
    form_open: bool,
    id_strategy: IdStrategy,
    refetch_after_add: bool,
}

impl Default for EventsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl EventsPage {
    pub fn new() -> Self {
        EventsPage {
            events: Vec::new(),
            draft: DraftEvent::default(),
            filter: EventFilter::default(),
            form_open: false,
            id_strategy: IdStrategy::default(),
            refetch_after_add: true,
        }
    }

    pub fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    pub fn with_refetch_after_add(mut self, refetch: bool) -> Self {
        self.refetch_after_add = refetch;
        self
    }

    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    // --- Loading ---

    /// Read the whole collection from `source`.
    ///
    /// On success the collection is replaced. On failure the error goes to
    /// the diagnostic log and nothing else changes.
    pub async fn load<S: EventSource>(&mut self, source: &S) -> LoadOutcome {
        match source.fetch_events().await {
            Ok(events) => {
                debug!(source = %source.describe(), count = events.len(), "events loaded");
                self.events = events;
                LoadOutcome::Loaded(self.events.len())
            }
            Err(e) => {
                error!(
                    source = %source.describe(),
                    error = %e,
                    "Fout bij het ophalen van evenementen"
                );
                LoadOutcome::Failed
            }
        }
    }

    // --- Search and filter ---

    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.filter.category = category;
    }

    /// Set the category from a select value; `""` clears it.
    pub fn select_category(&mut self, value: &str) -> EventBoardResult<()> {
        self.filter.category = crate::category::parse_selection(value)?;
        Ok(())
    }

    pub fn filtered(&self) -> Vec<&Event> {
        self.filter.apply(&self.events)
    }

    pub fn view(&self) -> PageView {
        PageView::build(&self.filtered())
    }

    // --- Add-event form ---

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    /// Close the form. The draft is kept until an event is added.
    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    pub fn draft(&self) -> &DraftEvent {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftEvent {
        &mut self.draft
    }

    pub fn set_draft_field(&mut self, field: DraftField, value: &str) -> EventBoardResult<()> {
        self.draft.set(field, value)
    }

    fn next_id(&self) -> EventId {
        let by_length = self.events.len() as EventId + 1;
        match self.id_strategy {
            IdStrategy::Length => by_length,
            // Ids come from the document; `u64::MAX` leaves no successor.
            IdStrategy::Monotonic => self
                .events
                .iter()
                .map(|e| e.id)
                .max()
                .unwrap_or(0)
                .checked_add(1)
                .unwrap_or(by_length),
        }
    }

    /// Append the draft as a new event, reset the draft and close the form.
    ///
    /// No field is validated.
    pub fn add_event(&mut self) -> Added {
        let id = self.next_id();
        let draft = std::mem::take(&mut self.draft);
        self.events.push(draft.into_event(id));
        self.form_open = false;
        debug!(id, "event added");

        Added {
            id,
            notification: Notification::event_added(),
            reload: self.refetch_after_add,
        }
    }

    // --- Edit / delete ---

    /// Editing happens elsewhere: this only names where to go.
    pub fn edit_event(&self, id: EventId) -> Route {
        Route::EditEvent(id)
    }

    pub fn view_event(&self, id: EventId) -> Route {
        Route::Event(id)
    }

    /// Remove every event with this id. Unknown ids are not an error.
    pub fn delete_event(&mut self, id: EventId) -> Notification {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        debug!(id, removed = before - self.events.len(), "event deleted");
        Notification::event_deleted()
    }
}
