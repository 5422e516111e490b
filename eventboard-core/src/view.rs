//! What the page shows, derived from its state on every render.

use crate::category::Category;
use crate::event::{Event, EventId};
use crate::route::Route;

pub const HEADING: &str = "Onze Evenementen";
pub const EMPTY_MESSAGE: &str = "Geen evenementen gevonden...";
pub const SEARCH_PLACEHOLDER: &str = "Zoek evenementen";
pub const CATEGORY_PLACEHOLDER: &str = "Filter op categorie";
pub const ADD_LABEL: &str = "Add Event";
pub const EDIT_LABEL: &str = "Bewerken";
pub const DELETE_LABEL: &str = "Verwijderen";
pub const FORM_HEADING: &str = "Nieuw Evenement Toevoegen";
pub const SAVE_LABEL: &str = "Opslaan";
pub const CANCEL_LABEL: &str = "Annuleren";

/// One list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub id: EventId,
    pub title: String,
    /// Where the title links to.
    pub link: Route,
    pub description: String,
    pub image: Option<String>,
    pub start: String,
    pub end: String,
    pub categories: Vec<Category>,
    pub edit: Route,
}

impl From<&Event> for EventCard {
    fn from(event: &Event) -> Self {
        EventCard {
            id: event.id,
            title: event.title.clone(),
            link: Route::Event(event.id),
            description: event.description.clone(),
            image: event.image.clone(),
            start: event.display_start(),
            end: event.display_end(),
            categories: event.known_categories(),
            edit: Route::EditEvent(event.id),
        }
    }
}

/// The rendered list: one card per filtered event, or the empty message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub heading: &'static str,
    pub cards: Vec<EventCard>,
    pub empty_message: Option<&'static str>,
}

impl PageView {
    pub fn build(events: &[&Event]) -> Self {
        let cards: Vec<EventCard> = events.iter().map(|e| EventCard::from(*e)).collect();
        let empty_message = cards.is_empty().then_some(EMPTY_MESSAGE);

        PageView {
            heading: HEADING,
            cards,
            empty_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_carries_routes_and_formatted_times() {
        let event = Event {
            id: 5,
            title: "Souvlaki".into(),
            description: "Grillen".into(),
            image: Some("https://example.com/s.jpg".into()),
            start_time: "2026-07-01T19:30".into(),
            end_time: "garbage".into(),
            categories: vec![5, 42],
        };

        let card = EventCard::from(&event);
        assert_eq!(card.link.path(), "/event/5");
        assert_eq!(card.edit.path(), "/event/edit/5");
        assert_eq!(card.start, "1-7-2026, 19:30:00");
        assert_eq!(card.end, "Invalid Date");
        assert_eq!(card.categories, vec![Category::Greek]);
    }

    #[test]
    fn empty_list_shows_message() {
        let view = PageView::build(&[]);
        assert_eq!(view.heading, HEADING);
        assert_eq!(view.empty_message, Some(EMPTY_MESSAGE));
    }
}
