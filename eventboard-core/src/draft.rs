//! The add-event form.

use std::fmt;

use crate::category::{self, Category};
use crate::error::EventBoardResult;
use crate::event::{Event, EventId};

/// Unsaved input of the add-event form.
///
/// The category is a single selection; it becomes a one-element category
/// list when the draft is turned into an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftEvent {
    pub title: String,
    pub description: String,
    pub image: String,
    pub start_time: String,
    pub end_time: String,
    pub category: Option<Category>,
}

/// One input of the add-event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Image,
    StartTime,
    EndTime,
    Category,
}

impl DraftField {
    /// Form order.
    pub const ALL: [DraftField; 6] = [
        DraftField::Title,
        DraftField::Description,
        DraftField::Image,
        DraftField::StartTime,
        DraftField::EndTime,
        DraftField::Category,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Title => "Titel",
            DraftField::Description => "Beschrijving",
            DraftField::Image => "Afbeeldings-URL",
            DraftField::StartTime => "Starttijd",
            DraftField::EndTime => "Eindtijd",
            DraftField::Category => "Categorieën",
        }
    }

    /// Start and end use a `datetime-local` input (`YYYY-MM-DDTHH:MM`).
    pub fn is_datetime(self) -> bool {
        matches!(self, DraftField::StartTime | DraftField::EndTime)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl DraftEvent {
    /// Set a field from raw input text. Only the category can fail, when the
    /// text names no category; empty text clears the selection.
    pub fn set(&mut self, field: DraftField, value: &str) -> EventBoardResult<()> {
        match field {
            DraftField::Title => self.title = value.to_string(),
            DraftField::Description => self.description = value.to_string(),
            DraftField::Image => self.image = value.to_string(),
            DraftField::StartTime => self.start_time = value.to_string(),
            DraftField::EndTime => self.end_time = value.to_string(),
            DraftField::Category => self.category = category::parse_selection(value)?,
        }
        Ok(())
    }

    pub fn get(&self, field: DraftField) -> String {
        match field {
            DraftField::Title => self.title.clone(),
            DraftField::Description => self.description.clone(),
            DraftField::Image => self.image.clone(),
            DraftField::StartTime => self.start_time.clone(),
            DraftField::EndTime => self.end_time.clone(),
            DraftField::Category => self
                .category
                .map(|c| c.code().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            image: Some(self.image).filter(|s| !s.trim().is_empty()),
            start_time: self.start_time,
            end_time: self.end_time,
            categories: self.category.map(|c| vec![c.code()]).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_every_field() {
        let mut draft = DraftEvent::default();
        draft.set(DraftField::Title, "Taco's").unwrap();
        draft.set(DraftField::Description, "Zelf tortilla's bakken").unwrap();
        draft.set(DraftField::Image, "https://example.com/taco.jpg").unwrap();
        draft.set(DraftField::StartTime, "2026-05-01T18:00").unwrap();
        draft.set(DraftField::EndTime, "2026-05-01T20:00").unwrap();
        draft.set(DraftField::Category, "2").unwrap();

        assert_eq!(draft.get(DraftField::Title), "Taco's");
        assert_eq!(draft.get(DraftField::StartTime), "2026-05-01T18:00");
        assert_eq!(draft.category, Some(Category::Mexican));
        assert_eq!(draft.get(DraftField::Category), "2");
    }

    #[test]
    fn unknown_category_leaves_draft_unchanged() {
        let mut draft = DraftEvent {
            category: Some(Category::Greek),
            ..Default::default()
        };
        assert!(draft.set(DraftField::Category, "7").is_err());
        assert_eq!(draft.category, Some(Category::Greek));

        draft.set(DraftField::Category, "").unwrap();
        assert_eq!(draft.category, None);
    }

    #[test]
    fn into_event_uses_category_list() {
        let draft = DraftEvent {
            title: "Sushi".into(),
            category: Some(Category::Japanese),
            ..Default::default()
        };
        let event = draft.into_event(4);
        assert_eq!(event.id, 4);
        assert_eq!(event.categories, vec![4]);
        assert!(event.has_category(Category::Japanese));
        assert_eq!(event.image, None);
    }

    #[test]
    fn empty_draft_is_accepted() {
        let event = DraftEvent::default().into_event(1);
        assert_eq!(event.title, "");
        assert!(event.categories.is_empty());
    }
}
