//! Search and category filtering of the event list.

use crate::category::Category;
use crate::event::Event;

/// The search text and category selection of the page.
///
/// An empty query and no selected category both pass every event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub query: String,
    pub category: Option<Category>,
}

impl EventFilter {
    pub fn new(query: impl Into<String>, category: Option<Category>) -> Self {
        EventFilter {
            query: query.into(),
            category,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.category.is_none()
    }

    /// Case-insensitive substring match of the query against the title.
    pub fn matches_query(&self, event: &Event) -> bool {
        event
            .title
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }

    pub fn matches_category(&self, event: &Event) -> bool {
        match self.category {
            Some(category) => event.has_category(category),
            None => true,
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.matches_query(event) && self.matches_category(event)
    }

    /// Filter events, keeping collection order.
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events
            .iter()
            .filter(|event| self.matches(event))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::parse_selection;

    fn event(id: u64, title: &str, categories: &[u32]) -> Event {
        Event {
            id,
            title: title.to_string(),
            description: String::new(),
            image: None,
            start_time: String::new(),
            end_time: String::new(),
            categories: categories.to_vec(),
        }
    }

    fn sample() -> Vec<Event> {
        vec![
            event(1, "Pizza Workshop", &[1]),
            event(2, "Taco Tuesday", &[2]),
            event(3, "Crêpes & Pizza", &[3, 1]),
            event(4, "Ramen", &[4]),
        ]
    }

    fn ids(events: &[&Event]) -> Vec<u64> {
        events.iter().map(|e| e.id).collect()
    }

    #[test]
    fn empty_filter_passes_everything_in_order() {
        let events = sample();
        let filter = EventFilter::default();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter.apply(&events)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let events = sample();
        let filter = EventFilter::new("PIZZA", None);
        assert_eq!(ids(&filter.apply(&events)), vec![1, 3]);

        let filter = EventFilter::new("tues", None);
        assert_eq!(ids(&filter.apply(&events)), vec![2]);
    }

    #[test]
    fn category_requires_membership() {
        let events = sample();
        let filter = EventFilter::new("", Some(Category::Italian));
        assert_eq!(ids(&filter.apply(&events)), vec![1, 3]);

        let filter = EventFilter::new("", Some(Category::Greek));
        assert!(filter.apply(&events).is_empty());
    }

    #[test]
    fn query_and_category_compose() {
        let events = sample();
        let filter = EventFilter::new("pizza", Some(Category::French));
        assert_eq!(ids(&filter.apply(&events)), vec![3]);
    }

    #[test]
    fn placeholder_selection_equals_title_filter_alone() {
        let events = sample();
        let with_placeholder = EventFilter::new("a", parse_selection("").unwrap());
        let title_only = EventFilter::new("a", None);
        assert_eq!(
            ids(&with_placeholder.apply(&events)),
            ids(&title_only.apply(&events))
        );
    }

    #[test]
    fn matches_needs_both_predicates() {
        let taco = event(2, "Taco Tuesday", &[2]);
        assert!(EventFilter::new("taco", Some(Category::Mexican)).matches(&taco));
        assert!(!EventFilter::new("taco", Some(Category::Italian)).matches(&taco));
        assert!(!EventFilter::new("pizza", Some(Category::Mexican)).matches(&taco));

        let filter = EventFilter::new("", Some(Category::Mexican));
        assert!(!filter.is_empty());
        assert!(!EventFilter::new("x", None).is_empty());
    }

    #[test]
    fn result_is_exactly_the_matching_events() {
        let events = sample();
        for query in ["", "a", "pi", "RAMEN", "zz"] {
            for category in std::iter::once(None).chain(Category::ALL.into_iter().map(Some)) {
                let filter = EventFilter::new(query, category);
                let expected: Vec<u64> = events
                    .iter()
                    .filter(|e| e.title.to_lowercase().contains(&query.to_lowercase()))
                    .filter(|e| category.is_none_or(|c| e.categories.contains(&c.code())))
                    .map(|e| e.id)
                    .collect();
                assert_eq!(ids(&filter.apply(&events)), expected);
            }
        }
    }
}
