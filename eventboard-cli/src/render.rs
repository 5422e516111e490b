//! Terminal rendering for eventboard-core types.
//!
//! Extension traits that add colored output to the page view model using
//! owo_colors.

use eventboard_core::Category;
use eventboard_core::filter::EventFilter;
use eventboard_core::notification::{Notification, Severity};
use eventboard_core::view::{DELETE_LABEL, EDIT_LABEL, EventCard, PageView};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Category {
    fn render(&self) -> String {
        format!("{} {}", self.code().dimmed(), self.label())
    }
}

impl Render for Severity {
    fn render(&self) -> String {
        match self {
            Severity::Success => "✓".green().to_string(),
            Severity::Error => "✗".red().to_string(),
        }
    }
}

impl Render for Notification {
    fn render(&self) -> String {
        let title = match self.severity {
            Severity::Success => self.title.green().to_string(),
            Severity::Error => self.title.red().to_string(),
        };
        let mut hint = format!("{}s", self.duration.as_secs());
        if self.closable {
            hint.push_str(", sluitbaar");
        }
        format!(
            "{} {} {}\n  {}",
            self.severity.render(),
            title,
            format!("({hint})").dimmed(),
            self.description.dimmed()
        )
    }
}

impl Render for EventCard {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{} {}",
            self.title.bold(),
            format!("({})", self.link).dimmed()
        ));
        if !self.description.is_empty() {
            lines.push(format!("  {}", self.description));
        }
        if let Some(image) = &self.image {
            lines.push(format!("  {}", image.underline()));
        }
        lines.push(format!("  {}", format!("Start: {}", self.start).dimmed()));
        lines.push(format!("  {}", format!("End: {}", self.end).dimmed()));
        if !self.categories.is_empty() {
            let tags: Vec<&str> = self.categories.iter().map(|c| c.label()).collect();
            lines.push(format!("  {}", tags.join(" · ").cyan()));
        }
        lines.push(format!(
            "  {} {}",
            format!("[{EDIT_LABEL}: eventboard edit {}]", self.id).cyan(),
            format!("[{DELETE_LABEL}: eventboard delete {}]", self.id).red()
        ));

        lines.join("\n")
    }
}

impl Render for PageView {
    fn render(&self) -> String {
        let mut blocks = vec![self.heading.bold().to_string()];

        match self.empty_message {
            Some(message) => blocks.push(message.dimmed().to_string()),
            None => blocks.extend(self.cards.iter().map(|card| card.render())),
        }

        blocks.join("\n\n")
    }
}

impl Render for EventFilter {
    fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut parts = Vec::new();
        if !self.query.is_empty() {
            parts.push(format!("zoekterm \"{}\"", self.query));
        }
        if let Some(category) = self.category {
            parts.push(format!("categorie {}", category.label()));
        }
        format!("Filter: {}", parts.join(", ")).dimmed().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventboard_core::Event;
    use eventboard_core::view::{EMPTY_MESSAGE, HEADING};

    fn event() -> Event {
        Event {
            id: 3,
            title: "Ratatouille".into(),
            description: "Groenten stoven".into(),
            image: Some("https://example.com/r.jpg".into()),
            start_time: "2026-04-02T17:00".into(),
            end_time: "2026-04-02T19:00".into(),
            categories: vec![3],
        }
    }

    #[test]
    fn empty_view_shows_message() {
        let rendered = PageView::build(&[]).render();
        assert!(rendered.contains(HEADING));
        assert!(rendered.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn card_shows_all_parts() {
        let event = event();
        let rendered = PageView::build(&[&event]).render();
        assert!(rendered.contains("Ratatouille"));
        assert!(rendered.contains("/event/3"));
        assert!(rendered.contains("Groenten stoven"));
        assert!(rendered.contains("https://example.com/r.jpg"));
        assert!(rendered.contains("Start: 2-4-2026, 17:00:00"));
        assert!(rendered.contains("Franse keuken"));
        assert!(!rendered.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn notification_shows_title_and_description() {
        let rendered = Notification::event_deleted().render();
        assert!(rendered.contains("Evenement verwijderd"));
        assert!(rendered.contains("Het evenement is succesvol verwijderd."));
    }

    #[test]
    fn notification_shows_duration_and_closable_hint() {
        let rendered = Notification::event_added().render();
        assert!(rendered.contains("(5s, sluitbaar)"));

        let mut sticky = Notification::event_added();
        sticky.closable = false;
        sticky.duration = std::time::Duration::from_secs(2);
        let rendered = sticky.render();
        assert!(rendered.contains("(2s)"));
        assert!(!rendered.contains("sluitbaar"));
    }

    #[test]
    fn empty_filter_renders_nothing() {
        assert_eq!(EventFilter::default().render(), "");
        let filter = EventFilter::new("taco", Some(Category::Mexican));
        let rendered = filter.render();
        assert!(rendered.contains("taco"));
        assert!(rendered.contains("Mexicaanse keuken"));
    }
}
