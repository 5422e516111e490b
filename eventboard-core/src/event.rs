//! Event types.
//!
//! `Event` mirrors the records of the events document. Nothing about an
//! event is validated: titles may be empty, times may be unparseable and
//! ids may collide.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::timestamp;

pub type EventId = u64;

/// A listed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Image URL; an empty string in the document means no image.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    /// Category codes. Documents may carry a list or a single value.
    #[serde(default, alias = "categoryIds", deserialize_with = "one_or_many")]
    pub categories: Vec<u32>,
}

impl Event {
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category.code())
    }

    /// Categories of this event that are in the fixed table, in list order.
    pub fn known_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter_map(|code| Category::from_code(*code))
            .collect()
    }

    pub fn display_start(&self) -> String {
        timestamp::display(&self.start_time)
    }

    pub fn display_end(&self) -> String {
        timestamp::display(&self.end_time)
    }
}

/// The events document served at `/events.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsDocument {
    pub events: Vec<Event>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CodeValue {
    Number(u32),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<CodeValue>),
    One(CodeValue),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::Many(values)) => values,
        Some(OneOrMany::One(value)) => vec![value],
    };

    let mut codes = Vec::with_capacity(values.len());
    for value in values {
        match value {
            CodeValue::Number(code) => codes.push(code),
            CodeValue::Text(text) if text.trim().is_empty() => {}
            CodeValue::Text(text) => {
                let code = text
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| de::Error::custom(format!("invalid category code '{text}'")))?;
                codes.push(code);
            }
        }
    }

    Ok(codes)
}
