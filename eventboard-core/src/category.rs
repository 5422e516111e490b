//! The fixed category table.
//!
//! Categories are not loaded from anywhere: the five codes and their labels
//! live here and are shared by the filter control and the add form.

use std::fmt;
use std::str::FromStr;

use crate::error::EventBoardError;

/// One of the five cuisine categories an event can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Italian,
    Mexican,
    French,
    Japanese,
    Greek,
}

impl Category {
    /// All categories, in the order the select controls list them.
    pub const ALL: [Category; 5] = [
        Category::Italian,
        Category::Mexican,
        Category::French,
        Category::Japanese,
        Category::Greek,
    ];

    pub fn code(self) -> u32 {
        match self {
            Category::Italian => 1,
            Category::Mexican => 2,
            Category::French => 3,
            Category::Japanese => 4,
            Category::Greek => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Italian => "Italiaanse keuken",
            Category::Mexican => "Mexicaanse keuken",
            Category::French => "Franse keuken",
            Category::Japanese => "Japanse keuken",
            Category::Greek => "Griekse keuken",
        }
    }

    pub fn from_code(code: u32) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts a numeric code ("3") or a label, case-insensitively ("franse keuken").
impl FromStr for Category {
    type Err = EventBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(code) = trimmed.parse::<u32>() {
            return Category::from_code(code)
                .ok_or_else(|| EventBoardError::UnknownCategory(trimmed.to_string()));
        }

        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EventBoardError::UnknownCategory(s.to_string()))
    }
}

/// Parse the value of a category select control.
///
/// The placeholder option has the value `""`, which selects nothing.
pub fn parse_selection(value: &str) -> Result<Option<Category>, EventBoardError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value.parse().map(Some)
}
