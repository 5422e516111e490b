//! Navigation targets of the page.

use std::fmt;

use url::Url;

use crate::error::{EventBoardError, EventBoardResult};
use crate::event::EventId;

/// A route outside this page. What happens there is not part of eventboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/event/{id}`
    Event(EventId),
    /// `/event/edit/{id}`
    EditEvent(EventId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Event(id) => format!("/event/{id}"),
            Route::EditEvent(id) => format!("/event/edit/{id}"),
        }
    }

    /// Resolve against the app's base URL.
    pub fn url(&self, base: &Url) -> EventBoardResult<Url> {
        base.join(&self.path())
            .map_err(|e| EventBoardError::Config(format!("Could not build route URL: {e}")))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::Event(3).path(), "/event/3");
        assert_eq!(Route::EditEvent(12).path(), "/event/edit/12");
    }

    #[test]
    fn url_resolves_against_origin() {
        let base = Url::parse("http://localhost:5173/some/page").unwrap();
        assert_eq!(
            Route::EditEvent(4).url(&base).unwrap().as_str(),
            "http://localhost:5173/event/edit/4"
        );
    }
}
