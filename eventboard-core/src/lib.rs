//! Core of eventboard: a single event-listing page without a backend.
//!
//! - `EventsPage` holds the state and performs the actions
//! - `source` reads the `{ "events": [...] }` document
//! - `view` derives what gets shown from the state

pub mod category;
pub mod config;
pub mod draft;
pub mod error;
pub mod event;
pub mod filter;
pub mod notification;
pub mod page;
pub mod route;
pub mod source;
pub mod timestamp;
pub mod view;

pub use category::Category;
pub use config::{BoardConfig, IdStrategy};
pub use draft::{DraftEvent, DraftField};
pub use error::{EventBoardError, EventBoardResult};
pub use event::{Event, EventId, EventsDocument};
pub use filter::EventFilter;
pub use notification::{Notification, Severity};
pub use page::{Added, EventsPage, LoadOutcome};
pub use route::Route;
pub use source::{EventSource, FileSource, HttpSource, Source};
pub use view::{EventCard, PageView};
