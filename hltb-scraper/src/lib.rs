//! HowLongToBeat client: fetches search results over HTTP and filters them
//! with `hltb-core`.

pub mod client;
pub mod error;
pub mod html;
pub mod request;
pub mod search;
pub mod settings;
pub mod transport;

pub use client::HltbClient;
pub use error::ScrapeError;
pub use request::{SearchModifier, SearchRequest};
pub use search::HowLongToBeat;
pub use settings::{Settings, settings_path};
pub use transport::CatalogTransport;

pub use hltb_core::{GameEntry, SearchQuery};
