//! Frontend-only data adapters.

pub mod browser_query;
pub mod page_session;
