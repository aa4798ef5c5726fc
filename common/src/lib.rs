//! Common library exports shared between the engine and the frontend.

extern crate serde;


pub mod select_option;
pub mod facet;
pub mod persisted_query;
pub mod job_posting;
pub mod search_const;
