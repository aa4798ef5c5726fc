//! Data sources the pages feed into the search engine.

pub mod job_api;
