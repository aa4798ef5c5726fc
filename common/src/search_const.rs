//! Constants shared by the engine and the frontend.

/// Number of postings shown in the home page preview.
pub const DEFAULT_PREVIEW_SIZE: usize = 6;

/// Environment variable overriding [`DEFAULT_PREVIEW_SIZE`].
pub const PREVIEW_SIZE_ENV_VAR: &str = "JOB_SEARCH_PREVIEW_SIZE";
