pub mod error_boundary;
pub mod job_card;
pub mod searchable_dropdown;
