pub mod home_page;
pub mod jobs_page;
