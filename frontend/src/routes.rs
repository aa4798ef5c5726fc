use dioxus::prelude::*;

use crate::pages::home_page::HomePage;
use crate::pages::jobs_page::JobsPage;

/// The facet query of the jobs page stays in the query string and is read
/// by the page itself, so it is not part of the route.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    HomePage {},


    #[route("/jobs")]
    JobsPage {},
}
