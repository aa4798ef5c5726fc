use common::{facet::Facet, job_posting::JobPosting};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};
use engine::ResultStatus;

use crate::components::error_boundary::SectionErrorBoundary;
use crate::components::job_card::JobCard;
use crate::components::searchable_dropdown::SearchableDropdown;
use crate::data_definitions::browser_query::{PageQuerySink, read_location_query};
use crate::data_definitions::page_session::new_page_session;


/// Full job list with the four facet filters. The facet state lives in the
/// address bar and is rewritten in place on every change.
#[component]
pub fn JobsPage() -> Element {
    let session = use_signal(|| new_page_session(PageQuerySink::browser("/jobs"), &read_location_query()));
    let status = use_memo(move || session.read().status());
    let postings = use_memo(move || {
        session
            .read()
            .filtered_records()
            .into_iter()
            .cloned()
            .collect::<Vec<JobPosting>>()
    });

    rsx! {
        Title { "Offres d'emploi" }
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                min-height: 100%;
                padding: 32px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
            ",
            div {
                style: "display: flex; align-items: center; gap: 10px; font-size: 32px; font-weight: 500; color: #0F172A;",
                Icon { icon: MdSearch, style: "width: 32px; height: 32px; color: #4F46E5;" }
                span { "Offres d'emploi" }
            }
            div {
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 12px;
                ",
                SearchableDropdown { session, facet: Facet::Keyword, placeholder: "Poste, mot-clé...".to_string() }
                SearchableDropdown { session, facet: Facet::Location, placeholder: "Ville".to_string() }
                SearchableDropdown { session, facet: Facet::JobType, placeholder: "Type de contrat".to_string() }
                SearchableDropdown { session, facet: Facet::Industry, placeholder: "Secteur".to_string() }
            }
            SectionErrorBoundary {
                match status() {
                    ResultStatus::NoResults => rsx! {
                        div {
                            style: "padding: 40px; text-align: center; color: #6c757d; font-size: 18px;",
                            "Aucune offre ne correspond à vos critères."
                        }
                    },
                    ResultStatus::NoFiltersApplied(count) | ResultStatus::Matches(count) => rsx! {
                        span {
                            style: "color: #475569; font-size: 15px;",
                            "{count} offre(s) trouvée(s)"
                        }
                        div {
                            style: "display: flex; flex-direction: column; gap: 12px;",
                            for posting in postings() {
                                JobCard { key: "{posting.id}", posting, compact: false }
                            }
                        }
                    },
                }
            }
        }
    }
}
