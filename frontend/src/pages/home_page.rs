use common::{facet::Facet, job_posting::JobPosting, persisted_query::PersistedQuery};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use engine::ResultStatus;

use crate::components::job_card::JobCard;
use crate::components::searchable_dropdown::SearchableDropdown;
use crate::data_definitions::browser_query::{PageQuerySink, href_with_query};
use crate::data_definitions::page_session::{PageSession, new_page_session};


/// Home page
#[component]
pub fn HomePage() -> Element {
    // the query only feeds the link to the jobs page
    let session = use_signal(|| new_page_session(PageQuerySink::detached(), &PersistedQuery::new()));

    rsx! {
        Title { "Offres d'emploi - Accueil" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SearchCard { session }
            FeaturedJobs { session }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 8px;
                color: #0F172A;
            ",
            span {
                style: "font-size: 46px; font-weight: 500; letter-spacing: -0.02em;",
                "Trouvez votre prochain "
                span { style: "color:#4F46E5;", "emploi" }
            }
            span {
                style: "font-size: 22px; line-height: 1.6; max-width: 620px; color: #111827;",
                "Parcourez les offres par mot-clé, ville, type de contrat et secteur."
            }
        }
    }
}

#[component]
fn SearchCard(session: Signal<PageSession>) -> Element {
    let jobs_href = use_memo(move || href_with_query("/jobs", &session.read().persisted_query()));

    rsx! {
        div {
            id: "x-card-job-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                max-width: 1000px;
                border-radius: 22px;
                padding: 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div {
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 12px;
                ",
                SearchableDropdown { session, facet: Facet::Keyword, placeholder: "Titre du poste, compétences ou entreprise".to_string() }
                SearchableDropdown { session, facet: Facet::Location, placeholder: "Ville ou région".to_string() }
                SearchableDropdown { session, facet: Facet::JobType, placeholder: "Type de contrat".to_string() }
                SearchableDropdown { session, facet: Facet::Industry, placeholder: "Secteur d'activité".to_string() }
            }
            a {
                href: "{jobs_href}",
                style: "
                    display:flex;
                    align-items:center;
                    justify-content:center;
                    gap: 8px;
                    height: 46px;
                    border-radius: 9999px;
                    background: white;
                    color: #2D208A;
                    font-size: 16px;
                    font-weight: 500;
                    text-decoration: none;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                "Rechercher"
            }
        }
    }
}

#[component]
fn FeaturedJobs(session: Signal<PageSession>) -> Element {
    let preview = use_memo(move || session.read().preview().into_iter().cloned().collect::<Vec<JobPosting>>());
    let status = use_memo(move || session.read().status());
    let jobs_href = use_memo(move || href_with_query("/jobs", &session.read().persisted_query()));

    rsx! {
        div {
            style: "font-size: 26px; font-weight: 500; color: #0F172A; margin-top: 10px;",
            "Offres d'emploi récentes"
        }
        div {
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                gap: 16px;
            ",
            for posting in preview() {
                JobCard { key: "{posting.id}", posting, compact: true }
            }
        }
        div {
            style: "text-align: center; color: #475569; font-size: 16px; padding: 8px;",
            match status() {
                ResultStatus::NoResults => rsx! { "Aucune offre ne correspond à vos critères" },
                ResultStatus::NoFiltersApplied(count) | ResultStatus::Matches(count) if count > preview.read().len() => rsx! {
                    a {
                        href: "{jobs_href}",
                        style: "color: #4F46E5; font-size: 16px;",
                        "Voir les {count} offres d'emploi disponibles"
                    }
                },
                ResultStatus::NoFiltersApplied(count) | ResultStatus::Matches(count) => rsx! { "{count} offre(s) trouvée(s)" },
            }
        }
    }
}
