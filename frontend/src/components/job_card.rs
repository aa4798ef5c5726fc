//! Job posting card component.

use common::job_posting::{JobPosting, Salary};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::{MdRoom, MdWork}};

#[component]
pub fn JobCard(posting: ReadSignal<JobPosting>, compact: bool) -> Element {
    let JobPosting {
        title,
        company,
        description,
        requirements,
        location,
        job_type,
        salary,
        ..
    } = posting.read().clone();
    let salary_text = Salary::display(salary.as_ref());
    let job_type_label = job_type.label();
    let description_lines = if compact { 2 } else { 4 };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                background: white;
                border: 1px solid #AAAAAA33;
                border-radius: 8px;
                padding: 16px 20px;
                box-sizing: border-box;
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
            ",
            // Row 1: TITLE - SPACER - CONTRACT TYPE
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                span {
                    style: "font-size: 18px; font-weight: 600; color: #0F172A;",
                    "{title}"
                }
                div { style: "flex: 1 1 auto;" }
                span {
                    style: "
                        font-size: 13px;
                        color: #4F46E5;
                        background: #4F46E51A;
                        padding: 2px 8px;
                        border-radius: 4px;
                        white-space: nowrap;
                    ",
                    "{job_type_label}"
                }
            }
            // Row 2: COMPANY - LOCATION
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px; color: #475569; font-size: 14px;",
                Icon { icon: MdWork, style: "width: 16px; height: 16px;" }
                span { "{company.name}" }
                Icon { icon: MdRoom, style: "width: 16px; height: 16px; margin-left: 8px;" }
                span { "{location}" }
            }
            p {
                style: "
                    margin: 0;
                    color: #334155;
                    font-size: 14px;
                    display: -webkit-box;
                    -webkit-line-clamp: {description_lines};
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                ",
                "{description}"
            }
            if !compact && !requirements.is_empty() {
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                    for requirement in requirements {
                        span {
                            style: "font-size: 12px; color: #334155; background: #F1F5F9; padding: 2px 8px; border-radius: 4px;",
                            "{requirement}"
                        }
                    }
                }
            }
            span {
                style: "font-size: 14px; font-weight: 500; color: #0F172A;",
                "{salary_text}"
            }
        }
    }
}
