//! Per-facet predicates over filterable records.

use common::{
    facet::{Facet, FacetState},
    job_posting::JobPosting,
};


/// Read-only view of the record fields the facet predicates look at.
pub trait FilterableRecord {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn organization_name(&self) -> &str;
    fn requirements(&self) -> &[String];
    fn location(&self) -> &str;
    fn category(&self) -> &str;
    fn industry(&self) -> &str;
}

impl FilterableRecord for JobPosting {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn organization_name(&self) -> &str {
        &self.company.name
    }
    fn requirements(&self) -> &[String] {
        &self.requirements
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn category(&self) -> &str {
        self.job_type.as_str()
    }
    fn industry(&self) -> &str {
        &self.company.industry
    }
}


/// An active facet constraint. The needle is lowercased once when the
/// predicate is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetPredicate {
    facet: Facet,
    needle: String,
}

impl FacetPredicate {
    /// `None` when `value` leaves the facet inactive.
    pub fn for_facet(facet: Facet, value: &str) -> Option<Self> {
        let inactive = match facet {
            // whitespace-only keywords do not constrain anything
            Facet::Keyword => value.trim().is_empty(),
            Facet::Location | Facet::JobType | Facet::Industry => value.is_empty(),
        };
        if inactive {
            return None;
        }
        Some(Self { facet, needle: value.to_lowercase() })
    }

    pub fn facet(&self) -> Facet {
        self.facet
    }

    pub fn matches<R: FilterableRecord + ?Sized>(&self, record: &R) -> bool {
        let needle = self.needle.as_str();
        match self.facet {
            Facet::Keyword => {
                contains(record.title(), needle)
                    || contains(record.description(), needle)
                    || contains(record.organization_name(), needle)
                    || record.requirements().iter().any(|req| contains(req, needle))
            }
            Facet::Location => contains(record.location(), needle),
            Facet::JobType => record.category().to_lowercase() == needle,
            Facet::Industry => record.industry().to_lowercase() == needle,
        }
    }
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// Predicates for every active facet of `state`, in facet order.
pub fn active_predicates(state: &FacetState) -> Vec<FacetPredicate> {
    state
        .iter()
        .filter_map(|(facet, value)| FacetPredicate::for_facet(facet, value))
        .collect()
}

pub fn matches_all<R: FilterableRecord + ?Sized>(predicates: &[FacetPredicate], record: &R) -> bool {
    predicates.iter().all(|predicate| predicate.matches(record))
}
