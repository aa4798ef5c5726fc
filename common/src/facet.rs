//! The fixed facet set and the filter state built on it.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};


/// One independently settable filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Keyword,
    Location,
    JobType,
    Industry,
}

impl Facet {
    pub const ALL: [Facet; 4] = [Facet::Keyword, Facet::Location, Facet::JobType, Facet::Industry];

    /// Name used in persisted queries.
    pub const fn as_str(self) -> &'static str {
        match self {
            Facet::Keyword => "keyword",
            Facet::Location => "location",
            Facet::JobType => "jobType",
            Facet::Industry => "industry",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Facet::Keyword => 0,
            Facet::Location => 1,
            Facet::JobType => 2,
            Facet::Industry => 3,
        }
    }
}

impl Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFacet(pub String);

impl std::fmt::Display for UnknownFacet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown facet name: {:?}", self.0)
    }
}

impl std::error::Error for UnknownFacet {}

impl FromStr for Facet {
    type Err = UnknownFacet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facet::ALL
            .into_iter()
            .find(|facet| facet.as_str() == s)
            .ok_or_else(|| UnknownFacet(s.to_string()))
    }
}


/// Current value of every facet. An empty string leaves the facet inactive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FacetState {
    pub keyword: String,
    pub location: String,
    pub job_type: String,
    pub industry: String,
}

impl FacetState {
    pub fn get(&self, facet: Facet) -> &str {
        match facet {
            Facet::Keyword => &self.keyword,
            Facet::Location => &self.location,
            Facet::JobType => &self.job_type,
            Facet::Industry => &self.industry,
        }
    }

    pub fn set(&mut self, facet: Facet, value: impl Into<String>) {
        let slot = match facet {
            Facet::Keyword => &mut self.keyword,
            Facet::Location => &mut self.location,
            Facet::JobType => &mut self.job_type,
            Facet::Industry => &mut self.industry,
        };
        *slot = value.into();
    }

    pub fn with(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.set(facet, value);
        self
    }

    /// Facets paired with their values, in [`Facet::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Facet, &str)> + '_ {
        Facet::ALL.into_iter().map(move |facet| (facet, self.get(facet)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_names_parse_back() {
        for facet in Facet::ALL {
            assert_eq!(facet.as_str().parse::<Facet>(), Ok(facet));
        }
        assert_eq!("salary".parse::<Facet>(), Err(UnknownFacet("salary".to_string())));
        assert!("JobType".parse::<Facet>().is_err());
    }

    #[test]
    fn state_serializes_with_persisted_names() {
        let state = FacetState::default().with(Facet::JobType, "CONTRACT");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["jobType"], "CONTRACT");
        assert_eq!(json["keyword"], "");
    }

    #[test]
    fn set_and_get_address_the_same_slot() {
        let mut state = FacetState::default();
        assert!(state.is_empty());
        for facet in Facet::ALL {
            state.set(facet, facet.as_str());
        }
        for (facet, value) in state.iter() {
            assert_eq!(value, facet.as_str());
        }
        assert!(!state.is_empty());
    }
}
