//! Selectable options and the ordered catalogs facets choose from.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::job_posting::JobType;


#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }

    /// Option whose value and label are the same text.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self { value: text.clone(), label: text }
    }

    /// The `""` value means "no constraint" for the facet it is chosen in.
    pub fn is_sentinel(&self) -> bool {
        self.value.is_empty()
    }
}

/// Ordered list of options with unique values.
///
/// Order is display order. When the producer hands over a duplicate value the
/// first occurrence wins, so a catalog never holds two options with the same
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<SelectOption>", into = "Vec<SelectOption>")]
pub struct OptionCatalog {
    options: Vec<SelectOption>,
}

impl OptionCatalog {
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Self {
        let mut seen = HashSet::new();
        let options = options
            .into_iter()
            .filter(|option| seen.insert(option.value.clone()))
            .collect();
        Self { options }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Sentinel option labelled `all_label`, followed by every distinct value
    /// in first-seen order.
    pub fn distinct<I, S>(all_label: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sentinel = SelectOption::new("", all_label);
        Self::new(std::iter::once(sentinel).chain(values.into_iter().map(SelectOption::plain)))
    }

    /// Sentinel option followed by the contract types in their display order.
    pub fn job_types(all_label: &str) -> Self {
        let sentinel = SelectOption::new("", all_label);
        let types = JobType::DISPLAY_ORDER
            .iter()
            .map(|job_type| SelectOption::new(job_type.as_str(), job_type.label()));
        Self::new(std::iter::once(sentinel).chain(types))
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn find(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|option| option.value == value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.options.iter()
    }
}

impl From<Vec<SelectOption>> for OptionCatalog {
    fn from(options: Vec<SelectOption>) -> Self {
        Self::new(options)
    }
}

impl From<OptionCatalog> for Vec<SelectOption> {
    fn from(catalog: OptionCatalog) -> Self {
        catalog.options
    }
}

impl FromIterator<SelectOption> for OptionCatalog {
    fn from_iter<T: IntoIterator<Item = SelectOption>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a OptionCatalog {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
