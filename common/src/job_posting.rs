//! Job posting records filtered by the engine.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Temporary,
    Internship,
}

impl JobType {
    /// Order in which contract types are offered in the job type catalog.
    pub const DISPLAY_ORDER: [JobType; 5] = [
        JobType::FullTime,
        JobType::Contract,
        JobType::Temporary,
        JobType::PartTime,
        JobType::Internship,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "FULL_TIME",
            JobType::PartTime => "PART_TIME",
            JobType::Contract => "CONTRACT",
            JobType::Temporary => "TEMPORARY",
            JobType::Internship => "INTERNSHIP",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "CDI",
            JobType::PartTime => "Temps partiel",
            JobType::Contract => "CDD",
            JobType::Temporary => "Intérim",
            JobType::Internship => "Stage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub industry: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    pub min: u64,
    pub max: u64,
    pub currency: String,
}

impl Salary {
    /// Human readable yearly range, e.g. `45 000 - 55 000 €/an`.
    pub fn display(salary: Option<&Salary>) -> String {
        let Some(salary) = salary else {
            return "Salaire non communiqué".to_string();
        };
        let symbol = if salary.currency == "EUR" { "€" } else { salary.currency.as_str() };
        if salary.min == salary.max {
            format!("{} {symbol}/an", group_thousands(salary.min))
        } else {
            format!("{} - {} {symbol}/an", group_thousands(salary.min), group_thousands(salary.max))
        }
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: Company,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    #[serde(default)]
    pub salary: Option<Salary>,
}

impl JobPosting {
    /// First comma separated part of the location, e.g. `Paris` for `Paris, France`.
    pub fn city(&self) -> &str {
        self.location.split(',').next().unwrap_or_default().trim()
    }
}
