//! Sorting and filtering of project tables.
//!
//! The presentation layer owns a [`ViewState`] per table and passes it to
//! the pure functions in this module on every change. Nothing here keeps
//! state between calls.
//!
//! # Examples
//!
//! ```
//! use sitekeeper_protocol::{Project, SortDirection, SortKey, SortState, sort_projects};
//!
//! let projects = vec![
//!     Project::new("1", "Shop", "2024-01-15").with_revenue(5000.0),
//!     Project::new("2", "Portfolio", "2024-02-01").with_revenue(3000.0),
//!     Project::new("3", "Restaurant", "2023-11-01").with_revenue(4500.0),
//! ];
//!
//! let mut sort = SortState::new(SortKey::Name, SortDirection::Ascending);
//! sort.select(SortKey::Revenue);
//! let sorted = sort_projects(&projects, sort.key, sort.direction);
//! let revenues: Vec<f64> = sorted.iter().map(|p| p.revenue).collect();
//! assert_eq!(revenues, [3000.0, 4500.0, 5000.0]);
//!
//! // Selecting the same key again flips the direction.
//! sort.select(SortKey::Revenue);
//! assert_eq!(sort.direction, SortDirection::Descending);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::date::parse_date;
use crate::error::ProtocolError;
use crate::project::Project;

/// A column a project table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Project name.
    #[serde(rename = "name")]
    Name,
    /// Project start date.
    #[serde(rename = "startDate")]
    StartDate,
    /// Revenue amount.
    #[serde(rename = "revenue")]
    Revenue,
    /// Active/completed.
    #[serde(rename = "status")]
    Status,
    /// Client name.
    #[serde(rename = "client.name")]
    ClientName,
    /// Domain registrar.
    #[serde(rename = "domain.provider")]
    DomainProvider,
    /// Domain renewal date.
    #[serde(rename = "domain.renewalDate")]
    DomainRenewalDate,
    /// Hosting company.
    #[serde(rename = "hosting.provider")]
    HostingProvider,
    /// Hosting renewal date.
    #[serde(rename = "hosting.renewalDate")]
    HostingRenewalDate,
}

impl SortKey {
    /// Sortable columns of the projects table, left to right.
    pub const PROJECT_COLUMNS: &'static [Self] = &[
        Self::Name,
        Self::ClientName,
        Self::StartDate,
        Self::Revenue,
        Self::Status,
    ];

    /// Sortable columns of the domains & hosting table, left to right.
    pub const RENEWAL_COLUMNS: &'static [Self] = &[
        Self::DomainProvider,
        Self::DomainRenewalDate,
        Self::HostingProvider,
        Self::HostingRenewalDate,
    ];

    /// Returns the dotted path used in serialized view state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::StartDate => "startDate",
            Self::Revenue => "revenue",
            Self::Status => "status",
            Self::ClientName => "client.name",
            Self::DomainProvider => "domain.provider",
            Self::DomainRenewalDate => "domain.renewalDate",
            Self::HostingProvider => "hosting.provider",
            Self::HostingRenewalDate => "hosting.renewalDate",
        }
    }

    /// Returns the column header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Project",
            Self::StartDate => "Start Date",
            Self::Revenue => "Revenue",
            Self::Status => "Status",
            Self::ClientName => "Client",
            Self::DomainProvider => "Domain Provider",
            Self::DomainRenewalDate => "Domain Renewal",
            Self::HostingProvider => "Hosting Provider",
            Self::HostingRenewalDate => "Hosting Renewal",
        }
    }

    fn compare(self, a: &Project, b: &Project) -> Ordering {
        match self {
            Self::Name => locale_compare(&a.name, &b.name),
            Self::StartDate => compare_dates(&a.start_date, &b.start_date),
            Self::Revenue => a.revenue.total_cmp(&b.revenue),
            Self::Status => locale_compare(a.status.label(), b.status.label()),
            Self::ClientName => locale_compare(&a.client.name, &b.client.name),
            Self::DomainProvider => locale_compare(&a.domain.provider, &b.domain.provider),
            Self::DomainRenewalDate => {
                compare_dates(&a.domain.renewal_date, &b.domain.renewal_date)
            }
            Self::HostingProvider => locale_compare(&a.hosting.provider, &b.hosting.provider),
            Self::HostingRenewalDate => {
                compare_dates(&a.hosting.renewal_date, &b.hosting.renewal_date)
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ProtocolError;

    /// Parses a dotted key path such as `"client.name"`.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnknownSortKey`] for anything outside the
    /// supported set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "startDate" => Ok(Self::StartDate),
            "revenue" => Ok(Self::Revenue),
            "status" => Ok(Self::Status),
            "client.name" => Ok(Self::ClientName),
            "domain.provider" => Ok(Self::DomainProvider),
            "domain.renewalDate" => Ok(Self::DomainRenewalDate),
            "hosting.provider" => Ok(Self::HostingProvider),
            "hosting.renewalDate" => Ok(Self::HostingRenewalDate),
            other => Err(ProtocolError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Sort direction of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns an arrow glyph for column headers.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// The current sort column and direction of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    /// Column being sorted.
    pub key: SortKey,
    /// Direction of the sort.
    pub direction: SortDirection,
}

impl SortState {
    /// Creates a sort state.
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// The initial sort of the projects table: newest start date first.
    #[must_use]
    pub const fn projects_default() -> Self {
        Self::new(SortKey::StartDate, SortDirection::Descending)
    }

    /// The initial sort of the domains table: soonest domain renewal first.
    #[must_use]
    pub const fn renewals_default() -> Self {
        Self::new(SortKey::DomainRenewalDate, SortDirection::Ascending)
    }

    /// Applies a column selection.
    ///
    /// Selecting the current key while ascending switches to descending;
    /// any other selection sorts ascending by the selected key.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitekeeper_protocol::{SortDirection, SortKey, SortState};
    ///
    /// let mut sort = SortState::projects_default();
    /// sort.select(SortKey::Name);
    /// assert_eq!(sort, SortState::new(SortKey::Name, SortDirection::Ascending));
    /// sort.select(SortKey::Name);
    /// assert_eq!(sort.direction, SortDirection::Descending);
    /// sort.select(SortKey::Name);
    /// assert_eq!(sort.direction, SortDirection::Ascending);
    /// ```
    pub fn select(&mut self, key: SortKey) {
        self.direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.key = key;
    }
}

/// Externally owned view state of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Current sort column and direction.
    pub sort: SortState,
    /// Current search text.
    pub query: String,
}

impl ViewState {
    /// Creates a view state with the given sort and no search text.
    #[must_use]
    pub fn new(sort: SortState) -> Self {
        Self {
            sort,
            query: String::new(),
        }
    }

    /// Sorts then filters `projects` according to this state.
    #[must_use]
    pub fn apply<'a, I>(&self, projects: I) -> Vec<&'a Project>
    where
        I: IntoIterator<Item = &'a Project>,
    {
        let sorted = sort_projects(projects, self.sort.key, self.sort.direction);
        filter_projects(sorted, &self.query)
    }
}

/// Returns the projects ordered by `key` in `direction`.
///
/// Numbers compare numerically, dates by parsed instant (unparseable dates
/// sort after every valid one) and text case-insensitively. Equal keys fall
/// back to the project ID, so the order never depends on the input order:
/// re-sorting is a no-op and the descending order is the exact reverse of
/// the ascending one.
pub fn sort_projects<'a, I>(projects: I, key: SortKey, direction: SortDirection) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut sorted: Vec<&Project> = projects.into_iter().collect();
    sorted.sort_by(|a, b| {
        let ordering = key.compare(a, b).then_with(|| a.id.cmp(&b.id));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Returns the projects matching `query`, in their original order.
///
/// The match is a case-insensitive substring test against every top-level
/// value of a project: id, name, start and completion dates, status,
/// revenue, client name and phone, website name and URL, domain and hosting
/// providers, and the free-text notes. A blank query matches everything.
pub fn filter_projects<'a, I>(projects: I, query: &str) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return projects.into_iter().collect();
    }

    projects
        .into_iter()
        .filter(|project| matches_query(project, &needle))
        .collect()
}

fn matches_query(project: &Project, needle: &str) -> bool {
    let revenue = project.revenue.to_string();
    [
        project.id.as_str(),
        project.name.as_str(),
        project.start_date.as_str(),
        project.completed_date.as_deref().unwrap_or_default(),
        project.status.label(),
        revenue.as_str(),
        project.client.name.as_str(),
        project.client.phone.as_str(),
        project.website.name.as_str(),
        project.website.url.as_str(),
        project.domain.provider.as_str(),
        project.hosting.provider.as_str(),
        project.notes.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Compares text the way a reader expects.
///
/// Letters compare on their base form first, so accents and case only
/// decide between otherwise equal strings: `"Éclair"` sorts between
/// `"Eclair"` and `"Fig"`. The raw text is the final tie-break so the
/// result is a total order.
fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(collation_key(b))
        .then_with(|| {
            a.chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
        })
        .then_with(|| a.cmp(b))
}

fn collation_key(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parsed(a), parsed(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn parsed(value: &str) -> Option<DateTime<Utc>> {
    parse_date(value).ok()
}
