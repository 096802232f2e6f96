//! Project-related types.
//!
//! This module defines the canonical project record tracked by the dashboard,
//! together with its client, website and domain/hosting service terms.
//!
//! Dates are kept as the raw strings supplied by the data source and parsed
//! on demand through [`crate::date`], so that a malformed value only affects
//! the views that need it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date::parse_date;
use crate::error::{ProtocolError, Result};

/// Unique identifier for a project.
///
/// # Examples
///
/// ```
/// use sitekeeper_protocol::ProjectId;
///
/// let id = ProjectId::new("1");
/// assert_eq!(id.as_str(), "1");
/// assert_eq!(id.to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a project identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The lifecycle status of a project.
///
/// # Examples
///
/// ```
/// use sitekeeper_protocol::ProjectStatus;
///
/// assert_eq!(ProjectStatus::default(), ProjectStatus::Active);
/// assert!(ProjectStatus::Completed.is_completed());
/// assert_eq!(ProjectStatus::Active.label(), "Active");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is ongoing.
    #[default]
    Active,
    /// The project has been delivered.
    Completed,
}

impl ProjectStatus {
    /// Returns `true` for [`ProjectStatus::Completed`].
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns the capitalized display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

/// The client a project is delivered for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Client {
    /// Client or company name.
    pub name: String,
    /// Contact phone number, free-form.
    pub phone: String,
}

impl Client {
    /// Creates a client record.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// The public website built for a project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Website {
    /// Display name, usually the bare domain.
    pub name: String,
    /// Full URL including scheme.
    pub url: String,
}

impl Website {
    /// Creates a website record.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Which recurring service a renewal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// Domain name registration.
    Domain,
    /// Hosting plan.
    Hosting,
}

impl ServiceKind {
    /// Returns both kinds, domain first.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Domain, Self::Hosting]
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Hosting => "Hosting",
        }
    }

    /// Returns the lowercase slug used in identifiers.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Hosting => "hosting",
        }
    }
}

/// Purchase and renewal terms of a domain or hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTerm {
    /// When the service was first purchased.
    pub purchase_date: String,
    /// When the service next expires.
    pub renewal_date: String,
    /// Registrar or hosting company.
    pub provider: String,
}

impl ServiceTerm {
    /// Creates a service term.
    #[must_use]
    pub fn new(
        purchase_date: impl Into<String>,
        renewal_date: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            purchase_date: purchase_date.into(),
            renewal_date: renewal_date.into(),
            provider: provider.into(),
        }
    }
}

/// A client web-development project.
///
/// # Examples
///
/// ```
/// use sitekeeper_protocol::{Client, Project, ProjectStatus, ServiceTerm, Website};
///
/// let project = Project::new("1", "Portfolio Website", "2024-02-01")
///     .with_revenue(3000.0)
///     .with_client(Client::new("John Smith Photography", "+1 (555) 987-6543"))
///     .with_website(Website::new("johnsmithphoto.com", "https://johnsmithphoto.com"))
///     .with_domain(ServiceTerm::new("2023-02-01", "2024-02-01", "Namecheap"))
///     .with_hosting(ServiceTerm::new("2023-02-01", "2024-02-01", "Netlify"));
///
/// assert_eq!(project.status, ProjectStatus::Active);
/// assert!(project.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier for this project.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// When work started.
    pub start_date: String,
    /// When the project was delivered; present iff the status is completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Revenue earned, in the operator's currency.
    pub revenue: f64,
    /// Who the project is for.
    pub client: Client,
    /// The delivered website.
    pub website: Website,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Domain registration terms.
    pub domain: ServiceTerm,
    /// Hosting plan terms.
    pub hosting: ServiceTerm,
}

impl Project {
    /// Creates an active project with empty client, website and services.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: impl Into<String>,
    ) -> Self {
        Self {
            id: ProjectId::new(id),
            name: name.into(),
            start_date: start_date.into(),
            completed_date: None,
            status: ProjectStatus::Active,
            revenue: 0.0,
            client: Client::default(),
            website: Website::default(),
            notes: String::new(),
            domain: ServiceTerm::default(),
            hosting: ServiceTerm::default(),
        }
    }

    /// Sets the revenue.
    #[must_use]
    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = revenue;
        self
    }

    /// Sets the client.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the website.
    #[must_use]
    pub fn with_website(mut self, website: Website) -> Self {
        self.website = website;
        self
    }

    /// Sets the domain terms.
    #[must_use]
    pub fn with_domain(mut self, domain: ServiceTerm) -> Self {
        self.domain = domain;
        self
    }

    /// Sets the hosting terms.
    #[must_use]
    pub fn with_hosting(mut self, hosting: ServiceTerm) -> Self {
        self.hosting = hosting;
        self
    }

    /// Sets the free-text notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Marks the project completed on the given date.
    #[must_use]
    pub fn completed_on(mut self, date: impl Into<String>) -> Self {
        self.status = ProjectStatus::Completed;
        self.completed_date = Some(date.into());
        self
    }

    /// Returns the terms of the given service.
    #[must_use]
    pub fn service(&self, kind: ServiceKind) -> &ServiceTerm {
        match kind {
            ServiceKind::Domain => &self.domain,
            ServiceKind::Hosting => &self.hosting,
        }
    }

    /// Returns `true` while the project is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.status.is_completed()
    }

    /// Checks the data-model invariants.
    ///
    /// - `completed_date` is present iff the status is completed
    /// - revenue is finite and non-negative
    /// - all dates parse
    /// - each service renews on or after its purchase date
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidDate`] for unparseable dates and
    /// [`ProtocolError::InvalidProject`] for any other violation.
    pub fn validate(&self) -> Result<()> {
        match (&self.completed_date, self.status) {
            (Some(_), ProjectStatus::Active) => {
                return Err(self.invalid("active project has a completion date"));
            }
            (None, ProjectStatus::Completed) => {
                return Err(self.invalid("completed project has no completion date"));
            }
            (Some(date), ProjectStatus::Completed) => {
                parse_date(date)?;
            }
            (None, ProjectStatus::Active) => {}
        }

        if !self.revenue.is_finite() || self.revenue < 0.0 {
            return Err(self.invalid(format!("revenue {} is not a non-negative amount", self.revenue)));
        }

        parse_date(&self.start_date)?;

        for kind in ServiceKind::all() {
            let term = self.service(kind);
            let purchased = parse_date(&term.purchase_date)?;
            let renews = parse_date(&term.renewal_date)?;
            if renews < purchased {
                return Err(self.invalid(format!(
                    "{} renews on {} before its purchase on {}",
                    kind.slug(),
                    term.renewal_date,
                    term.purchase_date
                )));
            }
        }

        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> ProtocolError {
        ProtocolError::InvalidProject {
            id: self.id.clone(),
            reason: reason.into(),
        }
    }
}

/// Parses a JSON array of projects.
///
/// # Errors
///
/// Returns [`ProtocolError::DeserializationFailed`] if the JSON does not
/// describe a list of projects.
pub fn parse_projects(json: &str) -> Result<Vec<Project>> {
    serde_json::from_str(json).map_err(ProtocolError::DeserializationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_project() -> Project {
        Project::new("1", "Shop", "2024-01-15")
            .with_revenue(5000.0)
            .with_domain(ServiceTerm::new("2023-01-15", "2024-01-15", "GoDaddy"))
            .with_hosting(ServiceTerm::new("2023-01-15", "2024-01-15", "DigitalOcean"))
    }

    #[test]
    fn valid_project_passes() {
        assert!(valid_project().validate().is_ok());
        assert!(valid_project().completed_on("2024-03-01").validate().is_ok());
    }

    #[test]
    fn completed_without_date_is_rejected() {
        let mut project = valid_project();
        project.status = ProjectStatus::Completed;
        let err = project.validate().unwrap_err();
        assert!(err.to_string().contains("no completion date"));
    }

    #[test]
    fn active_with_completion_date_is_rejected() {
        let mut project = valid_project();
        project.completed_date = Some("2024-03-01".to_string());
        assert!(matches!(
            project.validate(),
            Err(ProtocolError::InvalidProject { .. })
        ));
    }

    #[test]
    fn negative_revenue_is_rejected() {
        let project = valid_project().with_revenue(-1.0);
        assert!(project.validate().is_err());

        let project = valid_project().with_revenue(f64::NAN);
        assert!(project.validate().is_err());
    }

    #[test]
    fn renewal_before_purchase_is_rejected() {
        let project =
            valid_project().with_hosting(ServiceTerm::new("2024-01-15", "2023-01-15", "Netlify"));
        let err = project.validate().unwrap_err();
        assert!(err.to_string().contains("hosting renews"));
    }

    #[test]
    fn malformed_date_is_reported_as_invalid_date() {
        let project =
            valid_project().with_domain(ServiceTerm::new("2023-01-15", "someday", "GoDaddy"));
        assert!(matches!(
            project.validate(),
            Err(ProtocolError::InvalidDate { .. })
        ));
    }

    #[test]
    fn service_returns_matching_terms() {
        let project = valid_project();
        assert_eq!(project.service(ServiceKind::Domain).provider, "GoDaddy");
        assert_eq!(project.service(ServiceKind::Hosting).provider, "DigitalOcean");
    }

    #[test]
    fn json_uses_camel_case_field_names() {
        let json = serde_json::to_string(&valid_project().completed_on("2024-03-01")).unwrap();
        assert!(json.contains(r#""startDate":"2024-01-15""#));
        assert!(json.contains(r#""completedDate":"2024-03-01""#));
        assert!(json.contains(r#""renewalDate":"2024-01-15""#));
        assert!(json.contains(r#""status":"completed""#));
    }

    #[test]
    fn completed_date_omitted_when_unset() {
        let json = serde_json::to_string(&valid_project()).unwrap();
        assert!(!json.contains("completedDate"));
    }

    #[test]
    fn parse_projects_reads_source_shaped_json() {
        let json = r#"[{
            "id": "3",
            "name": "Restaurant Website",
            "startDate": "2023-11-01",
            "completedDate": "2024-01-15",
            "status": "completed",
            "revenue": 4500,
            "client": { "name": "Gourmet Kitchen", "phone": "+1 (555) 456-7890" },
            "website": { "name": "gourmetkitchen.com", "url": "https://gourmetkitchen.com" },
            "notes": "",
            "domain": { "purchaseDate": "2023-11-01", "renewalDate": "2024-11-01", "provider": "GoDaddy" },
            "hosting": { "purchaseDate": "2023-11-01", "renewalDate": "2024-11-01", "provider": "DigitalOcean" }
        }]"#;

        let projects = parse_projects(json).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, ProjectId::new("3"));
        assert_eq!(projects[0].status, ProjectStatus::Completed);
        assert_eq!(projects[0].revenue, 4500.0);
        assert!(projects[0].validate().is_ok());
    }

    #[test]
    fn parse_projects_rejects_wrong_shape() {
        assert!(matches!(
            parse_projects(r#"{"id": "1"}"#),
            Err(ProtocolError::DeserializationFailed(_))
        ));
    }
}
