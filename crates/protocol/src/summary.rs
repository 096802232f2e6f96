//! Dashboard overview figures.

use chrono::{DateTime, Utc};

use crate::date::days_until_str;
use crate::error::{ProtocolError, Result};
use crate::project::{Project, ProjectId, ProjectStatus};
use crate::renewal::{RenewalFeed, Urgency};

/// Portfolio-wide figures shown on the dashboard.
///
/// # Examples
///
/// ```
/// use sitekeeper_protocol::{PortfolioSummary, Project};
///
/// let projects = vec![
///     Project::new("1", "Shop", "2024-01-15").with_revenue(5000.0),
///     Project::new("2", "Blog", "2023-05-01")
///         .with_revenue(1200.0)
///         .completed_on("2023-08-01"),
/// ];
///
/// let summary = PortfolioSummary::new(&projects, 0);
/// assert_eq!(summary.active.len(), 1);
/// assert_eq!(summary.completed.len(), 1);
/// assert_eq!(summary.total_revenue, 6200.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary<'a> {
    /// Active projects, in input order.
    pub active: Vec<&'a Project>,
    /// Completed projects, in input order.
    pub completed: Vec<&'a Project>,
    /// Sum of revenue across all projects.
    pub total_revenue: f64,
    /// Renewals due within the urgency threshold (overdue included).
    pub urgent_renewals: usize,
}

impl<'a> PortfolioSummary<'a> {
    /// Partitions `projects` by status and totals their revenue.
    pub fn new<I>(projects: I, urgent_renewals: usize) -> Self
    where
        I: IntoIterator<Item = &'a Project>,
    {
        let mut summary = Self {
            active: Vec::new(),
            completed: Vec::new(),
            total_revenue: 0.0,
            urgent_renewals,
        };

        for project in projects {
            summary.total_revenue += project.revenue;
            match project.status {
                ProjectStatus::Active => summary.active.push(project),
                ProjectStatus::Completed => summary.completed.push(project),
            }
        }

        summary
    }

    /// Builds the summary, counting urgent renewals from `feed`.
    pub fn with_feed<I>(projects: I, feed: &RenewalFeed) -> Self
    where
        I: IntoIterator<Item = &'a Project>,
    {
        Self::new(projects, feed.urgent().count())
    }

    /// Total number of projects.
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.active.len() + self.completed.len()
    }

    /// Returns the number of projects in `status`.
    #[must_use]
    pub fn count(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::Active => self.active.len(),
            ProjectStatus::Completed => self.completed.len(),
        }
    }
}

/// The domain-renewal countdown shown on an active project's card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainCountdown {
    /// Whole days left, negative when overdue.
    pub days_left: i64,
    /// Urgency of the renewal.
    pub urgency: Urgency,
}

/// Returns the domain-renewal countdown of a project.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidDate`] if the domain renewal date
/// cannot be parsed.
pub fn domain_countdown(project: &Project, now: DateTime<Utc>) -> Result<DomainCountdown> {
    let days_left = days_until_str(&project.domain.renewal_date, now)?;
    Ok(DomainCountdown {
        days_left,
        urgency: Urgency::classify(days_left),
    })
}

/// Finds a project by id.
///
/// # Errors
///
/// Returns [`ProtocolError::ProjectNotFound`] if no project has `id`.
pub fn find_project<'a>(projects: &'a [Project], id: &ProjectId) -> Result<&'a Project> {
    projects
        .iter()
        .find(|project| &project.id == id)
        .ok_or_else(|| ProtocolError::ProjectNotFound(id.clone()))
}
