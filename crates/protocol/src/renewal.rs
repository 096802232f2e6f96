//! Renewal tracking.
//!
//! Flattens each project's domain and hosting terms into a single,
//! time-ordered feed of [`RenewalItem`]s and classifies how urgent each one is.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use sitekeeper_protocol::{Project, ServiceTerm, Urgency, derive_renewal_feed};
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
//! let projects = vec![
//!     Project::new("1", "Shop", "2024-01-01")
//!         .with_domain(ServiceTerm::new("2023-06-01", "2024-06-21", "GoDaddy"))
//!         .with_hosting(ServiceTerm::new("2023-06-01", "2024-09-01", "Netlify")),
//! ];
//!
//! let feed = derive_renewal_feed(&projects, now);
//! assert_eq!(feed.len(), 2);
//! assert_eq!(feed.items[0].days_left, 20);
//! assert_eq!(feed.items[0].urgency(), Urgency::Urgent);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date::{days_until, parse_date};
use crate::error::{ProtocolError, Result};
use crate::project::{Project, ProjectId, ServiceKind};

/// Renewals this many days away or fewer are urgent.
pub const URGENCY_THRESHOLD_DAYS: i64 = 30;

/// How pressing a renewal is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Due within [`URGENCY_THRESHOLD_DAYS`] days, or overdue.
    Urgent,
    /// Further out than the threshold.
    Normal,
}

impl Urgency {
    /// Classifies a day count.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitekeeper_protocol::Urgency;
    ///
    /// assert_eq!(Urgency::classify(30), Urgency::Urgent);
    /// assert_eq!(Urgency::classify(31), Urgency::Normal);
    /// assert_eq!(Urgency::classify(-4), Urgency::Urgent);
    /// ```
    #[must_use]
    pub const fn classify(days_left: i64) -> Self {
        if days_left <= URGENCY_THRESHOLD_DAYS {
            Self::Urgent
        } else {
            Self::Normal
        }
    }

    /// Returns `true` for [`Urgency::Urgent`].
    #[must_use]
    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::Urgent)
    }
}

/// Classifies a day count; shorthand for [`Urgency::classify`].
#[must_use]
pub const fn urgency_class(days_left: i64) -> Urgency {
    Urgency::classify(days_left)
}

/// One upcoming domain or hosting renewal, derived from a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewalItem {
    /// The project the service belongs to.
    pub project_id: ProjectId,
    /// The project's display name.
    pub project_name: String,
    /// Domain or hosting.
    pub kind: ServiceKind,
    /// When the service renews.
    pub date: DateTime<Utc>,
    /// Registrar or hosting company.
    pub provider: String,
    /// Whole days until renewal, negative when overdue.
    pub days_left: i64,
}

impl RenewalItem {
    /// Derives the renewal of one service of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidDate`] if the renewal date cannot be parsed.
    pub fn from_project(project: &Project, kind: ServiceKind, now: DateTime<Utc>) -> Result<Self> {
        let term = project.service(kind);
        let date = parse_date(&term.renewal_date)?;
        Ok(Self {
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            kind,
            date,
            provider: term.provider.clone(),
            days_left: days_until(date, now),
        })
    }

    /// Returns a stable identifier such as `"3-hosting"`.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}-{}", self.project_id, self.kind.slug())
    }

    /// Returns the urgency of this renewal.
    #[must_use]
    pub const fn urgency(&self) -> Urgency {
        Urgency::classify(self.days_left)
    }
}

/// A project left out of the feed because its renewal dates are unusable.
#[derive(Debug)]
pub struct RejectedProject {
    /// The excluded project.
    pub project_id: ProjectId,
    /// Why it was excluded.
    pub error: ProtocolError,
}

/// The derived renewal feed, most urgent first.
#[derive(Debug, Default)]
pub struct RenewalFeed {
    /// Renewal items sorted ascending by `days_left`.
    pub items: Vec<RenewalItem>,
    /// Projects excluded because a renewal date failed to parse.
    pub rejected: Vec<RejectedProject>,
}

impl RenewalFeed {
    /// Returns the number of renewal items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the feed has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items, most urgent first.
    pub fn iter(&self) -> std::slice::Iter<'_, RenewalItem> {
        self.items.iter()
    }

    /// Iterates over the urgent items only.
    pub fn urgent(&self) -> impl Iterator<Item = &RenewalItem> {
        self.items.iter().filter(|item| item.urgency().is_urgent())
    }
}

/// Derives both renewal items of a project, domain first.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidDate`] if either renewal date cannot be parsed.
pub fn project_renewals(project: &Project, now: DateTime<Utc>) -> Result<[RenewalItem; 2]> {
    Ok([
        RenewalItem::from_project(project, ServiceKind::Domain, now)?,
        RenewalItem::from_project(project, ServiceKind::Hosting, now)?,
    ])
}

/// Builds the renewal feed for a list of projects.
///
/// Each project contributes exactly two items (domain, hosting). The feed is
/// sorted ascending by `days_left`; equal counts keep input order. A project
/// whose renewal dates do not parse contributes nothing and is listed in
/// [`RenewalFeed::rejected`].
pub fn derive_renewal_feed<'a, I>(projects: I, now: DateTime<Utc>) -> RenewalFeed
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut feed = RenewalFeed::default();

    for project in projects {
        match project_renewals(project, now) {
            Ok(items) => feed.items.extend(items),
            Err(error) => {
                tracing::warn!(project = %project.id, %error, "excluding project from renewal feed");
                feed.rejected.push(RejectedProject {
                    project_id: project.id.clone(),
                    error,
                });
            }
        }
    }

    // `sort_by_key` is stable, which keeps ties in input order.
    feed.items.sort_by_key(|item| item.days_left);
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ServiceTerm;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn project(id: &str, domain_renewal: &str, hosting_renewal: &str) -> Project {
        Project::new(id, format!("Project {id}"), "2024-01-01")
            .with_domain(ServiceTerm::new("2023-01-01", domain_renewal, "Registrar"))
            .with_hosting(ServiceTerm::new("2023-01-01", hosting_renewal, "Host"))
    }

    #[test]
    fn urgency_boundary_is_thirty_days() {
        assert_eq!(urgency_class(30), Urgency::Urgent);
        assert_eq!(urgency_class(31), Urgency::Normal);
        assert_eq!(urgency_class(0), Urgency::Urgent);
        assert_eq!(urgency_class(-100), Urgency::Urgent);
    }

    #[test]
    fn domain_items_are_ordered_by_days_left() {
        // today+10, today+45, today-5 in input order
        let projects = vec![
            project("a", "2024-06-11", "2025-06-01"),
            project("b", "2024-07-16", "2025-06-01"),
            project("c", "2024-05-27", "2025-06-01"),
        ];

        let feed = derive_renewal_feed(&projects, now());
        let domain_days: Vec<i64> = feed
            .iter()
            .filter(|item| item.kind == ServiceKind::Domain)
            .map(|item| item.days_left)
            .collect();

        insta::assert_debug_snapshot!(domain_days, @r"
        [
            -5,
            10,
            45,
        ]
        ");
    }

    #[test]
    fn feed_emits_two_items_per_project() {
        let projects = vec![
            project("1", "2024-06-11", "2024-06-20"),
            project("2", "2024-08-01", "2024-07-01"),
        ];
        let feed = derive_renewal_feed(&projects, now());

        assert_eq!(feed.len(), 4);
        assert!(feed.rejected.is_empty());
        for p in &projects {
            assert_eq!(feed.iter().filter(|i| i.project_id == p.id).count(), 2);
        }
    }

    #[test]
    fn ties_keep_input_order() {
        let projects = vec![
            project("first", "2024-06-11", "2024-06-11"),
            project("second", "2024-06-11", "2024-06-11"),
        ];
        let feed = derive_renewal_feed(&projects, now());
        let ids: Vec<String> = feed.iter().map(RenewalItem::id).collect();

        assert_eq!(
            ids,
            ["first-domain", "first-hosting", "second-domain", "second-hosting"]
        );
    }

    #[test]
    fn empty_project_list_yields_empty_feed() {
        let feed = derive_renewal_feed(&Vec::<Project>::new(), now());
        assert!(feed.is_empty());
        assert!(feed.rejected.is_empty());
        assert_eq!(feed.urgent().count(), 0);
    }

    #[test]
    fn unparseable_dates_exclude_the_whole_project() {
        let projects = vec![
            project("good", "2024-06-11", "2024-06-20"),
            project("bad", "2024-06-11", "whenever"),
        ];
        let feed = derive_renewal_feed(&projects, now());

        assert_eq!(feed.len(), 2);
        assert!(feed.iter().all(|item| item.project_id.as_str() == "good"));
        assert_eq!(feed.rejected.len(), 1);
        assert_eq!(feed.rejected[0].project_id.as_str(), "bad");
        assert!(matches!(
            feed.rejected[0].error,
            ProtocolError::InvalidDate { .. }
        ));
    }

    #[test]
    fn overdue_items_keep_negative_counts() {
        let projects = vec![project("late", "2024-05-01", "2024-04-01")];
        let feed = derive_renewal_feed(&projects, now());

        assert_eq!(feed.items[0].days_left, -61);
        assert_eq!(feed.items[1].days_left, -31);
    }

    #[test]
    fn urgent_filters_by_threshold() {
        let projects = vec![project("1", "2024-07-01", "2024-07-02")];
        let feed = derive_renewal_feed(&projects, now());

        // 30 and 31 days out
        let urgent: Vec<_> = feed.urgent().map(RenewalItem::id).collect();
        assert_eq!(urgent, ["1-domain"]);
    }

    #[test]
    fn item_carries_provider_and_name() {
        let p = project("9", "2024-06-11", "2024-06-20");
        let item = RenewalItem::from_project(&p, ServiceKind::Hosting, now()).unwrap();

        assert_eq!(item.project_name, "Project 9");
        assert_eq!(item.provider, "Host");
        assert_eq!(item.id(), "9-hosting");
        assert_eq!(item.days_left, 19);
    }
}
