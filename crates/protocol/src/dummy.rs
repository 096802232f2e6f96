//! Sample data for the dashboard.
//!
//! The application has no storage; it starts from the seed portfolio in
//! this module. Tests use it as a realistic fixture.
//!
//! # Examples
//!
//! ```
//! use sitekeeper_protocol::dummy::{sample_notes, sample_projects};
//!
//! let projects = sample_projects();
//! assert_eq!(projects.len(), 3);
//! assert!(projects.iter().all(|p| p.validate().is_ok()));
//!
//! let notes = sample_notes();
//! assert_eq!(notes.color_palette.as_ref().map(Vec::len), Some(3));
//! ```

use crate::note::ProjectNote;
use crate::project::{Client, Project, ServiceTerm, Website};

/// Shorthand for a project whose domain and hosting were bought together.
///
/// Every seed project registers its domain and hosting on the same day with
/// the same renewal date; only the providers differ.
struct SeedProject {
    project: Project,
    purchased: &'static str,
    renews: &'static str,
}

impl SeedProject {
    fn new(id: &str, name: &str, start_date: &str, revenue: f64) -> Self {
        Self {
            project: Project::new(id, name, start_date).with_revenue(revenue),
            purchased: "",
            renews: "",
        }
    }

    fn client(mut self, name: &str, phone: &str) -> Self {
        self.project.client = Client::new(name, phone);
        self
    }

    fn website(mut self, domain: &str) -> Self {
        self.project.website = Website::new(domain, format!("https://{domain}"));
        self
    }

    fn term(mut self, purchased: &'static str, renews: &'static str) -> Self {
        self.purchased = purchased;
        self.renews = renews;
        self
    }

    fn completed(mut self, date: &str) -> Self {
        self.project = self.project.completed_on(date);
        self
    }

    fn build(self, registrar: &str, host: &str) -> Project {
        self.project
            .with_domain(ServiceTerm::new(self.purchased, self.renews, registrar))
            .with_hosting(ServiceTerm::new(self.purchased, self.renews, host))
    }
}

/// Returns the seed portfolio: two active projects and one completed one.
///
/// | ID | Project | Status | Revenue | Renews |
/// |----|---------|--------|---------|--------|
/// | 1 | E-commerce Redesign | active | 5000 | 2024-01-15 |
/// | 2 | Portfolio Website | active | 3000 | 2024-02-01 |
/// | 3 | Restaurant Website | completed | 4500 | 2024-11-01 |
#[must_use]
pub fn sample_projects() -> Vec<Project> {
    vec![
        SeedProject::new("1", "E-commerce Redesign", "2024-01-15", 5000.0)
            .client("Fashion Boutique", "+1 (555) 123-4567")
            .website("fashionboutique.com")
            .term("2023-01-15", "2024-01-15")
            .build("GoDaddy", "DigitalOcean"),
        SeedProject::new("2", "Portfolio Website", "2024-02-01", 3000.0)
            .client("John Smith Photography", "+1 (555) 987-6543")
            .website("johnsmithphoto.com")
            .term("2023-02-01", "2024-02-01")
            .build("Namecheap", "Netlify"),
        SeedProject::new("3", "Restaurant Website", "2023-11-01", 4500.0)
            .completed("2024-01-15")
            .client("Gourmet Kitchen", "+1 (555) 456-7890")
            .website("gourmetkitchen.com")
            .term("2023-11-01", "2024-11-01")
            .build("GoDaddy", "DigitalOcean"),
    ]
}

/// Returns the seed notes record shown in the project detail view.
#[must_use]
pub fn sample_notes() -> ProjectNote {
    ProjectNote {
        admin_url: Some("https://admin.fashionboutique.com".to_string()),
        login_credentials: Some("Username: admin\nPassword: ********".to_string()),
        email_credentials: Some(
            "Email: admin@fashionboutique.com\nPassword: ********".to_string(),
        ),
        hosting_access: Some("SSH Access: user@server\nPassword: ********".to_string()),
        project_emails: Some(vec![
            "info@fashionboutique.com".to_string(),
            "support@fashionboutique.com".to_string(),
        ]),
        color_palette: Some(vec![
            "#FF5733".to_string(),
            "#33FF57".to_string(),
            "#3357FF".to_string(),
        ]),
        additional_notes: Some(
            "Regular maintenance scheduled for the first Monday of each month.".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{ProjectId, ProjectStatus};

    #[test]
    fn sample_projects_are_valid() {
        for project in sample_projects() {
            assert!(
                project.validate().is_ok(),
                "seed project {} failed validation",
                project.id
            );
        }
    }

    #[test]
    fn sample_projects_have_unique_ids() {
        let projects = sample_projects();
        let mut ids: Vec<&ProjectId> = projects.iter().map(|p| &p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn sample_status_distribution() {
        let projects = sample_projects();
        let completed: Vec<_> = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(completed, ["3"]);
        assert_eq!(projects[2].completed_date.as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn sample_services_use_distinct_providers() {
        let projects = sample_projects();
        assert_eq!(projects[1].domain.provider, "Namecheap");
        assert_eq!(projects[1].hosting.provider, "Netlify");
        assert_eq!(projects[1].website.url, "https://johnsmithphoto.com");
    }

    #[test]
    fn sample_notes_fill_every_field() {
        let notes = sample_notes();
        for field in crate::note::NoteField::all() {
            assert!(
                notes.field_text(*field).is_some(),
                "{} should be set",
                field.label()
            );
        }
    }
}
