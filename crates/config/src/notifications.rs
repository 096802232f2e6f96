//! Notification preferences.
//!
//! The dashboard sends nothing itself; these switches are stored so that a
//! mailer or reminder job can honor them.

use serde::{Deserialize, Serialize};

/// Which notifications the operator wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Important account updates by email.
    pub email_notifications: bool,
    /// Reminders before domain and hosting renewals.
    pub renewal_reminders: bool,
    /// Project milestones and changes.
    pub project_updates: bool,
    /// News and promotions.
    pub marketing_emails: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            renewal_reminders: true,
            project_updates: true,
            marketing_emails: false,
        }
    }
}

/// One switch of [`NotificationSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// [`NotificationSettings::email_notifications`].
    EmailNotifications,
    /// [`NotificationSettings::renewal_reminders`].
    RenewalReminders,
    /// [`NotificationSettings::project_updates`].
    ProjectUpdates,
    /// [`NotificationSettings::marketing_emails`].
    MarketingEmails,
}

impl Notification {
    /// Returns all switches in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::EmailNotifications,
            Self::RenewalReminders,
            Self::ProjectUpdates,
            Self::MarketingEmails,
        ]
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EmailNotifications => "Email Notifications",
            Self::RenewalReminders => "Renewal Reminders",
            Self::ProjectUpdates => "Project Updates",
            Self::MarketingEmails => "Marketing Emails",
        }
    }

    /// Returns the one-line explanation shown under the label.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::EmailNotifications => "Receive email notifications for important updates",
            Self::RenewalReminders => "Get reminded before domain and hosting renewals",
            Self::ProjectUpdates => "Stay updated on project milestones and changes",
            Self::MarketingEmails => "Receive news and promotional content",
        }
    }
}

impl NotificationSettings {
    /// Returns whether a switch is on.
    #[must_use]
    pub const fn is_enabled(&self, which: Notification) -> bool {
        match which {
            Notification::EmailNotifications => self.email_notifications,
            Notification::RenewalReminders => self.renewal_reminders,
            Notification::ProjectUpdates => self.project_updates,
            Notification::MarketingEmails => self.marketing_emails,
        }
    }

    /// Flips a switch and returns its new state.
    pub fn toggle(&mut self, which: Notification) -> bool {
        let flag = match which {
            Notification::EmailNotifications => &mut self.email_notifications,
            Notification::RenewalReminders => &mut self.renewal_reminders,
            Notification::ProjectUpdates => &mut self.project_updates,
            Notification::MarketingEmails => &mut self.marketing_emails,
        };
        *flag = !*flag;
        *flag
    }
}
