//! Operator profile.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Who runs the dashboard.
///
/// # Examples
///
/// ```
/// use sitekeeper_config::{Profile, ProfileField};
///
/// let mut profile = Profile::default();
/// profile.set(ProfileField::Company, "Acme Web");
/// assert_eq!(profile.get(ProfileField::Company), "Acme Web");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Business name.
    pub company: String,
    /// Contact phone, free-form.
    pub phone: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            company: "Web Solutions Inc.".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
        }
    }
}

/// The editable fields of a [`Profile`], in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    /// [`Profile::name`].
    Name,
    /// [`Profile::email`].
    Email,
    /// [`Profile::company`].
    Company,
    /// [`Profile::phone`].
    Phone,
}

impl ProfileField {
    /// Returns all fields in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Name, Self::Email, Self::Company, Self::Phone]
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Company => "Company",
            Self::Phone => "Phone",
        }
    }
}

impl Profile {
    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Company => &self.company,
            ProfileField::Phone => &self.phone,
        }
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Company => self.company = value,
            ProfileField::Phone => self.phone = value,
        }
    }

    /// Checks the profile values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSetting`] if a non-empty email has no
    /// `@`.
    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err(ConfigError::InvalidSetting {
                field: "profile.email",
                reason: format!("{email:?} is not an email address"),
            });
        }
        Ok(())
    }
}
