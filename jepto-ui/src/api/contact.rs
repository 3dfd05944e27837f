//! Contact Form Relay
//!
//! The contact form posts straight to a third-party form relay. Nothing here
//! sends requests; the browser performs a native POST. This module only
//! describes the fields and mirrors the browser's `required` / `type=email`
//! constraints so a submission that slipped past them can be held back.

use thiserror::Error;

/// Form relay that receives the contact form POST
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xnnnwvpz";

/// Enquiry category selected on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactCategory {
    RealEstate,
    Development,
    PropertyManagement,
    GeneralContract,
}

impl ContactCategory {
    pub const ALL: [ContactCategory; 4] = [
        ContactCategory::RealEstate,
        ContactCategory::Development,
        ContactCategory::PropertyManagement,
        ContactCategory::GeneralContract,
    ];

    /// Value submitted to the relay
    pub fn value(self) -> &'static str {
        match self {
            ContactCategory::RealEstate => "estate",
            ContactCategory::Development => "develop",
            ContactCategory::PropertyManagement => "management",
            ContactCategory::GeneralContract => "general",
        }
    }

    /// Option text shown in the select
    pub fn label(self) -> &'static str {
        match self {
            ContactCategory::RealEstate => "Real estate",
            ContactCategory::Development => "Development",
            ContactCategory::PropertyManagement => "Property management",
            ContactCategory::GeneralContract => "General contract",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

/// Raw field values as typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Submitted category value; empty while the placeholder is selected
    pub category: String,
    pub message: String,
}

/// Why a submission would be refused by native form validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in your {0}")]
    Missing(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please select a category")]
    UnknownCategory,
}

impl ContactSubmission {
    /// Check the same constraints the form declares, in field order
    pub fn validate(&self) -> Result<(), FormError> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        if !is_email_shaped(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        require(&self.phone, "phone number")?;
        if ContactCategory::from_value(&self.category).is_none() {
            return Err(FormError::UnknownCategory);
        }
        require(&self.message, "message")?;
        Ok(())
    }
}

fn require(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(())
    }
}

/// Loose `local@domain` check, close to what `<input type="email">` accepts
fn is_email_shaped(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactSubmission {
        ContactSubmission {
            name: "Amina M.".to_string(),
            email: "amina@example.com".to_string(),
            phone: "+234 802 000 0000".to_string(),
            category: "estate".to_string(),
            message: "I'd like to view the duplex.".to_string(),
        }
    }

    #[test]
    fn test_complete_submission_is_accepted() {
        assert_eq!(complete().validate(), Ok(()));

        for category in ContactCategory::ALL {
            let submission = ContactSubmission {
                category: category.value().to_string(),
                ..complete()
            };
            assert_eq!(submission.validate(), Ok(()));
        }
    }

    #[test]
    fn test_each_missing_field_blocks() {
        let cases: [(fn(&mut ContactSubmission), FormError); 5] = [
            (|s| s.name.clear(), FormError::Missing("name")),
            (|s| s.email.clear(), FormError::Missing("email")),
            (|s| s.phone = "   ".to_string(), FormError::Missing("phone number")),
            (|s| s.category.clear(), FormError::UnknownCategory),
            (|s| s.message.clear(), FormError::Missing("message")),
        ];

        for (clear, expected) in cases {
            let mut submission = complete();
            clear(&mut submission);
            assert_eq!(submission.validate(), Err(expected));
        }
    }

    #[test]
    fn test_email_shape() {
        for bad in ["amina", "@example.com", "amina@", "amina@@example.com", "am ina@example.com", "amina@.com"] {
            let submission = ContactSubmission {
                email: bad.to_string(),
                ..complete()
            };
            assert_eq!(submission.validate(), Err(FormError::InvalidEmail), "{bad}");
        }

        // type=email does not require a dot in the domain
        let submission = ContactSubmission {
            email: "amina@localhost".to_string(),
            ..complete()
        };
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let submission = ContactSubmission {
            category: "real-estate".to_string(),
            ..complete()
        };
        assert_eq!(submission.validate(), Err(FormError::UnknownCategory));
    }

    #[test]
    fn test_category_values_round_trip() {
        let values: Vec<_> = ContactCategory::ALL.iter().map(|c| c.value()).collect();
        assert_eq!(values, ["estate", "develop", "management", "general"]);

        for category in ContactCategory::ALL {
            assert_eq!(ContactCategory::from_value(category.value()), Some(category));
        }
        assert_eq!(ContactCategory::from_value(""), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormError::Missing("name").to_string(), "Please fill in your name");
        assert_eq!(FormError::UnknownCategory.to_string(), "Please select a category");
    }
}
