//! Contact entity and its field rules.

use chrono::{DateTime, TimeDelta, Utc};
use validator::Validate;

use super::ObjectId;

/// A stored contact.
///
/// `(first_name, last_name)` is unique across all contacts; the store enforces
/// it, not this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Creates a new Contact instance.
    pub fn new(
        id: ObjectId,
        first_name: String,
        last_name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            created_at,
            updated_at,
        }
    }

    /// The writable fields, for validation.
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }

    /// Shallow-merges `patch` onto this contact.
    ///
    /// Absent fields keep their value, `null` resets to the empty default and
    /// provided values are trimmed.
    pub fn apply(&mut self, patch: ContactPatch) {
        self.first_name = merge(patch.first_name, &self.first_name);
        self.last_name = merge(patch.last_name, &self.last_name);
    }

    /// Stamps a mutation at `now`.
    ///
    /// `updated_at` always moves forward by at least one microsecond, so two
    /// saves inside the same clock tick still produce increasing timestamps.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let floor = self.updated_at + TimeDelta::microseconds(1);
        self.updated_at = now.max(floor);
    }
}

/// Writable contact fields after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ContactFields {
    #[validate(length(min = 1, message = "First name can not be blank"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name can not be blank"))]
    pub last_name: String,
}

impl ContactFields {
    /// Builds trimmed fields.
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
        }
    }
}

/// Fields submitted by a client.
///
/// Outer `None` means the field was absent, `Some(None)` means it was `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub first_name: Option<Option<String>>,
    pub last_name: Option<Option<String>>,
}

impl ContactPatch {
    /// Resolves the patch against empty defaults, as done on creation.
    pub fn into_fields(self) -> ContactFields {
        ContactFields {
            first_name: merge(self.first_name, ""),
            last_name: merge(self.last_name, ""),
        }
    }
}

fn merge(submitted: Option<Option<String>>, current: &str) -> String {
    match submitted {
        None => current.to_string(),
        Some(None) => String::new(),
        Some(Some(value)) => value.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::violations;

    fn sample() -> Contact {
        let now = Utc::now();
        Contact::new(
            ObjectId::new(),
            "Frank".to_string(),
            "Zappa".to_string(),
            now,
            now,
        )
    }

    #[test]
    fn test_fields_are_trimmed() {
        let fields = ContactFields::new("  Neal ", "\tPeart\n");

        assert_eq!(fields.first_name, "Neal");
        assert_eq!(fields.last_name, "Peart");
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_blank_fields_report_both_violations() {
        let fields = ContactFields::new("   ", "");

        let errors = fields.validate().unwrap_err();
        let list = violations(&errors);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].field, "firstName");
        assert_eq!(list[0].message, "First name can not be blank");
        assert_eq!(list[1].field, "lastName");
        assert_eq!(list[1].message, "Last name can not be blank");
    }

    #[test]
    fn test_empty_patch_resolves_to_blank_fields() {
        let fields = ContactPatch::default().into_fields();

        assert_eq!(fields, ContactFields::new("", ""));
        assert!(fields.validate().is_err());
    }

    #[test]
    fn test_apply_overwrites_only_present_fields() {
        let mut contact = sample();

        contact.apply(ContactPatch {
            first_name: None,
            last_name: Some(Some("  Zappa Jr ".to_string())),
        });

        assert_eq!(contact.first_name, "Frank");
        assert_eq!(contact.last_name, "Zappa Jr");
    }

    #[test]
    fn test_apply_null_resets_to_default() {
        let mut contact = sample();

        contact.apply(ContactPatch {
            first_name: Some(None),
            last_name: None,
        });

        assert_eq!(contact.first_name, "");
        assert!(contact.fields().validate().is_err());
    }

    #[test]
    fn test_touch_moves_forward_with_clock() {
        let mut contact = sample();
        let later = contact.updated_at + TimeDelta::seconds(5);

        contact.touch(later);

        assert_eq!(contact.updated_at, later);
    }

    #[test]
    fn test_touch_is_strictly_increasing_on_same_tick() {
        let mut contact = sample();
        let before = contact.updated_at;

        contact.touch(before);

        assert!(contact.updated_at > before);
        assert_eq!(contact.created_at, before);
    }

    #[test]
    fn test_touch_ignores_clock_going_backwards() {
        let mut contact = sample();
        let before = contact.updated_at;

        contact.touch(before - TimeDelta::seconds(10));

        assert!(contact.updated_at > before);
    }
}
