//! DTOs for the contacts endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::domain::entities::ContactPatch;

/// Request body for `POST /api/contacts` and `PUT /api/contacts/{id}`.
///
/// # Field semantics
///
/// - **Absent** → keep the current value (empty on create)
/// - **`null`** → reset to the empty default
/// - **String** → trimmed and stored
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub first_name: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub last_name: Option<Option<String>>,
}

impl From<ContactRequest> for ContactPatch {
    fn from(req: ContactRequest) -> Self {
        ContactPatch {
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

/// A contact as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_null_and_value_are_distinct() {
        let req: ContactRequest =
            serde_json::from_str(r#"{"firstName": null, "lastName": " Zappa "}"#).unwrap();

        assert_eq!(req.first_name, Some(None));
        assert_eq!(req.last_name, Some(Some(" Zappa ".to_string())));

        let req: ContactRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.first_name, None);
        assert_eq!(req.last_name, None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let req: ContactRequest =
            serde_json::from_str(r#"{"firstName": "Frank", "nickname": "FZ"}"#).unwrap();

        assert_eq!(req.first_name, Some(Some("Frank".to_string())));
    }

    #[test]
    fn test_non_string_name_is_rejected() {
        assert!(serde_json::from_str::<ContactRequest>(r#"{"firstName": 42}"#).is_err());
    }
}
