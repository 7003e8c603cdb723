use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============ UCRM API Models ============

/// One element of the `GET clients` list response.
///
/// The list endpoint returns full records, but only the id is needed here;
/// the batch re-fetches each client individually for fresh detail.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientRef {
    pub id: i64,
}

/// Full client record from `GET clients/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Client {
    pub id: i64,
    /// Custom fields configured in the CRM, as key/value string pairs.
    pub attributes: Vec<Attribute>,
    pub contacts: Vec<Contact>,
}

/// A client custom field.
#[derive(Debug, Clone, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: Option<String>,
}

/// A client contact entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_contact: bool,
}

/// Payload for `POST email/{templateId}/enqueue`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub client_id: i64,
}

impl Client {
    /// Returns the raw value of the custom field with the given key, if set.
    pub fn attribute_value(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .and_then(|a| a.value.as_deref())
    }

    /// Parses the contract end date out of the configured custom field.
    ///
    /// `Ok(None)` means the field is absent (an expected skip); `Err` carries
    /// the malformed raw value for logging.
    pub fn contract_end_date(&self, key: &str) -> Result<Option<NaiveDate>, String> {
        match self.attribute_value(key) {
            None => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map(Some)
                .map_err(|_| raw.to_string()),
        }
    }

    /// Email address of the primary contact.
    ///
    /// When several contacts carry the `isContact` flag, the last one wins;
    /// the CRM UI keeps a single primary but the API does not enforce it.
    pub fn primary_email(&self) -> Option<&str> {
        self.contacts
            .iter()
            .rev()
            .find(|c| c.is_contact)
            .and_then(|c| c.email.as_deref())
            .filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(attributes: Vec<Attribute>, contacts: Vec<Contact>) -> Client {
        Client {
            id: 1,
            attributes,
            contacts,
        }
    }

    #[test]
    fn test_contract_end_date_present() {
        let client = client_with(
            vec![Attribute {
                key: "nextContractSign".to_string(),
                value: Some("2024-01-01".to_string()),
            }],
            vec![],
        );
        let date = client.contract_end_date("nextContractSign").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn test_contract_end_date_missing_key() {
        let client = client_with(
            vec![Attribute {
                key: "somethingElse".to_string(),
                value: Some("2024-01-01".to_string()),
            }],
            vec![],
        );
        assert_eq!(client.contract_end_date("nextContractSign"), Ok(None));
    }

    #[test]
    fn test_contract_end_date_malformed_value() {
        let client = client_with(
            vec![Attribute {
                key: "nextContractSign".to_string(),
                value: Some("01/02/2024".to_string()),
            }],
            vec![],
        );
        let err = client.contract_end_date("nextContractSign").unwrap_err();
        assert_eq!(err, "01/02/2024");
    }

    #[test]
    fn test_primary_email_last_flagged_contact_wins() {
        let client = client_with(
            vec![],
            vec![
                Contact {
                    email: Some("first@example.com".to_string()),
                    is_contact: true,
                },
                Contact {
                    email: Some("billing@example.com".to_string()),
                    is_contact: false,
                },
                Contact {
                    email: Some("second@example.com".to_string()),
                    is_contact: true,
                },
            ],
        );
        assert_eq!(client.primary_email(), Some("second@example.com"));
    }

    #[test]
    fn test_primary_email_none_flagged() {
        let client = client_with(
            vec![],
            vec![Contact {
                email: Some("billing@example.com".to_string()),
                is_contact: false,
            }],
        );
        assert_eq!(client.primary_email(), None);
    }

    #[test]
    fn test_client_deserializes_with_unknown_fields() {
        let json = serde_json::json!({
            "id": 42,
            "firstName": "Ion",
            "attributes": [
                {"key": "cnp", "value": "2990101123456", "attributeId": 7}
            ],
            "contacts": [
                {"email": "ion@example.com", "isContact": true, "phone": null}
            ],
            "organizationId": 1
        });
        let client: Client = serde_json::from_value(json).unwrap();
        assert_eq!(client.id, 42);
        assert_eq!(client.attribute_value("cnp"), Some("2990101123456"));
        assert_eq!(client.primary_email(), Some("ion@example.com"));
    }
}
