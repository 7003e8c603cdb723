//! Renders notification emails for a decision and submits them to the CRM's
//! outbound queue. Subject and body texts are Romanian, matching the audience
//! of the deployment.

use crate::crm_client::UcrmClient;
use crate::eligibility::Decision;
use crate::errors::ApiError;
use crate::models::EmailRequest;

/// Date format used in email bodies.
const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct Notifier<'a> {
    client: &'a UcrmClient,
    template_id: u32,
}

impl<'a> Notifier<'a> {
    pub fn new(client: &'a UcrmClient, template_id: u32) -> Self {
        Self {
            client,
            template_id,
        }
    }

    /// Subject/body pair for a decision.
    pub fn render(decision: &Decision) -> (String, String) {
        match decision {
            Decision::ContractExpired(date) => (
                "Contractul dumneavoastra a expirat!".to_string(),
                format!(
                    "Contractul dumneavoastra a expirat pe data de {}. \
                     Va rugam sa il resemnati cat mai repede posibil.",
                    date.format(DATE_FORMAT)
                ),
            ),
            Decision::ContractExpiringSoon(date) => (
                "Contractul dumneavoastra va expira in curand!".to_string(),
                format!(
                    "Contractul dumneavoastra va expira pe data de {}! \
                     Va rugam sa il resemnati cat mai repede posibil.",
                    date.format(DATE_FORMAT)
                ),
            ),
            Decision::Birthday => (
                "La multi ani!".to_string(),
                "Va dorim un sincer La multi ani! Toate cele bune din partea echipei noastre."
                    .to_string(),
            ),
            Decision::WomensDay => (
                "La multi ani de 8 Martie!".to_string(),
                "Va dorim o zi de 8 Martie minunata! Toate cele bune din partea echipei noastre."
                    .to_string(),
            ),
        }
    }

    /// Enqueues one email for the decision. The caller logs failures and
    /// keeps going; a failed enqueue never affects other clients.
    pub async fn dispatch(
        &self,
        client_id: i64,
        email: &str,
        decision: &Decision,
    ) -> Result<(), ApiError> {
        let (subject, body) = Self::render(decision);
        let request = EmailRequest {
            to: email.to_string(),
            subject,
            body,
            client_id,
        };
        self.client.enqueue_email(self.template_id, &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_expired_body_contains_formatted_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let (subject, body) = Notifier::render(&Decision::ContractExpired(date));
        assert_eq!(subject, "Contractul dumneavoastra a expirat!");
        assert!(body.contains("2024-01-01"));
        assert!(body.contains("a expirat"));
    }

    #[test]
    fn test_expiring_soon_body_contains_formatted_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let (subject, body) = Notifier::render(&Decision::ContractExpiringSoon(date));
        assert_eq!(subject, "Contractul dumneavoastra va expira in curand!");
        assert!(body.contains("2024-03-02"));
        assert!(body.contains("va expira"));
    }

    #[test]
    fn test_birthday_and_womens_day_subjects_differ() {
        let (birthday, _) = Notifier::render(&Decision::Birthday);
        let (womens_day, _) = Notifier::render(&Decision::WomensDay);
        assert_ne!(birthday, womens_day);
        assert!(womens_day.contains("8 Martie"));
    }
}
