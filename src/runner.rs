//! Batch orchestration: list clients, fetch each record, evaluate the
//! notification rules and enqueue emails, one client at a time in list order.

use chrono::{Local, NaiveDate};

use crate::config::Config;
use crate::crm_client::UcrmClient;
use crate::eligibility::{evaluate, Decision};
use crate::errors::ApiError;
use crate::national_id::NationalId;
use crate::notifications::Notifier;

/// Separator written between per-client log blocks.
const SEPARATOR: &str = "--- --- --- --- --- --- --- --- --- ---";

/// Totals for one batch run, logged at the end and returned to the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Clients whose record was fetched and evaluated.
    pub processed: usize,
    /// Emails accepted into the CRM's outbound queue.
    pub dispatched: usize,
    /// Decisions dropped because the client has no primary contact email.
    pub skipped: usize,
    /// Clients that could not be fetched plus emails that failed to enqueue.
    pub failed: usize,
}

pub struct Runner {
    client: UcrmClient,
    config: Config,
}

impl Runner {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let client = UcrmClient::new(config.api_url.clone(), config.app_key.clone())?;
        Ok(Self { client, config })
    }

    /// Runs the batch against today's local date.
    pub async fn run(&self) -> Result<RunSummary, ApiError> {
        self.run_for_date(Local::now().date_naive()).await
    }

    /// Runs the batch for an explicit date. Fails only when the client list
    /// itself cannot be fetched; everything past that point is guarded per
    /// client so one bad record cannot abort the run.
    pub async fn run_for_date(&self, today: NaiveDate) -> Result<RunSummary, ApiError> {
        tracing::info!("Batch run started for {}", today);

        let clients = self.client.list_clients().await?;
        tracing::info!("Fetched {} clients", clients.len());
        tracing::info!("{}", SEPARATOR);

        let notifier = Notifier::new(&self.client, self.config.email_template_id);
        let mut summary = RunSummary::default();

        for client_ref in &clients {
            self.process_client(&notifier, client_ref.id, today, &mut summary)
                .await;
            tracing::info!("{}", SEPARATOR);
        }

        tracing::info!(
            "Batch run finished: {} processed, {} dispatched, {} skipped, {} failed",
            summary.processed,
            summary.dispatched,
            summary.skipped,
            summary.failed
        );
        Ok(summary)
    }

    async fn process_client(
        &self,
        notifier: &Notifier<'_>,
        id: i64,
        today: NaiveDate,
        summary: &mut RunSummary,
    ) {
        let client = match self.client.get_client(id).await {
            Ok(client) => client,
            Err(e) => {
                tracing::error!("Failed to fetch client {}: {}", id, e);
                summary.failed += 1;
                return;
            }
        };
        summary.processed += 1;

        let contract_end = match client.contract_end_date(&self.config.contract_date_attribute) {
            Ok(Some(date)) => Some(date),
            Ok(None) => {
                tracing::info!("Client {} has no contract end date", id);
                None
            }
            Err(raw) => {
                tracing::warn!("Client {} has an unparseable contract end date: {}", id, raw);
                None
            }
        };

        let national_id = client
            .attribute_value(&self.config.national_id_attribute)
            .and_then(|raw| match NationalId::parse(raw) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::info!("Client {} has an invalid national ID: {}", id, e);
                    None
                }
            });

        let decisions = evaluate(contract_end, national_id.as_ref(), today);
        if decisions.is_empty() {
            return;
        }

        let email = match client.primary_email() {
            Some(email) => email.to_string(),
            None => {
                // A client can match rules yet have no primary contact;
                // skip rather than enqueue to an empty address.
                tracing::info!(
                    "Client {} matched {} rule(s) but has no primary contact email, skipping",
                    id,
                    decisions.len()
                );
                summary.skipped += decisions.len();
                return;
            }
        };

        for decision in &decisions {
            match notifier.dispatch(id, &email, decision).await {
                Ok(()) => {
                    tracing::info!(
                        "Email sent ({}) to {} for client {}",
                        describe(decision),
                        email,
                        id
                    );
                    summary.dispatched += 1;
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to enqueue {} email for client {}: {}",
                        describe(decision),
                        id,
                        e
                    );
                    summary.failed += 1;
                }
            }
        }
    }
}

fn describe(decision: &Decision) -> &'static str {
    match decision {
        Decision::ContractExpired(_) => "contract expired",
        Decision::ContractExpiringSoon(_) => "contract is about to expire",
        Decision::Birthday => "birthday",
        Decision::WomensDay => "women's day",
    }
}
