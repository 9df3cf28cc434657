use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use super::client::{
    IntegrationError, LodgementState, PayrollIntegrationClient, StpPayEvent, StpReceipt,
    StpReceiptStatus, SuperConfirmation, SuperContribution, SuperSubmission, XeroEmployee,
    XeroPayrun,
};

/// Super submissions remembered for confirmation lookups.
pub const DEFAULT_LEDGER_CAPACITY: usize = 1024;

/// Most recent super submissions, oldest evicted first once full.
#[derive(Debug)]
struct SuperLedger {
    capacity: usize,
    order: VecDeque<String>,
    entries: HashMap<String, SuperSubmission>,
}

impl SuperLedger {
    fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            order: VecDeque::new(),
            entries: HashMap::new(),
        }
    }

    fn record(&mut self, submission: SuperSubmission) {
        while self.order.len() >= self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                self.entries.remove(&evicted);
            }
        }
        self.order.push_back(submission.transaction_id.clone());
        self.entries
            .insert(submission.transaction_id.clone(), submission);
    }

    fn get(&self, transaction_id: &str) -> Option<&SuperSubmission> {
        self.entries.get(transaction_id)
    }
}

/// Canned-response client that sleeps for `latency` before every answer.
///
/// Super submissions are kept in a bounded in-memory ledger so their
/// confirmation status can report what was lodged.
#[derive(Debug)]
pub struct SimulatedPayrollClient {
    latency: Duration,
    ledger: Mutex<SuperLedger>,
}

impl SimulatedPayrollClient {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            ledger: Mutex::new(SuperLedger::new(DEFAULT_LEDGER_CAPACITY)),
        }
    }

    /// Remember at most `capacity` super transactions.
    pub fn with_ledger_capacity(self, capacity: usize) -> Self {
        Self {
            ledger: Mutex::new(SuperLedger::new(capacity)),
            ..self
        }
    }

    /// Answers immediately; intended for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for SimulatedPayrollClient {
    fn default() -> Self {
        Self::new(Duration::from_millis(200))
    }
}

/// `<prefix>-<unix millis>-<random suffix>`.
fn lodgement_id(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{prefix}-{}-{}",
        Utc::now().timestamp_millis(),
        &suffix[..12]
    )
}

#[async_trait]
impl PayrollIntegrationClient for SimulatedPayrollClient {
    async fn submit_stp_event(&self, event: StpPayEvent) -> Result<StpReceipt, IntegrationError> {
        self.simulate_round_trip().await;

        let receipt = StpReceipt {
            receipt_id: lodgement_id("STP"),
            submitted_at: Utc::now(),
        };
        info!(
            receipt_id = %receipt.receipt_id,
            employer_abn = %event.employer_abn,
            payments = event.payments.len(),
            "stp pay event lodged"
        );
        Ok(receipt)
    }

    async fn stp_receipt_status(
        &self,
        receipt_id: &str,
    ) -> Result<StpReceiptStatus, IntegrationError> {
        self.simulate_round_trip().await;

        Ok(StpReceiptStatus {
            receipt_id: receipt_id.to_string(),
            status: LodgementState::Processed,
            processed_at: Utc::now(),
        })
    }

    async fn submit_super_contributions(
        &self,
        contributions: Vec<SuperContribution>,
    ) -> Result<SuperSubmission, IntegrationError> {
        self.simulate_round_trip().await;

        let submission = SuperSubmission {
            transaction_id: lodgement_id("SS"),
            contribution_count: contributions.len(),
            total_amount: contributions.iter().map(|item| item.amount).sum(),
            submitted_at: Utc::now(),
        };

        self.ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(submission.clone());

        info!(
            transaction_id = %submission.transaction_id,
            contributions = submission.contribution_count,
            total = submission.total_amount,
            "super contributions lodged"
        );
        Ok(submission)
    }

    async fn super_confirmation_status(
        &self,
        transaction_id: &str,
    ) -> Result<SuperConfirmation, IntegrationError> {
        self.simulate_round_trip().await;

        let ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        let submission = ledger
            .get(transaction_id)
            .ok_or_else(|| IntegrationError::NotFound {
                kind: "super transaction",
                id: transaction_id.to_string(),
            })?;

        Ok(SuperConfirmation {
            transaction_id: submission.transaction_id.clone(),
            status: LodgementState::Confirmed,
            contribution_count: submission.contribution_count,
            confirmed_at: Utc::now(),
        })
    }

    async fn xero_employees(&self) -> Result<Vec<XeroEmployee>, IntegrationError> {
        self.simulate_round_trip().await;
        Ok(canned_employees())
    }

    async fn xero_payruns(
        &self,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> Result<Vec<XeroPayrun>, IntegrationError> {
        self.simulate_round_trip().await;
        Ok(canned_payruns())
    }
}

fn canned_employees() -> Vec<XeroEmployee> {
    [
        ("emp-001", "Olivia", "Nguyen", "olivia.nguyen@example.com.au"),
        ("emp-002", "Jack", "Thompson", "jack.thompson@example.com.au"),
        ("emp-003", "Mia", "Patel", "mia.patel@example.com.au"),
    ]
    .into_iter()
    .map(|(id, first, last, email)| XeroEmployee {
        employee_id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        status: "ACTIVE".to_string(),
    })
    .collect()
}

fn canned_payruns() -> Vec<XeroPayrun> {
    let date = |month, day| NaiveDate::from_ymd_opt(2025, month, day).unwrap_or(NaiveDate::MIN);
    vec![
        XeroPayrun {
            payrun_id: "pr-2025-06-a".to_string(),
            period_start: date(6, 1),
            period_end: date(6, 14),
            payment_date: date(6, 16),
            total_gross: 48_250.00,
            status: "POSTED".to_string(),
        },
        XeroPayrun {
            payrun_id: "pr-2025-06-b".to_string(),
            period_start: date(6, 15),
            period_end: date(6, 28),
            payment_date: date(6, 30),
            total_gross: 47_910.50,
            status: "POSTED".to_string(),
        },
    ]
}
