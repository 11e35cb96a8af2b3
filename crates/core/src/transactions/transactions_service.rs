use std::sync::Arc;

use log::{debug, info};

use super::transactions_model::{NewTransaction, Transaction};
use super::transactions_traits::TransactionRepositoryTrait;
use crate::errors::Result;
use crate::limits::SubmissionLimiter;

/// Submission and history flow for recorded transactions.
///
/// Wraps the repository with the per-session submission limit. A limit
/// slot is consumed per attempt, before the input is validated, so
/// rejected input still counts against the window.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    limiter: SubmissionLimiter,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>, limiter: SubmissionLimiter) -> Self {
        Self { repository, limiter }
    }

    /// Submits an already validated transaction.
    pub async fn submit(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        self.limiter.try_acquire()?;

        let transaction = self.repository.create_transaction(new_transaction).await?;
        info!(
            "Transaction {} recorded ({})",
            transaction.id,
            transaction.direction.as_str()
        );
        Ok(transaction)
    }

    /// Form entry point: limit check, then raw-field validation, then
    /// submission.
    pub async fn submit_input(
        &self,
        lbp_amount: &str,
        usd_amount: &str,
        direction: &str,
    ) -> Result<Transaction> {
        self.limiter.try_acquire()?;

        let new_transaction = NewTransaction::from_input(lbp_amount, usd_amount, direction)?;
        let transaction = self.repository.create_transaction(new_transaction).await?;
        info!(
            "Transaction {} recorded ({})",
            transaction.id,
            transaction.direction.as_str()
        );
        Ok(transaction)
    }

    /// Fetches the user's transaction history.
    pub async fn list(&self) -> Result<Vec<Transaction>> {
        let transactions = self.repository.list_transactions().await?;
        debug!("Fetched {} transactions", transactions.len());
        Ok(transactions)
    }

    /// Submission slots left in the current window.
    pub fn remaining_submissions(&self) -> u32 {
        self.limiter.remaining()
    }
}
