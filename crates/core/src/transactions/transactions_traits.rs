use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction};
use crate::errors::Result;

/// Trait defining the contract for transaction repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Records a new transaction and returns the created row.
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Lists the current user's transaction history.
    ///
    /// Without an authenticated user the history is empty, never an error.
    async fn list_transactions(&self) -> Result<Vec<Transaction>>;
}
