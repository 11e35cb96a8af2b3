#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result, ValidationError};
    use crate::limits::{LimitError, SubmissionLimitConfig, SubmissionLimiter};
    use crate::rates::Direction;
    use crate::transactions::{
        NewTransaction, Transaction, TransactionRepositoryTrait, TransactionService,
    };
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    // --- Mock transaction repository ---
    struct MockTransactionRepository {
        created: Mutex<Vec<Transaction>>,
        next_id: Mutex<i64>,
    }

    impl MockTransactionRepository {
        fn new() -> Self {
            Self {
                created: Mutex::new(Vec::new()),
                next_id: Mutex::new(1),
            }
        }

        fn created_count(&self) -> usize {
            self.created.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TransactionRepositoryTrait for MockTransactionRepository {
        async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
            let mut next_id = self.next_id.lock().unwrap();
            let transaction = Transaction {
                id: *next_id,
                usd_amount: new_transaction.usd_amount,
                lbp_amount: new_transaction.lbp_amount,
                direction: new_transaction.direction,
                transaction_time: None,
            };
            *next_id += 1;
            self.created.lock().unwrap().push(transaction.clone());
            Ok(transaction)
        }

        async fn list_transactions(&self) -> Result<Vec<Transaction>> {
            Ok(self.created.lock().unwrap().clone())
        }
    }

    fn service_with_limit(max_submissions: u32) -> (TransactionService, Arc<MockTransactionRepository>) {
        let repository = Arc::new(MockTransactionRepository::new());
        let limiter = SubmissionLimiter::with_config(SubmissionLimitConfig {
            max_submissions,
            window: Duration::from_secs(60),
        });
        (
            TransactionService::new(repository.clone(), limiter),
            repository,
        )
    }

    #[tokio::test]
    async fn test_submit_input_creates_the_transaction() {
        let (service, repository) = service_with_limit(10);

        let transaction = service
            .submit_input("90000", "1", "usd-to-lbp")
            .await
            .unwrap();

        assert_eq!(transaction.id, 1);
        assert_eq!(transaction.lbp_amount, dec!(90000));
        assert_eq!(transaction.direction, Direction::UsdToLbp);
        assert_eq!(repository.created_count(), 1);
    }

    #[tokio::test]
    async fn test_submit_input_rejects_invalid_amounts_without_creating() {
        let (service, repository) = service_with_limit(10);

        let err = service
            .submit_input("abc", "1", "usd-to-lbp")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DecimalParse(_))
        ));

        let err = service
            .submit_input("90000", "0", "lbp-to-usd")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NonPositiveAmount { .. })
        ));

        assert_eq!(repository.created_count(), 0);
    }

    #[tokio::test]
    async fn test_limit_applies_before_validation() {
        let (service, repository) = service_with_limit(2);

        // Two invalid attempts still consume both slots.
        for _ in 0..2 {
            assert!(service.submit_input("abc", "1", "usd-to-lbp").await.is_err());
        }

        let err = service
            .submit_input("90000", "1", "usd-to-lbp")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Limit(LimitError::LimitReached { max: 2, .. })
        ));
        assert_eq!(repository.created_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_over_the_limit_is_rejected() {
        let (service, repository) = service_with_limit(3);

        for _ in 0..3 {
            let new = NewTransaction::new(dec!(1), dec!(90000), Direction::UsdToLbp).unwrap();
            service.submit(new).await.unwrap();
        }

        let new = NewTransaction::new(dec!(1), dec!(90000), Direction::UsdToLbp).unwrap();
        assert!(matches!(
            service.submit(new).await.unwrap_err(),
            Error::Limit(LimitError::LimitReached { .. })
        ));
        assert_eq!(repository.created_count(), 3);
    }

    #[tokio::test]
    async fn test_list_returns_the_repository_history() {
        let (service, _repository) = service_with_limit(10);

        assert!(service.list().await.unwrap().is_empty());

        service
            .submit_input("178000", "2", "usd-to-lbp")
            .await
            .unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].usd_amount, dec!(2));
    }

    #[tokio::test]
    async fn test_remaining_submissions_reflects_attempts() {
        let (service, _repository) = service_with_limit(5);
        assert_eq!(service.remaining_submissions(), 5);

        service
            .submit_input("90000", "1", "usd-to-lbp")
            .await
            .unwrap();
        let _ = service.submit_input("abc", "1", "usd-to-lbp").await;

        assert_eq!(service.remaining_submissions(), 3);
    }
}
