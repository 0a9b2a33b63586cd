use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CustomerId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::{Wishlist, WishlistDraft};
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::create::{CreateWishlistParams, CreateWishlistUseCase};

pub struct CreateWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateWishlistUseCase for CreateWishlistUseCaseImpl {
    async fn execute(&self, params: CreateWishlistParams) -> Result<Wishlist, WishlistError> {
        self.logger.info(&format!(
            "Creating wishlist '{}' for customer {}",
            params.name, params.customer_id
        ));

        let draft = WishlistDraft::new(
            CustomerId::new(params.customer_id),
            params.name,
            params.description,
        )?;

        let wishlist = self
            .repository
            .insert(&draft)
            .await
            .map_err(WishlistError::from_write)?;

        self.logger
            .info(&format!("Wishlist with id [{}] created", wishlist.id));
        Ok(wishlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockWishlistRepo, mock_logger};
    use crate::domain::errors::RepositoryError;
    use chrono::Utc;

    fn params(customer_id: &str, name: &str) -> CreateWishlistParams {
        CreateWishlistParams {
            customer_id: customer_id.to_string(),
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn should_create_wishlist_with_generated_id() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo.expect_insert().returning(|draft| {
            Ok(Wishlist::from_repository(
                42,
                draft.customer_id.clone(),
                draft.name.clone(),
                draft.description.clone(),
                vec![],
                Utc::now(),
                Utc::now(),
            ))
        });

        let use_case = CreateWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let wishlist = use_case
            .execute(params("CUST001", "Holiday Gifts"))
            .await
            .unwrap();

        assert_eq!(wishlist.id, 42);
        assert_eq!(wishlist.customer_id.as_str(), "CUST001");
        assert_eq!(wishlist.name, "Holiday Gifts");
        assert!(wishlist.description.is_none());
        assert!(wishlist.items.is_empty());
    }

    #[tokio::test]
    async fn should_reject_missing_customer_without_touching_repository() {
        let use_case = CreateWishlistUseCaseImpl {
            repository: Arc::new(MockWishlistRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("", "Holiday Gifts")).await;

        assert!(matches!(result.unwrap_err(), WishlistError::CustomerIdEmpty));
    }

    #[tokio::test]
    async fn should_reject_empty_name() {
        let use_case = CreateWishlistUseCaseImpl {
            repository: Arc::new(MockWishlistRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("CUST001", " ")).await;

        assert!(matches!(result.unwrap_err(), WishlistError::NameEmpty));
    }

    #[tokio::test]
    async fn should_report_duplicate_name_for_same_customer() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("CUST001", "Holiday Gifts")).await;

        assert!(matches!(result.unwrap_err(), WishlistError::AlreadyExists));
    }
}
