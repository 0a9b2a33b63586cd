use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::update::{UpdateWishlistParams, UpdateWishlistUseCase};

pub struct UpdateWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateWishlistUseCase for UpdateWishlistUseCaseImpl {
    async fn execute(&self, params: UpdateWishlistParams) -> Result<Wishlist, WishlistError> {
        self.logger
            .info(&format!("Updating wishlist: {}", params.id));

        let mut wishlist = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(WishlistError::from_lookup)?;

        match &params.requester {
            Some(requester) if wishlist.is_owned_by(requester) => {}
            Some(requester) => {
                self.logger.warn(&format!(
                    "Customer {} tried to update wishlist {} owned by {}",
                    requester, wishlist.id, wishlist.customer_id
                ));
                return Err(WishlistError::NotOwner);
            }
            None => {
                self.logger.warn(&format!(
                    "Anonymous update of wishlist {} rejected",
                    wishlist.id
                ));
                return Err(WishlistError::NotOwner);
            }
        }

        wishlist.apply(params.patch)?;

        let updated = self
            .repository
            .update(&wishlist)
            .await
            .map_err(WishlistError::from_write)?;

        self.logger
            .info(&format!("Wishlist with id [{}] updated", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockWishlistRepo, mock_logger, stored_wishlist};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::CustomerId;
    use crate::domain::wishlist::model::WishlistPatch;

    fn repo_with_existing() -> MockWishlistRepo {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            let mut wishlist = stored_wishlist(id, "CUST001", "Holiday Gifts");
            wishlist.description = Some("Presents".to_string());
            Ok(wishlist)
        });
        mock_repo
    }

    #[tokio::test]
    async fn should_merge_only_provided_fields() {
        let mut mock_repo = repo_with_existing();
        mock_repo
            .expect_update()
            .withf(|w| w.name == "Birthday" && w.description.as_deref() == Some("Presents"))
            .returning(|w| Ok(w.clone()));

        let use_case = UpdateWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateWishlistParams {
                id: 1,
                patch: WishlistPatch {
                    name: Some("Birthday".to_string()),
                    description: None,
                },
                requester: Some(CustomerId::new("CUST001")),
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Birthday");
        assert_eq!(updated.customer_id.as_str(), "CUST001");
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let use_case = UpdateWishlistUseCaseImpl {
            repository: Arc::new(repo_with_existing()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateWishlistParams {
                id: 1,
                patch: WishlistPatch {
                    name: Some("".to_string()),
                    description: None,
                },
                requester: Some(CustomerId::new("CUST001")),
            })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::NameEmpty));
    }

    #[tokio::test]
    async fn should_return_not_found_when_wishlist_missing() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateWishlistParams {
                id: 99,
                patch: WishlistPatch::default(),
                requester: Some(CustomerId::new("CUST001")),
            })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::NotFound));
    }

    #[tokio::test]
    async fn should_forbid_update_by_other_customer() {
        let use_case = UpdateWishlistUseCaseImpl {
            repository: Arc::new(repo_with_existing()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateWishlistParams {
                id: 1,
                patch: WishlistPatch {
                    name: Some("Mine now".to_string()),
                    description: None,
                },
                requester: Some(CustomerId::new("CUST999")),
            })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::NotOwner));
    }

    #[tokio::test]
    async fn should_allow_update_by_owner() {
        let mut mock_repo = repo_with_existing();
        mock_repo.expect_update().returning(|w| Ok(w.clone()));

        let use_case = UpdateWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateWishlistParams {
                id: 1,
                patch: WishlistPatch {
                    name: None,
                    description: Some(None),
                },
                requester: Some(CustomerId::new("CUST001")),
            })
            .await
            .unwrap();

        assert!(updated.description.is_none());
    }

    #[tokio::test]
    async fn should_forbid_update_without_requester() {
        let use_case = UpdateWishlistUseCaseImpl {
            repository: Arc::new(repo_with_existing()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateWishlistParams {
                id: 1,
                patch: WishlistPatch {
                    name: Some("Hijacked".to_string()),
                    description: None,
                },
                requester: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::NotOwner));
    }

    #[tokio::test]
    async fn should_reject_rename_onto_existing_name() {
        let mut mock_repo = repo_with_existing();
        mock_repo
            .expect_update()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = UpdateWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateWishlistParams {
                id: 1,
                patch: WishlistPatch {
                    name: Some("Camping".to_string()),
                    description: None,
                },
                requester: Some(CustomerId::new("CUST001")),
            })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::AlreadyExists));
    }
}
