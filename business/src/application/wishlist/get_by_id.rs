use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get_by_id::{
    GetWishlistByIdParams, GetWishlistByIdUseCase,
};

pub struct GetWishlistByIdUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistByIdUseCase for GetWishlistByIdUseCaseImpl {
    async fn execute(&self, params: GetWishlistByIdParams) -> Result<Wishlist, WishlistError> {
        self.logger
            .info(&format!("Fetching wishlist by id: {}", params.id));

        let wishlist = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(WishlistError::from_lookup)?;

        Ok(wishlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockWishlistRepo, mock_logger, stored_wishlist};
    use crate::domain::errors::RepositoryError;

    #[tokio::test]
    async fn should_return_wishlist_when_found() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| *id == 3)
            .returning(|id| Ok(stored_wishlist(id, "CUST001", "Gifts")));

        let use_case = GetWishlistByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let wishlist = use_case
            .execute(GetWishlistByIdParams { id: 3 })
            .await
            .unwrap();

        assert_eq!(wishlist.id, 3);
        assert_eq!(wishlist.name, "Gifts");
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetWishlistByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetWishlistByIdParams { id: 0 }).await;

        assert!(matches!(result.unwrap_err(), WishlistError::NotFound));
    }

    #[tokio::test]
    async fn should_surface_database_failures() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetWishlistByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetWishlistByIdParams { id: 1 }).await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
