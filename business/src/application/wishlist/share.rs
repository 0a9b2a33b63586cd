use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::share::{
    ShareLink, ShareWishlistParams, ShareWishlistUseCase,
};

pub struct ShareWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    /// Public root of the service, e.g. `https://wishlists.example.com/`.
    pub base_url: Url,
    pub logger: Arc<dyn Logger>,
}

impl ShareWishlistUseCaseImpl {
    fn link_for(&self, id: i64) -> Result<Url, WishlistError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| WishlistError::ShareLinkInvalid)?
            .pop_if_empty()
            .extend(["wishlists", id.to_string().as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl ShareWishlistUseCase for ShareWishlistUseCaseImpl {
    async fn execute(&self, params: ShareWishlistParams) -> Result<ShareLink, WishlistError> {
        self.logger
            .info(&format!("Sharing wishlist: {}", params.id));

        let wishlist = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(WishlistError::from_lookup)?;

        let url = self.link_for(wishlist.id)?;

        self.logger
            .info(&format!("Wishlist {} shared as {}", wishlist.id, url));
        Ok(ShareLink {
            wishlist_id: wishlist.id,
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockWishlistRepo, mock_logger, stored_wishlist};
    use crate::domain::errors::RepositoryError;

    fn use_case(mock_repo: MockWishlistRepo, base: &str) -> ShareWishlistUseCaseImpl {
        ShareWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            base_url: Url::parse(base).unwrap(),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_derive_url_from_wishlist_id() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_wishlist(id, "CUST001", "Gifts")));

        let link = use_case(mock_repo, "http://localhost:8080")
            .execute(ShareWishlistParams { id: 12 })
            .await
            .unwrap();

        assert_eq!(link.wishlist_id, 12);
        assert_eq!(link.url.as_str(), "http://localhost:8080/wishlists/12");
    }

    #[tokio::test]
    async fn should_keep_base_path_prefix() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_wishlist(id, "CUST001", "Gifts")));

        let link = use_case(mock_repo, "https://shop.example.com/api/")
            .execute(ShareWishlistParams { id: 3 })
            .await
            .unwrap();

        assert_eq!(
            link.url.as_str(),
            "https://shop.example.com/api/wishlists/3"
        );
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_wishlist() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = use_case(mock_repo, "http://localhost:8080")
            .execute(ShareWishlistParams { id: 3 })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::NotFound));
    }
}
