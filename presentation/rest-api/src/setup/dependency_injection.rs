use std::sync::Arc;

use sqlx::PgPool;
use url::Url;

use logger::TracingLogger;
use persistence::item::repository::ItemRepositoryPostgres;
use persistence::wishlist::repository::WishlistRepositoryPostgres;

use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_all::GetAllItemsUseCaseImpl;
use business::application::item::get_by_id::GetItemByIdUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;
use business::application::wishlist::clear::ClearWishlistUseCaseImpl;
use business::application::wishlist::create::CreateWishlistUseCaseImpl;
use business::application::wishlist::delete::DeleteWishlistUseCaseImpl;
use business::application::wishlist::get_all::GetAllWishlistsUseCaseImpl;
use business::application::wishlist::get_by_id::GetWishlistByIdUseCaseImpl;
use business::application::wishlist::share::ShareWishlistUseCaseImpl;
use business::application::wishlist::update::UpdateWishlistUseCaseImpl;
use business::domain::item::repository::ItemRepository;
use business::domain::logger::Logger;
use business::domain::wishlist::repository::WishlistRepository;

use crate::api::health::routes::HealthApi;
use crate::api::index::routes::IndexApi;
use crate::api::item::routes::ItemApi;
use crate::api::security::ApiKeyGuard;
use crate::api::wishlist::routes::WishlistApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub index_api: IndexApi,
    pub health_api: HealthApi,
    pub wishlist_api: WishlistApi,
    pub item_api: ItemApi,
}

impl DependencyContainer {
    pub fn new(pool: PgPool, config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let wishlist_repository = Arc::new(WishlistRepositoryPostgres::new(pool.clone()));
        let item_repository = Arc::new(ItemRepositoryPostgres::new(pool.clone()));

        let (wishlist_api, item_api) = build_resource_apis(
            wishlist_repository,
            item_repository,
            logger,
            ApiKeyGuard::new(config.security.api_key.clone()),
            config.public_base_url.clone(),
        );

        Self {
            index_api: IndexApi::new(config.public_base_url.clone()),
            health_api: HealthApi::new(pool),
            wishlist_api,
            item_api,
        }
    }
}

/// Wires the wishlist and item use cases around the given repositories.
pub fn build_resource_apis(
    wishlist_repository: Arc<dyn WishlistRepository>,
    item_repository: Arc<dyn ItemRepository>,
    logger: Arc<dyn Logger>,
    guard: ApiKeyGuard,
    base_url: Url,
) -> (WishlistApi, ItemApi) {
    // Wishlist use cases
    let create_wishlist_use_case = Arc::new(CreateWishlistUseCaseImpl {
        repository: wishlist_repository.clone(),
        logger: logger.clone(),
    });
    let get_all_wishlists_use_case = Arc::new(GetAllWishlistsUseCaseImpl {
        repository: wishlist_repository.clone(),
        logger: logger.clone(),
    });
    let get_wishlist_by_id_use_case = Arc::new(GetWishlistByIdUseCaseImpl {
        repository: wishlist_repository.clone(),
        logger: logger.clone(),
    });
    let update_wishlist_use_case = Arc::new(UpdateWishlistUseCaseImpl {
        repository: wishlist_repository.clone(),
        logger: logger.clone(),
    });
    let delete_wishlist_use_case = Arc::new(DeleteWishlistUseCaseImpl {
        repository: wishlist_repository.clone(),
        logger: logger.clone(),
    });
    let clear_wishlist_use_case = Arc::new(ClearWishlistUseCaseImpl {
        repository: wishlist_repository.clone(),
        logger: logger.clone(),
    });
    let share_wishlist_use_case = Arc::new(ShareWishlistUseCaseImpl {
        repository: wishlist_repository.clone(),
        base_url: base_url.clone(),
        logger: logger.clone(),
    });

    // Item use cases
    let create_item_use_case = Arc::new(CreateItemUseCaseImpl {
        wishlist_repository: wishlist_repository.clone(),
        repository: item_repository.clone(),
        logger: logger.clone(),
    });
    let get_all_items_use_case = Arc::new(GetAllItemsUseCaseImpl {
        wishlist_repository: wishlist_repository.clone(),
        repository: item_repository.clone(),
        logger: logger.clone(),
    });
    let get_item_by_id_use_case = Arc::new(GetItemByIdUseCaseImpl {
        wishlist_repository: wishlist_repository.clone(),
        repository: item_repository.clone(),
        logger: logger.clone(),
    });
    let update_item_use_case = Arc::new(UpdateItemUseCaseImpl {
        wishlist_repository,
        repository: item_repository.clone(),
        logger: logger.clone(),
    });
    let delete_item_use_case = Arc::new(DeleteItemUseCaseImpl {
        repository: item_repository,
        logger,
    });

    let wishlist_api = WishlistApi::new(
        create_wishlist_use_case,
        get_all_wishlists_use_case,
        get_wishlist_by_id_use_case,
        update_wishlist_use_case,
        delete_wishlist_use_case,
        clear_wishlist_use_case,
        share_wishlist_use_case,
        guard,
        base_url.clone(),
    );

    let item_api = ItemApi::new(
        create_item_use_case,
        get_all_items_use_case,
        get_item_by_id_use_case,
        update_item_use_case,
        delete_item_use_case,
        base_url,
    );

    (wishlist_api, item_api)
}
