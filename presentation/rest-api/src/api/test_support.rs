use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use poem::{EndpointExt, Route, endpoint::BoxEndpoint, test::TestClient};
use poem_openapi::OpenApiService;
use url::Url;

use business::domain::errors::RepositoryError;
use business::domain::item::filter::ItemFilter;
use business::domain::item::model::{Item, ItemDraft};
use business::domain::item::repository::ItemRepository;
use business::domain::logger::Logger;
use business::domain::wishlist::filter::WishlistFilter;
use business::domain::wishlist::model::{Wishlist, WishlistDraft};
use business::domain::wishlist::repository::WishlistRepository;

use crate::api::error::with_json_errors;
use crate::api::security::ApiKeyGuard;
use crate::setup::dependency_injection::build_resource_apis;

pub const BASE_URL: &str = "http://wishlists.test";
pub const API_KEY: &str = "test-key";

pub type ApiClient = TestClient<BoxEndpoint<'static>>;

struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

#[derive(Default)]
struct State {
    next_id: i64,
    wishlists: Vec<Wishlist>,
    items: Vec<Item>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn with_items(&self, wishlist: &Wishlist) -> Wishlist {
        let mut wishlist = wishlist.clone();
        wishlist.items = self
            .items
            .iter()
            .filter(|item| item.wishlist_id == wishlist.id)
            .cloned()
            .collect();
        wishlist
    }
}

/// Keeps wishlists and items in memory with the same constraints as the
/// database schema: unique names per customer, unique products per wishlist
/// and cascading deletes.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl WishlistRepository for InMemoryStore {
    async fn find(&self, filter: &WishlistFilter) -> Result<Vec<Wishlist>, RepositoryError> {
        let state = self.lock();
        Ok(state
            .wishlists
            .iter()
            .filter(|w| filter.matches(w))
            .map(|w| state.with_items(w))
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Wishlist, RepositoryError> {
        let state = self.lock();
        state
            .wishlists
            .iter()
            .find(|w| w.id == id)
            .map(|w| state.with_items(w))
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, draft: &WishlistDraft) -> Result<Wishlist, RepositoryError> {
        let mut state = self.lock();
        if state
            .wishlists
            .iter()
            .any(|w| w.customer_id == draft.customer_id && w.name == draft.name)
        {
            return Err(RepositoryError::Duplicated);
        }
        let now = Utc::now();
        let wishlist = Wishlist::from_repository(
            state.next_id(),
            draft.customer_id.clone(),
            draft.name.clone(),
            draft.description.clone(),
            vec![],
            now,
            now,
        );
        state.wishlists.push(wishlist.clone());
        Ok(wishlist)
    }

    async fn update(&self, wishlist: &Wishlist) -> Result<Wishlist, RepositoryError> {
        let mut state = self.lock();
        if state.wishlists.iter().any(|w| {
            w.id != wishlist.id && w.customer_id == wishlist.customer_id && w.name == wishlist.name
        }) {
            return Err(RepositoryError::Duplicated);
        }
        let stored = state
            .wishlists
            .iter_mut()
            .find(|w| w.id == wishlist.id)
            .ok_or(RepositoryError::NotFound)?;
        stored.name = wishlist.name.clone();
        stored.description = wishlist.description.clone();
        stored.updated_at = wishlist.updated_at;
        let stored = stored.clone();
        Ok(state.with_items(&stored))
    }

    async fn delete(&self, id: i64) -> Result<u64, RepositoryError> {
        let mut state = self.lock();
        let before = state.wishlists.len();
        state.wishlists.retain(|w| w.id != id);
        state.items.retain(|item| item.wishlist_id != id);
        Ok((before - state.wishlists.len()) as u64)
    }

    async fn clear_items(&self, id: i64) -> Result<u64, RepositoryError> {
        let mut state = self.lock();
        if !state.wishlists.iter().any(|w| w.id == id) {
            return Err(RepositoryError::NotFound);
        }
        let before = state.items.len();
        state.items.retain(|item| item.wishlist_id != id);
        Ok((before - state.items.len()) as u64)
    }
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    async fn find(
        &self,
        wishlist_id: i64,
        filter: &ItemFilter,
    ) -> Result<Vec<Item>, RepositoryError> {
        Ok(self
            .lock()
            .items
            .iter()
            .filter(|item| item.wishlist_id == wishlist_id && filter.matches(item))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, wishlist_id: i64, id: i64) -> Result<Item, RepositoryError> {
        self.lock()
            .items
            .iter()
            .find(|item| item.wishlist_id == wishlist_id && item.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_product_id(
        &self,
        wishlist_id: i64,
        product_id: i64,
    ) -> Result<Option<Item>, RepositoryError> {
        Ok(self
            .lock()
            .items
            .iter()
            .find(|item| item.wishlist_id == wishlist_id && item.product_id == product_id)
            .cloned())
    }

    async fn insert(&self, draft: &ItemDraft) -> Result<Item, RepositoryError> {
        let mut state = self.lock();
        if !state.wishlists.iter().any(|w| w.id == draft.wishlist_id) {
            return Err(RepositoryError::NotFound);
        }
        if state
            .items
            .iter()
            .any(|i| i.wishlist_id == draft.wishlist_id && i.product_id == draft.product_id)
        {
            return Err(RepositoryError::Duplicated);
        }
        let now = Utc::now();
        let item = Item::from_repository(
            state.next_id(),
            draft.wishlist_id,
            draft.customer_id.clone(),
            draft.product_id,
            draft.product_name.clone(),
            draft.price.clone(),
            draft.wish_date,
            now,
            now,
        );
        state.items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, item: &Item) -> Result<Item, RepositoryError> {
        let mut state = self.lock();
        if state.items.iter().any(|i| {
            i.id != item.id && i.wishlist_id == item.wishlist_id && i.product_id == item.product_id
        }) {
            return Err(RepositoryError::Duplicated);
        }
        let stored = state
            .items
            .iter_mut()
            .find(|i| i.id == item.id && i.wishlist_id == item.wishlist_id)
            .ok_or(RepositoryError::NotFound)?;
        *stored = item.clone();
        Ok(stored.clone())
    }

    async fn delete(&self, wishlist_id: i64, id: i64) -> Result<u64, RepositoryError> {
        let mut state = self.lock();
        let before = state.items.len();
        state
            .items
            .retain(|item| !(item.wishlist_id == wishlist_id && item.id == id));
        Ok((before - state.items.len()) as u64)
    }
}

/// HTTP client over the wishlist and item APIs backed by an in-memory store.
pub fn test_client(api_key: Option<&str>) -> ApiClient {
    let store = InMemoryStore::default();
    let (wishlist_api, item_api) = build_resource_apis(
        Arc::new(store.clone()),
        Arc::new(store),
        Arc::new(SilentLogger),
        ApiKeyGuard::new(api_key.map(str::to_string)),
        Url::parse(BASE_URL).unwrap(),
    );

    let service = OpenApiService::new((wishlist_api, item_api), "Wishlist Service", "test");
    TestClient::new(with_json_errors(Route::new().nest("/", service)).boxed())
}
