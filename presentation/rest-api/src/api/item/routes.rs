use std::sync::Arc;

use poem::Request;
use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};
use url::Url;

use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{CreateItemRequest, ItemResponse, UpdateItemRequest};
use crate::api::links::item_url;
use crate::api::query::raw_query_pairs;
use crate::api::tags::ApiTags;

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
    base_url: Url,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
        base_url: Url,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            base_url,
        }
    }
}

/// Wishlist item API
///
/// Endpoints for the items nested under a wishlist.
#[OpenApi]
impl ItemApi {
    /// Add an item
    ///
    /// Adds a product to the wishlist. The price may be sent as `price` or
    /// `prices`.
    #[oai(
        path = "/wishlists/:wishlist_id/items",
        method = "post",
        tag = "ApiTags::Items"
    )]
    async fn create(
        &self,
        wishlist_id: Path<i64>,
        body: Json<CreateItemRequest>,
    ) -> CreateItemResponse {
        let params = CreateItemParams {
            wishlist_id: wishlist_id.0,
            price: body.0.resolved_price(),
            product_id: body.0.product_id,
            product_name: body.0.product_name,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => {
                let location = item_url(&self.base_url, item.wishlist_id, item.id);
                CreateItemResponse::Created(Json(item.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateItemResponse::BadRequest(json),
                    404 => CreateItemResponse::NotFound(json),
                    409 => CreateItemResponse::Conflict(json),
                    _ => CreateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// List items
    ///
    /// Optional filters: `product_id` (exact) and `product_name_contains`
    /// (case-insensitive). Any other query parameter is rejected with 400.
    #[oai(
        path = "/wishlists/:wishlist_id/items",
        method = "get",
        tag = "ApiTags::Items"
    )]
    async fn get_all(&self, wishlist_id: Path<i64>, req: &Request) -> GetAllItemsResponse {
        let params = GetAllItemsParams {
            wishlist_id: wishlist_id.0,
            query: raw_query_pairs(req.uri().query()),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(items) => {
                let responses: Vec<ItemResponse> = items.into_iter().map(|i| i.into()).collect();
                GetAllItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllItemsResponse::BadRequest(json),
                    404 => GetAllItemsResponse::NotFound(json),
                    _ => GetAllItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an item
    #[oai(
        path = "/wishlists/:wishlist_id/items/:item_id",
        method = "get",
        tag = "ApiTags::Items"
    )]
    async fn get_by_id(&self, wishlist_id: Path<i64>, item_id: Path<i64>) -> GetItemResponse {
        let params = GetItemByIdParams {
            wishlist_id: wishlist_id.0,
            id: item_id.0,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(item) => GetItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetItemResponse::NotFound(json),
                    _ => GetItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an item
    ///
    /// Changes only the fields present in the body.
    #[oai(
        path = "/wishlists/:wishlist_id/items/:item_id",
        method = "put",
        tag = "ApiTags::Items"
    )]
    async fn update(
        &self,
        wishlist_id: Path<i64>,
        item_id: Path<i64>,
        body: Json<UpdateItemRequest>,
    ) -> UpdateItemResponse {
        let params = UpdateItemParams {
            wishlist_id: wishlist_id.0,
            id: item_id.0,
            price: body.0.resolved_price(),
            product_id: body.0.product_id,
            product_name: body.0.product_name,
        };

        match self.update_use_case.execute(params).await {
            Ok(item) => UpdateItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateItemResponse::BadRequest(json),
                    404 => UpdateItemResponse::NotFound(json),
                    409 => UpdateItemResponse::Conflict(json),
                    _ => UpdateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an item
    ///
    /// Removes the item when it belongs to the wishlist, otherwise does nothing.
    #[oai(
        path = "/wishlists/:wishlist_id/items/:item_id",
        method = "delete",
        tag = "ApiTags::Items"
    )]
    async fn delete(&self, wishlist_id: Path<i64>, item_id: Path<i64>) -> DeleteItemResponse {
        let params = DeleteItemParams {
            wishlist_id: wishlist_id.0,
            id: item_id.0,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteItemResponse::InternalError(json)
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>, #[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GetAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GetItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum UpdateItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
