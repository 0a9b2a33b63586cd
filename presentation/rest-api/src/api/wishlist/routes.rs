use std::sync::Arc;

use poem::Request;
use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Header, Path},
    payload::Json,
};
use url::Url;

use business::domain::shared::value_objects::CustomerId;
use business::domain::wishlist::use_cases::clear::{ClearWishlistParams, ClearWishlistUseCase};
use business::domain::wishlist::use_cases::create::{
    CreateWishlistParams, CreateWishlistUseCase,
};
use business::domain::wishlist::use_cases::delete::{
    DeleteWishlistParams, DeleteWishlistUseCase,
};
use business::domain::wishlist::use_cases::get_all::{
    GetAllWishlistsParams, GetAllWishlistsUseCase,
};
use business::domain::wishlist::use_cases::get_by_id::{
    GetWishlistByIdParams, GetWishlistByIdUseCase,
};
use business::domain::wishlist::use_cases::share::{ShareWishlistParams, ShareWishlistUseCase};
use business::domain::wishlist::use_cases::update::{
    UpdateWishlistParams, UpdateWishlistUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::links::wishlist_url;
use crate::api::query::raw_query_pairs;
use crate::api::security::ApiKeyGuard;
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::{
    CreateWishlistRequest, ShareLinkResponse, UpdateWishlistRequest, WishlistResponse,
};

pub struct WishlistApi {
    create_use_case: Arc<dyn CreateWishlistUseCase>,
    get_all_use_case: Arc<dyn GetAllWishlistsUseCase>,
    get_by_id_use_case: Arc<dyn GetWishlistByIdUseCase>,
    update_use_case: Arc<dyn UpdateWishlistUseCase>,
    delete_use_case: Arc<dyn DeleteWishlistUseCase>,
    clear_use_case: Arc<dyn ClearWishlistUseCase>,
    share_use_case: Arc<dyn ShareWishlistUseCase>,
    guard: ApiKeyGuard,
    base_url: Url,
}

impl WishlistApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateWishlistUseCase>,
        get_all_use_case: Arc<dyn GetAllWishlistsUseCase>,
        get_by_id_use_case: Arc<dyn GetWishlistByIdUseCase>,
        update_use_case: Arc<dyn UpdateWishlistUseCase>,
        delete_use_case: Arc<dyn DeleteWishlistUseCase>,
        clear_use_case: Arc<dyn ClearWishlistUseCase>,
        share_use_case: Arc<dyn ShareWishlistUseCase>,
        guard: ApiKeyGuard,
        base_url: Url,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            clear_use_case,
            share_use_case,
            guard,
            base_url,
        }
    }
}

/// Wishlist management API
///
/// Endpoints for creating, listing, updating, clearing, sharing and deleting wishlists.
#[OpenApi]
impl WishlistApi {
    /// Create a wishlist
    ///
    /// Creates an empty wishlist for a customer. Requires `X-Api-Key` when the
    /// service has an API key configured.
    #[oai(path = "/wishlists", method = "post", tag = "ApiTags::Wishlists")]
    async fn create(
        &self,
        #[oai(name = "X-Api-Key")] api_key: Header<Option<String>>,
        body: Json<CreateWishlistRequest>,
    ) -> CreateWishlistResponse {
        if let Err(json) = self.guard.check(api_key.0.as_deref()) {
            return CreateWishlistResponse::Unauthorized(json);
        }

        let params = CreateWishlistParams {
            customer_id: body.0.customer_id,
            name: body.0.name,
            description: body.0.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(wishlist) => {
                let location = wishlist_url(&self.base_url, wishlist.id);
                CreateWishlistResponse::Created(Json(wishlist.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateWishlistResponse::BadRequest(json),
                    409 => CreateWishlistResponse::Conflict(json),
                    _ => CreateWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// List wishlists
    ///
    /// Optional filters: `customer_id` (exact) and `name_contains`
    /// (case-insensitive). Any other query parameter is rejected with 400.
    #[oai(path = "/wishlists", method = "get", tag = "ApiTags::Wishlists")]
    async fn get_all(&self, req: &Request) -> GetAllWishlistsResponse {
        let params = GetAllWishlistsParams {
            query: raw_query_pairs(req.uri().query()),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(wishlists) => {
                let responses: Vec<WishlistResponse> =
                    wishlists.into_iter().map(|w| w.into()).collect();
                GetAllWishlistsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllWishlistsResponse::BadRequest(json),
                    _ => GetAllWishlistsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a wishlist
    ///
    /// Returns the wishlist with its items.
    #[oai(path = "/wishlists/:id", method = "get", tag = "ApiTags::Wishlists")]
    async fn get_by_id(&self, id: Path<i64>) -> GetWishlistResponse {
        match self
            .get_by_id_use_case
            .execute(GetWishlistByIdParams { id: id.0 })
            .await
        {
            Ok(wishlist) => GetWishlistResponse::Ok(Json(wishlist.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetWishlistResponse::NotFound(json),
                    _ => GetWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a wishlist
    ///
    /// Changes only the fields present in the body. `X-Customer-Id` must name
    /// the owner of the wishlist; a missing or blank header is refused with 403.
    #[oai(path = "/wishlists/:id", method = "put", tag = "ApiTags::Wishlists")]
    async fn update(
        &self,
        id: Path<i64>,
        #[oai(name = "X-Api-Key")] api_key: Header<Option<String>>,
        #[oai(name = "X-Customer-Id")] customer_id: Header<Option<String>>,
        body: Json<UpdateWishlistRequest>,
    ) -> UpdateWishlistResponse {
        if let Err(json) = self.guard.check(api_key.0.as_deref()) {
            return UpdateWishlistResponse::Unauthorized(json);
        }

        let params = UpdateWishlistParams {
            id: id.0,
            patch: body.0.into_patch(),
            requester: customer_id
                .0
                .filter(|value| !value.trim().is_empty())
                .map(CustomerId::new),
        };

        match self.update_use_case.execute(params).await {
            Ok(wishlist) => UpdateWishlistResponse::Ok(Json(wishlist.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateWishlistResponse::BadRequest(json),
                    403 => UpdateWishlistResponse::Forbidden(json),
                    404 => UpdateWishlistResponse::NotFound(json),
                    409 => UpdateWishlistResponse::Conflict(json),
                    _ => UpdateWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a wishlist
    ///
    /// Removes the wishlist and all of its items. Deleting an unknown id is
    /// not an error.
    #[oai(path = "/wishlists/:id", method = "delete", tag = "ApiTags::Wishlists")]
    async fn delete(
        &self,
        id: Path<i64>,
        #[oai(name = "X-Api-Key")] api_key: Header<Option<String>>,
    ) -> DeleteWishlistResponse {
        if let Err(json) = self.guard.check(api_key.0.as_deref()) {
            return DeleteWishlistResponse::Unauthorized(json);
        }

        match self
            .delete_use_case
            .execute(DeleteWishlistParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteWishlistResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteWishlistResponse::InternalError(json)
            }
        }
    }

    /// Clear a wishlist
    ///
    /// Removes every item and keeps the wishlist itself.
    #[oai(
        path = "/wishlists/:id/clear",
        method = "put",
        tag = "ApiTags::Wishlists"
    )]
    async fn clear(
        &self,
        id: Path<i64>,
        #[oai(name = "X-Api-Key")] api_key: Header<Option<String>>,
    ) -> ClearWishlistResponse {
        if let Err(json) = self.guard.check(api_key.0.as_deref()) {
            return ClearWishlistResponse::Unauthorized(json);
        }

        match self
            .clear_use_case
            .execute(ClearWishlistParams { id: id.0 })
            .await
        {
            Ok(_) => ClearWishlistResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ClearWishlistResponse::NotFound(json),
                    _ => ClearWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Share a wishlist
    ///
    /// Returns the public URL of the wishlist. Nothing is stored.
    #[oai(
        path = "/wishlists/:id/share",
        method = "put",
        tag = "ApiTags::Wishlists"
    )]
    async fn share(&self, id: Path<i64>) -> ShareWishlistResponse {
        match self
            .share_use_case
            .execute(ShareWishlistParams { id: id.0 })
            .await
        {
            Ok(link) => ShareWishlistResponse::Ok(Json(link.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ShareWishlistResponse::NotFound(json),
                    _ => ShareWishlistResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum CreateWishlistResponse {
    #[oai(status = 201)]
    Created(
        Json<WishlistResponse>,
        #[oai(header = "Location")] String,
    ),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GetAllWishlistsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<WishlistResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GetWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum UpdateWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum DeleteWishlistResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ClearWishlistResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ShareWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<ShareLinkResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use serde_json::json;

    use crate::api::test_support::{API_KEY, BASE_URL, test_client};

    #[tokio::test]
    async fn should_create_wishlist_with_null_description() {
        let cli = test_client(None);

        let resp = cli
            .post("/wishlists")
            .body_json(&json!({ "customer_id": "CUST001", "name": "Holiday Gifts" }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        resp.assert_header("Location", format!("{BASE_URL}/wishlists/1"));
        let body = resp.json().await;
        let wishlist = body.value().object();
        wishlist.get("id").assert_i64(1);
        wishlist.get("customer_id").assert_string("CUST001");
        wishlist.get("name").assert_string("Holiday Gifts");
        wishlist.get("description").assert_null();
        wishlist.get("items").array().assert_is_empty();
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let cli = test_client(None);

        let resp = cli
            .post("/wishlists")
            .body_json(&json!({ "customer_id": "CUST001", "name": "  " }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(&json!({ "name": "ValidationError", "message": "wishlist.name_empty" }))
            .await;
    }

    #[tokio::test]
    async fn should_reject_duplicate_name_for_same_customer() {
        let cli = test_client(None);
        let body = json!({ "customer_id": "CUST001", "name": "Holiday Gifts" });
        cli.post("/wishlists").body_json(&body).send().await;

        let resp = cli.post("/wishlists").body_json(&body).send().await;

        resp.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_require_api_key_when_configured() {
        let cli = test_client(Some(API_KEY));
        let body = json!({ "customer_id": "CUST001", "name": "Holiday Gifts" });

        cli.post("/wishlists")
            .body_json(&body)
            .send()
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
        cli.post("/wishlists")
            .header("X-Api-Key", "wrong")
            .body_json(&body)
            .send()
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
        cli.post("/wishlists")
            .header("X-Api-Key", API_KEY)
            .body_json(&body)
            .send()
            .await
            .assert_status(StatusCode::CREATED);

        // Reads stay public.
        cli.get("/wishlists/1").send().await.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_wishlist() {
        let cli = test_client(None);

        let resp = cli.get("/wishlists/42").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(&json!({ "name": "NotFound", "message": "wishlist.not_found" }))
            .await;
    }

    #[tokio::test]
    async fn should_filter_list_and_reject_unknown_parameters() {
        let cli = test_client(None);
        for (customer, name) in [
            ("CUST001", "Holiday Gifts"),
            ("CUST001", "Camping"),
            ("CUST002", "Birthday gifts"),
        ] {
            cli.post("/wishlists")
                .body_json(&json!({ "customer_id": customer, "name": name }))
                .send()
                .await
                .assert_status(StatusCode::CREATED);
        }

        let resp = cli
            .get("/wishlists")
            .query("customer_id", &"CUST001")
            .query("name_contains", &"GIFT")
            .send()
            .await;
        resp.assert_status_is_ok();
        let body = resp.json().await;
        let list = body.value().array();
        list.assert_len(1);
        list.get(0).object().get("name").assert_string("Holiday Gifts");

        let resp = cli
            .get("/wishlists")
            .query("customer_id", &"CUST001")
            .query("colour", &"red")
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(&json!({
            "name": "InvalidQueryParameter",
            "message": "query.unknown_parameter: colour"
        }))
        .await;
    }

    #[tokio::test]
    async fn should_merge_update_and_clear_description_on_null() {
        let cli = test_client(None);
        cli.post("/wishlists")
            .body_json(&json!({
                "customer_id": "CUST001",
                "name": "Holiday Gifts",
                "description": "for the family"
            }))
            .send()
            .await;

        let resp = cli
            .put("/wishlists/1")
            .header("X-Customer-Id", "CUST001")
            .body_json(&json!({ "name": "Winter Gifts" }))
            .send()
            .await;
        resp.assert_status_is_ok();
        let body = resp.json().await;
        body.value().object().get("name").assert_string("Winter Gifts");
        body.value()
            .object()
            .get("description")
            .assert_string("for the family");

        let resp = cli
            .put("/wishlists/1")
            .header("X-Customer-Id", "CUST001")
            .body_json(&json!({ "description": null }))
            .send()
            .await;
        resp.assert_status_is_ok();
        let body = resp.json().await;
        body.value().object().get("description").assert_null();
        body.value().object().get("name").assert_string("Winter Gifts");
    }

    #[tokio::test]
    async fn should_forbid_update_from_another_customer() {
        let cli = test_client(None);
        cli.post("/wishlists")
            .body_json(&json!({ "customer_id": "CUST001", "name": "Holiday Gifts" }))
            .send()
            .await;

        let resp = cli
            .put("/wishlists/1")
            .header("X-Customer-Id", "CUST002")
            .body_json(&json!({ "name": "Mine now" }))
            .send()
            .await;

        resp.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn should_forbid_update_without_customer_header() {
        let cli = test_client(None);
        cli.post("/wishlists")
            .body_json(&json!({ "customer_id": "CUST001", "name": "Holiday Gifts" }))
            .send()
            .await;

        let resp = cli
            .put("/wishlists/1")
            .body_json(&json!({ "name": "Hijacked" }))
            .send()
            .await;
        resp.assert_status(StatusCode::FORBIDDEN);
        resp.assert_json(&json!({ "name": "Forbidden", "message": "wishlist.not_owner" }))
            .await;

        cli.put("/wishlists/1")
            .header("X-Customer-Id", "  ")
            .body_json(&json!({ "name": "Hijacked" }))
            .send()
            .await
            .assert_status(StatusCode::FORBIDDEN);

        cli.get("/wishlists/1")
            .send()
            .await
            .json()
            .await
            .value()
            .object()
            .get("name")
            .assert_string("Holiday Gifts");
    }

    #[tokio::test]
    async fn should_reject_rename_onto_existing_name() {
        let cli = test_client(None);
        for name in ["Holiday Gifts", "Camping"] {
            cli.post("/wishlists")
                .body_json(&json!({ "customer_id": "CUST001", "name": name }))
                .send()
                .await
                .assert_status(StatusCode::CREATED);
        }

        let resp = cli
            .put("/wishlists/2")
            .header("X-Customer-Id", "CUST001")
            .body_json(&json!({ "name": "Holiday Gifts" }))
            .send()
            .await;

        resp.assert_status(StatusCode::CONFLICT);
        resp.assert_json(&json!({ "name": "Conflict", "message": "wishlist.already_exists" }))
            .await;
    }

    #[tokio::test]
    async fn should_answer_malformed_body_with_json_validation_error() {
        let cli = test_client(None);

        let resp = cli
            .post("/wishlists")
            .body_json(&json!({ "name": "x" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_content_type("application/json; charset=utf-8");
        let body = resp.json().await;
        let error = body.value().object();
        error.get("name").assert_string("ValidationError");
        assert!(!error.get("message").string().is_empty());
    }

    #[tokio::test]
    async fn should_answer_malformed_id_with_json_validation_error() {
        let cli = test_client(None);

        let resp = cli.get("/wishlists/abc").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.json()
            .await
            .value()
            .object()
            .get("name")
            .assert_string("ValidationError");
    }

    #[tokio::test]
    async fn should_reject_non_json_content_type() {
        let cli = test_client(None);

        let resp = cli
            .post("/wishlists")
            .content_type("text/plain")
            .body("customer_id=CUST001")
            .send()
            .await;

        resp.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
        resp.json()
            .await
            .value()
            .object()
            .get("name")
            .assert_string("UnsupportedMediaType");
    }

    #[tokio::test]
    async fn should_delete_wishlist_with_its_items_and_stay_idempotent() {
        let cli = test_client(None);
        cli.post("/wishlists")
            .body_json(&json!({ "customer_id": "CUST001", "name": "Holiday Gifts" }))
            .send()
            .await;
        cli.post("/wishlists/1/items")
            .body_json(&json!({ "product_id": 123, "product_name": "Headphones", "price": 299.99 }))
            .send()
            .await
            .assert_status(StatusCode::CREATED);

        cli.delete("/wishlists/1")
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);
        cli.delete("/wishlists/1")
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);

        cli.get("/wishlists/1/items/2")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_clear_items_but_keep_wishlist() {
        let cli = test_client(None);
        cli.post("/wishlists")
            .body_json(&json!({ "customer_id": "CUST001", "name": "Holiday Gifts" }))
            .send()
            .await;
        for product_id in [1, 2] {
            cli.post("/wishlists/1/items")
                .body_json(&json!({ "product_id": product_id, "product_name": "Thing", "price": 1.0 }))
                .send()
                .await;
        }

        cli.put("/wishlists/1/clear")
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let resp = cli.get("/wishlists/1").send().await;
        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("items")
            .array()
            .assert_is_empty();

        cli.put("/wishlists/9/clear")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_share_public_url() {
        let cli = test_client(None);
        cli.post("/wishlists")
            .body_json(&json!({ "customer_id": "CUST001", "name": "Holiday Gifts" }))
            .send()
            .await;

        let resp = cli.put("/wishlists/1/share").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(&json!({
            "wishlist_id": 1,
            "share_url": format!("{BASE_URL}/wishlists/1")
        }))
        .await;

        cli.put("/wishlists/2/share")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
