use crate::api::server::AppState;
use crate::error::ApiError;
use crate::models::asset::{AssetRequest, AssetUpdate, AssignRequest};
use actix_web::{
    web::{self, delete, get, post, put, Data},
    HttpResponse, Scope,
};

async fn get_assets(app_state: Data<AppState>) -> HttpResponse {
    let assets = app_state.store_context.asset_store.get_assets();
    HttpResponse::Ok().json(assets)
}

async fn create_asset(request: web::Json<AssetRequest>, app_state: Data<AppState>) -> HttpResponse {
    let asset = app_state
        .store_context
        .asset_store
        .create_asset(request.into_inner());
    HttpResponse::Created().json(asset)
}

async fn update_asset(
    id: web::Path<u32>,
    update: web::Json<AssetUpdate>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    match app_state
        .store_context
        .asset_store
        .update_asset(id.into_inner(), update.into_inner())
    {
        Some(asset) => Ok(HttpResponse::Ok().json(asset)),
        None => Err(ApiError::NotFound("Asset")),
    }
}

async fn delete_asset(id: web::Path<u32>, app_state: Data<AppState>) -> HttpResponse {
    app_state
        .store_context
        .asset_store
        .delete_asset(id.into_inner());
    HttpResponse::NoContent().finish()
}

async fn assign_asset(
    id: web::Path<u32>,
    request: web::Json<AssignRequest>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    // The employee id is taken at face value; assignment is not
    // existence-checked against the employee collection.
    match app_state
        .store_context
        .asset_store
        .assign_asset(id.into_inner(), request.employee_id)
    {
        Some(asset) => Ok(HttpResponse::Ok().json(asset)),
        None => Err(ApiError::NotFound("Asset")),
    }
}

async fn unassign_asset(
    id: web::Path<u32>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    match app_state
        .store_context
        .asset_store
        .unassign_asset(id.into_inner())
    {
        Some(asset) => Ok(HttpResponse::Ok().json(asset)),
        None => Err(ApiError::NotFound("Asset")),
    }
}

pub fn assets_routes() -> Scope {
    web::scope("/assets")
        .route("", get().to(get_assets))
        .route("", post().to(create_asset))
        .route("/{id}", put().to(update_asset))
        .route("/{id}", delete().to(delete_asset))
        .route("/{id}/assign", post().to(assign_asset))
        .route("/{id}/unassign", post().to(unassign_asset))
}
