use crate::api::server::AppState;
use crate::error::ApiError;
use crate::models::repair::{RepairRequest, RepairUpdate};
use actix_web::{
    web::{self, delete, get, post, put, Data},
    HttpResponse, Scope,
};

async fn get_repairs(app_state: Data<AppState>) -> HttpResponse {
    let repairs = app_state.store_context.repair_store.get_repairs();
    HttpResponse::Ok().json(repairs)
}

async fn get_repair(
    id: web::Path<u32>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    match app_state
        .store_context
        .repair_store
        .get_repair(id.into_inner())
    {
        Some(repair) => Ok(HttpResponse::Ok().json(repair)),
        None => Err(ApiError::NotFound("Repair")),
    }
}

async fn create_repair(
    request: web::Json<RepairRequest>,
    app_state: Data<AppState>,
) -> HttpResponse {
    let repair = app_state
        .store_context
        .repair_store
        .create_repair(request.into_inner());
    HttpResponse::Created().json(repair)
}

async fn update_repair(
    id: web::Path<u32>,
    update: web::Json<RepairUpdate>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    match app_state
        .store_context
        .repair_store
        .update_repair(id.into_inner(), update.into_inner())
    {
        Some(repair) => Ok(HttpResponse::Ok().json(repair)),
        None => Err(ApiError::NotFound("Repair")),
    }
}

async fn delete_repair(id: web::Path<u32>, app_state: Data<AppState>) -> HttpResponse {
    app_state
        .store_context
        .repair_store
        .delete_repair(id.into_inner());
    HttpResponse::NoContent().finish()
}

pub fn repairs_routes() -> Scope {
    web::scope("/repairs")
        .route("", get().to(get_repairs))
        .route("", post().to(create_repair))
        .route("/{id}", get().to(get_repair))
        .route("/{id}", put().to(update_repair))
        .route("/{id}", delete().to(delete_repair))
}
