use crate::api::server::AppState;
use crate::error::ApiError;
use crate::models::employee::{EmployeeRequest, EmployeeUpdate};
use actix_web::{
    web::{self, delete, get, post, put, Data},
    HttpResponse, Scope,
};

async fn get_employees(app_state: Data<AppState>) -> HttpResponse {
    let employees = app_state.store_context.employee_store.get_employees();
    HttpResponse::Ok().json(employees)
}

async fn get_employee(
    id: web::Path<u32>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    match app_state
        .store_context
        .employee_store
        .get_employee(id.into_inner())
    {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(ApiError::NotFound("Employee")),
    }
}

async fn create_employee(
    request: web::Json<EmployeeRequest>,
    app_state: Data<AppState>,
) -> HttpResponse {
    let employee = app_state
        .store_context
        .employee_store
        .create_employee(request.into_inner());
    HttpResponse::Created().json(employee)
}

async fn update_employee(
    id: web::Path<u32>,
    update: web::Json<EmployeeUpdate>,
    app_state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    match app_state
        .store_context
        .employee_store
        .update_employee(id.into_inner(), update.into_inner())
    {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(ApiError::NotFound("Employee")),
    }
}

async fn delete_employee(id: web::Path<u32>, app_state: Data<AppState>) -> HttpResponse {
    app_state
        .store_context
        .employee_store
        .delete_employee(id.into_inner());
    HttpResponse::NoContent().finish()
}

async fn get_employee_assets(id: web::Path<u32>, app_state: Data<AppState>) -> HttpResponse {
    let assets = app_state
        .store_context
        .asset_store
        .get_assets_for_employee(id.into_inner());
    HttpResponse::Ok().json(assets)
}

async fn get_employee_repairs(id: web::Path<u32>, app_state: Data<AppState>) -> HttpResponse {
    let repairs = app_state
        .store_context
        .repair_store
        .get_repairs_for_employee(id.into_inner());
    HttpResponse::Ok().json(repairs)
}

pub fn employees_routes() -> Scope {
    web::scope("/employees")
        .route("", get().to(get_employees))
        .route("", post().to(create_employee))
        .route("/{id}", get().to(get_employee))
        .route("/{id}", put().to(update_employee))
        .route("/{id}", delete().to(delete_employee))
        .route("/{id}/assets", get().to(get_employee_assets))
        .route("/{id}/repairs", get().to(get_employee_repairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::helper::{create_seeded_app_state, create_test_app_state};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use actix_web::App;
    use serde_json::json;

    #[actix_web::test]
    async fn create_after_seed_allocates_id_four() {
        let app_state = create_seeded_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(employees_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/employees")
            .set_json(json!({"name": "Dana"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = test::read_body(resp).await;
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"id": 4, "name": "Dana"}));
    }

    #[actix_web::test]
    async fn sequential_creates_count_up_from_one() {
        let app_state = create_test_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(employees_routes()),
        )
        .await;

        for expected in 1..=3 {
            let req = test::TestRequest::post()
                .uri("/employees")
                .set_json(json!({"name": "someone"}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
            let body: serde_json::Value =
                serde_json::from_slice(&test::read_body(resp).await).unwrap();
            assert_eq!(body["id"], json!(expected));
        }
    }

    #[actix_web::test]
    async fn get_unknown_employee_is_not_found() {
        let app_state = create_seeded_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(employees_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/employees/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"Employee not found");
    }

    #[actix_web::test]
    async fn get_after_delete_is_not_found() {
        let app_state = create_seeded_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(employees_routes()),
        )
        .await;

        let req = test::TestRequest::delete().uri("/employees/2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/employees/2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_of_unknown_employee_still_succeeds() {
        let app_state = create_seeded_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(employees_routes()),
        )
        .await;

        let req = test::TestRequest::delete().uri("/employees/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn put_merges_fields_and_pins_id() {
        let app_state = create_seeded_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(employees_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/employees/1")
            .set_json(json!({"role": "Developer"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(
            body,
            json!({"id": 1, "name": "Alice Johnson", "role": "Developer"})
        );
    }

    #[actix_web::test]
    async fn put_with_null_clears_the_field() {
        let app_state = create_seeded_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(employees_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/employees/1")
            .set_json(json!({"role": "Developer"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::put()
            .uri("/employees/1")
            .set_json(json!({"role": null}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body, json!({"id": 1, "name": "Alice Johnson"}));
    }

    #[actix_web::test]
    async fn put_unknown_employee_is_not_found() {
        let app_state = create_seeded_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(employees_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/employees/42")
            .set_json(json!({"name": "Nobody"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn employee_assets_lists_only_their_assets() {
        let app_state = create_seeded_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(employees_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/employees/1/assets")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        let assets = body.as_array().unwrap();
        assert_eq!(assets.len(), 2);
        assert!(assets.iter().all(|a| a["employeeId"] == json!(1)));
    }

    #[actix_web::test]
    async fn employee_repairs_lists_only_their_repairs() {
        let app_state = create_seeded_app_state();
        let app = test::init_service(
            App::new()
                .app_data(app_state.clone())
                .service(employees_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/employees/1/repairs")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        let repairs = body.as_array().unwrap();
        assert_eq!(repairs.len(), 1);
        assert_eq!(repairs[0]["description"], json!("Battery issue"));

        // An employee with no repairs just gets an empty list.
        let req = test::TestRequest::get()
            .uri("/employees/3/repairs")
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert!(body.as_array().unwrap().is_empty());
    }
}
