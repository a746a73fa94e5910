use crate::api::server::AppState;
use crate::security::token::{issue_token, TOKEN_TTL_SECS};
use actix_web::{
    web::{self, post, Data},
    HttpResponse, Scope,
};
use log::error;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: u64,
}

async fn login(request: web::Json<LoginRequest>, app_state: Data<AppState>) -> HttpResponse {
    let auth = &app_state.auth;

    let username_ok = request.username == auth.username;
    let provided = request.password.as_bytes();
    let expected = auth.password.as_bytes();
    let password_ok = provided.len() == expected.len() && provided.ct_eq(expected).into();

    if !username_ok || !password_ok {
        return HttpResponse::Unauthorized().body("Invalid credentials");
    }

    match issue_token(&auth.token_secret, &request.username) {
        Ok(token) => HttpResponse::Ok().json(LoginResponse {
            token,
            expires_in: TOKEN_TTL_SECS,
        }),
        Err(e) => {
            error!("Error issuing token: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn auth_routes() -> Scope {
    web::scope("/login").route("", post().to(login))
}
