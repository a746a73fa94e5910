use crate::error::ApiError;
use crate::security::token::verify_token;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, HttpMessage,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};

/// Bearer-token gate. Missing or unreadable credential answers 401; a
/// credential that fails verification (bad signature, expired) answers 403.
/// On success the decoded claims land in the request extensions.
pub struct AuthGate {
    secret: String,
}

impl AuthGate {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateService {
            service,
            secret: self.secret.clone(),
        }))
    }
}

pub struct AuthGateService<S> {
    service: S,
    secret: String,
}

impl<S, B> Service<ServiceRequest> for AuthGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .and_then(|auth_str| {
                if auth_str.len() > 7 {
                    let (scheme, token) = auth_str.split_at(7);
                    if scheme.eq_ignore_ascii_case("Bearer ") {
                        return Some(token.to_string());
                    }
                }
                None
            });

        let Some(token) = token else {
            return Box::pin(async move { Err(ApiError::Unauthorized.into()) });
        };

        match verify_token(&self.secret, &token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res)
                })
            }
            Err(_) => Box::pin(async move { Err(ApiError::Forbidden.into()) }),
        }
    }
}
