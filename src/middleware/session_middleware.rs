use actix_web::{
    dev::{forward_ready, ServiceRequest, ServiceResponse, Transform},
    web::Data,
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::sync::Arc;

use crate::constants::route_constants::{is_public, SESSION_COOKIE};
use crate::db::DbPool;
use crate::models::session_models::CurrentUser;
use crate::store::sessions;

/// Resolves the session cookie into a `CurrentUser` on every request and
/// rejects non-public routes without one. Handlers read the caller from
/// request extensions and apply their own role checks on top.
pub struct SessionAuth;

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: actix_web::dev::Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionAuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Arc::new(service),
        }))
    }
}

pub struct SessionAuthMiddleware<S> {
    service: Arc<S>,
}

impl<S, B> actix_web::dev::Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: actix_web::dev::Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        let pool = req.app_data::<Data<DbPool>>().unwrap().clone();
        let path = req.path().to_string();
        let method = req.method().clone();

        Box::pin(async move {
            if let Some(cookie) = req.cookie(SESSION_COOKIE) {
                let mut conn = pool
                    .get()
                    .map_err(|_| actix_web::error::ErrorInternalServerError("database error"))?;
                let resolved = sessions::resolve(&mut conn, cookie.value())
                    .map_err(actix_web::Error::from)?;
                if let Some(user) = resolved {
                    req.extensions_mut().insert(user);
                }
            }

            if !is_public(&path, &method) && req.extensions().get::<CurrentUser>().is_none() {
                return Err(actix_web::error::ErrorUnauthorized("please log in"));
            }

            service.call(req).await
        })
    }
}
