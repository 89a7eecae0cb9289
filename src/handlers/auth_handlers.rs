use actix_web::cookie::Cookie;
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use serde_json::json;

use crate::constants::route_constants::SESSION_COOKIE;
use crate::db::{get_conn, DbPool};
use crate::errors::AppError;
use crate::models::user_models::{LoginRequest, RegisterRequest};
use crate::store::{sessions, users};

pub async fn register(
    pool: web::Data<DbPool>,
    form: web::Form<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let mut conn = get_conn(&pool)?;
    let user = users::register(&mut conn, &form.username, &form.password)?;
    tracing::info!(username = %user.username, "account registered");
    Ok(HttpResponse::Created().json(json!({
        "id": user.id,
        "username": user.username,
        "notice": format!("registration successful, welcome {}!", user.username),
    })))
}

fn login(
    pool: &DbPool,
    form: &LoginRequest,
    admin_login: bool,
) -> Result<HttpResponse, AppError> {
    let mut conn = get_conn(pool)?;
    let user = users::login(&mut conn, &form.username, &form.password, admin_login)?;
    let session = sessions::create(&mut conn, user.id)?;
    tracing::info!(username = %user.username, admin_login, "login");

    let cookie = Cookie::build(SESSION_COOKIE, session.token)
        .path("/")
        .http_only(true)
        .finish();
    Ok(HttpResponse::Ok().cookie(cookie).json(json!({
        "username": user.username,
        "is_admin": user.is_admin,
        "is_creator": user.is_creator,
    })))
}

pub async fn login_user(
    pool: web::Data<DbPool>,
    form: web::Form<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    login(&pool, &form, false)
}

pub async fn login_admin(
    pool: web::Data<DbPool>,
    form: web::Form<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    login(&pool, &form, true)
}

pub async fn logout(req: HttpRequest, pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        let mut conn = get_conn(&pool)?;
        sessions::delete_by_token(&mut conn, cookie.value())?;
    }
    let mut removal = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    removal.make_removal();
    Ok(HttpResponse::Ok()
        .cookie(removal)
        .json(json!({ "notice": "logged out" })))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    use crate::db::test_support::test_pool;
    use crate::middleware::session_middleware::SessionAuth;
    use crate::routes;

    #[actix_web::test]
    async fn register_login_and_dashboard_flow() {
        let pool = test_pool();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool.clone()))
                .wrap(SessionAuth)
                .configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([("username", "alice"), ("password", "pw1")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        // Without a session the dashboard is off limits.
        let req = test::TestRequest::get().uri("/dashboard/user").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/login/user")
            .set_form([("username", "alice"), ("password", "wrong")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/login/user")
            .set_form([("username", "alice"), ("password", "pw1")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let cookie = resp
            .response()
            .cookies()
            .next()
            .expect("login should set the session cookie")
            .into_owned();

        let req = test::TestRequest::get()
            .uri("/dashboard/user")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn duplicate_registration_conflicts() {
        let pool = test_pool();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool.clone()))
                .wrap(SessionAuth)
                .configure(routes::configure),
        )
        .await;

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/register")
                .set_form([("username", "alice"), ("password", "pw1")])
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }
    }

    #[actix_web::test]
    async fn admin_form_does_not_accept_plain_users() {
        let pool = test_pool();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool.clone()))
                .wrap(SessionAuth)
                .configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([("username", "alice"), ("password", "pw1")])
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/login/admin")
            .set_form([("username", "alice"), ("password", "pw1")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
