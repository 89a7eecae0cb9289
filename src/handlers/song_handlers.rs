use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::db::{get_conn, DbPool};
use crate::errors::AppError;
use crate::models::rating_models::RateRequest;
use crate::store::{ratings, songs};
use crate::utils::auth_utils::{current_user, require_user};

pub async fn song_details(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let viewer = current_user(&req);
    let mut conn = get_conn(&pool)?;
    let detail = songs::detail(&mut conn, path.into_inner(), viewer.as_ref())?;
    Ok(HttpResponse::Ok().json(detail))
}

pub async fn get_mp3(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let mut conn = get_conn(&pool)?;
    let (title, audio) = songs::audio(&mut conn, path.into_inner())?;
    match audio {
        Some(bytes) => Ok(HttpResponse::Ok()
            .content_type("audio/mp3")
            .insert_header((
                "Content-Disposition",
                format!("inline; filename={}.mp3", title),
            ))
            .body(bytes)),
        None => Err(AppError::NotFound("audio")),
    }
}

pub async fn rate_song(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    form: web::Form<RateRequest>,
) -> Result<HttpResponse, AppError> {
    let user = require_user(&req)?;
    let mut conn = get_conn(&pool)?;
    ratings::rate(&mut conn, user.id, path.into_inner(), form.rating)?;
    Ok(HttpResponse::Ok().json(json!({ "notice": "rating submitted successfully" })))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    use crate::db::test_support::test_pool;
    use crate::middleware::session_middleware::SessionAuth;
    use crate::routes;
    use crate::store::test_support;

    #[actix_web::test]
    async fn rating_flow_updates_the_song_page() {
        let pool = test_pool();
        let song_id = {
            let mut conn = pool.get().unwrap();
            let bob = test_support::creator(&mut conn, "bob");
            test_support::song(&mut conn, &bob, "Rated Live").id
        };

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool.clone()))
                .wrap(SessionAuth)
                .configure(routes::configure),
        )
        .await;

        // The song page is public and starts unrated.
        let req = test::TestRequest::get()
            .uri(&format!("/song/{}", song_id))
            .to_request();
        let detail: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(detail["average_rating"], 0.0);
        assert_eq!(detail["has_rated"], false);

        // Rating anonymously is rejected.
        let req = test::TestRequest::post()
            .uri(&format!("/rate_song/{}", song_id))
            .set_form([("rating", "4")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([("username", "dora"), ("password", "pw")])
            .to_request();
        test::call_service(&app, req).await;
        let req = test::TestRequest::post()
            .uri("/login/user")
            .set_form([("username", "dora"), ("password", "pw")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        let cookie = resp.response().cookies().next().unwrap().into_owned();

        let req = test::TestRequest::post()
            .uri(&format!("/rate_song/{}", song_id))
            .cookie(cookie.clone())
            .set_form([("rating", "4")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/song/{}", song_id))
            .cookie(cookie)
            .to_request();
        let detail: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(detail["average_rating"], 4.0);
        assert_eq!(detail["has_rated"], true);
    }

    #[actix_web::test]
    async fn get_mp3_serves_bytes_or_404() {
        let pool = test_pool();
        let (with_audio, without_audio) = {
            let mut conn = pool.get().unwrap();
            let bob = test_support::creator(&mut conn, "bob");
            let with_audio = crate::store::songs::upload(
                &mut conn,
                &bob,
                "Audible",
                "words",
                Some(vec![7, 7, 7]),
            )
            .unwrap();
            let without_audio = test_support::song(&mut conn, &bob, "Silent");
            (with_audio.id, without_audio.id)
        };

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool.clone()))
                .wrap(SessionAuth)
                .configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/get_mp3/{}", with_audio))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "audio/mp3"
        );
        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), &[7, 7, 7]);

        let req = test::TestRequest::get()
            .uri(&format!("/get_mp3/{}", without_audio))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
