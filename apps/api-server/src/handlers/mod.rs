//! HTTP handlers and route configuration.

mod auth;
mod feed;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/auth")
                .route("/signup", web::put().to(auth::signup))
                .route("/login", web::post().to(auth::login))
                .route("/status", web::get().to(auth::get_status))
                .route("/status", web::patch().to(auth::set_status))
                .route("/me", web::get().to(auth::me)),
        )
        .service(
            web::scope("/feed")
                .route("/posts", web::get().to(feed::list_posts))
                .route("/post", web::post().to(feed::create_post))
                .route("/post/{post_id}", web::get().to(feed::get_post))
                .route("/post/{post_id}", web::put().to(feed::update_post))
                .route("/post/{post_id}", web::delete().to(feed::delete_post)),
        );
}
