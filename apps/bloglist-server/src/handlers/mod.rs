//! HTTP handlers and route configuration.

mod blogs;
mod health;
mod login;
mod users;


use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/blogs")
                        .route("", web::get().to(blogs::list_blogs))
                        .route("", web::post().to(blogs::create_blog))
                        // Before "/{id}" so it is not parsed as an id.
                        .route("/stats", web::get().to(blogs::blog_stats))
                        .route("/{id}", web::get().to(blogs::get_blog))
                        .route("/{id}", web::put().to(blogs::update_blog))
                        .route("/{id}", web::delete().to(blogs::delete_blog)),
                )
                .service(
                    web::scope("/users")
                        .route("", web::get().to(users::list_users))
                        .route("", web::post().to(users::register)),
                )
                .route("/login", web::post().to(login::login)),
        );
}
