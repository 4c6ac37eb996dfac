// Route exports
pub mod pages;
pub mod schools;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(schools::configure),
    )
    .configure(pages::configure);
}
