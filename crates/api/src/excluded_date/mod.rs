use actix_web::web;

mod create_excluded_date;
mod delete_excluded_date;
mod get_excluded_dates;

use create_excluded_date::create_excluded_date_controller;
use delete_excluded_date::delete_excluded_date_controller;
use get_excluded_dates::get_excluded_dates_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/user/{user_id}/excluded-dates",
        web::post().to(create_excluded_date_controller),
    );
    cfg.route(
        "/user/{user_id}/excluded-dates",
        web::get().to(get_excluded_dates_controller),
    );
    cfg.route(
        "/user/{user_id}/excluded-dates/{excluded_date_id}",
        web::delete().to(delete_excluded_date_controller),
    );
}
