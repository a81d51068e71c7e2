use actix_web::web;

mod create_item;
mod delete_item;
mod get_items;
mod set_item_status;
mod update_item;

use create_item::create_item_controller;
use delete_item::delete_item_controller;
use get_items::get_items_controller;
use set_item_status::set_item_status_controller;
use update_item::update_item_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/user/{user_id}/items", web::post().to(create_item_controller));
    cfg.route("/user/{user_id}/items", web::get().to(get_items_controller));
    cfg.route(
        "/user/{user_id}/items/{item_id}",
        web::put().to(update_item_controller),
    );
    cfg.route(
        "/user/{user_id}/items/{item_id}/status",
        web::put().to(set_item_status_controller),
    );
    cfg.route(
        "/user/{user_id}/items/{item_id}",
        web::delete().to(delete_item_controller),
    );
}
