use actix_web::web;

mod create_course;
mod delete_course;
mod get_courses;
mod subscribers;

use create_course::create_course_controller;
use delete_course::delete_course_controller;
use get_courses::get_courses_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/user/{user_id}/courses",
        web::post().to(create_course_controller),
    );
    cfg.route(
        "/user/{user_id}/courses",
        web::get().to(get_courses_controller),
    );
    cfg.route(
        "/user/{user_id}/courses/{course_id}",
        web::delete().to(delete_course_controller),
    );
}
