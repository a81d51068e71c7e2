use actix_web::web;
use studydesk_api_structs::dtos::{KindTemplateDTO, RecurrenceDTO};
use studydesk_domain::{
    InvalidPatternError, Item, ItemKind, ItemTemplate, Recurrence, RecurrenceValidationError,
    RecurringPattern, ID,
};
use std::convert::TryFrom;
use thiserror::Error;

mod create_pattern;
mod delete_pattern;
mod get_patterns;
mod materialize_patterns;
mod set_pattern_active;
mod update_pattern;

use create_pattern::create_pattern_controller;
use delete_pattern::delete_pattern_controller;
use get_patterns::get_patterns_controller;
use set_pattern_active::{pause_pattern_controller, resume_pattern_controller};
use update_pattern::update_pattern_controller;

pub use materialize_patterns::MaterializePatternsUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/user/{user_id}/patterns",
        web::post().to(create_pattern_controller),
    );
    cfg.route(
        "/user/{user_id}/patterns",
        web::get().to(get_patterns_controller),
    );
    cfg.route(
        "/user/{user_id}/patterns/{pattern_id}",
        web::put().to(update_pattern_controller),
    );
    cfg.route(
        "/user/{user_id}/patterns/{pattern_id}",
        web::delete().to(delete_pattern_controller),
    );
    cfg.route(
        "/user/{user_id}/patterns/{pattern_id}/pause",
        web::post().to(pause_pattern_controller),
    );
    cfg.route(
        "/user/{user_id}/patterns/{pattern_id}/resume",
        web::post().to(resume_pattern_controller),
    );
}

/// A written pattern and the instance changes the write caused
#[derive(Debug, PartialEq)]
pub struct PatternWithInstances {
    pub pattern: RecurringPattern,
    pub created: Vec<Item>,
    pub removed: Vec<ID>,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidPatternBody {
    #[error("{0}")]
    Recurrence(RecurrenceValidationError),
    #[error("{0}")]
    Pattern(InvalidPatternError),
    #[error("The pattern generates {0} items, a {1} template can not be used")]
    KindMismatch(ItemKind, ItemKind),
}

/// Parses the wire recurrence and template of a pattern write
fn parse_pattern_body(
    recurrence: RecurrenceDTO,
    template: KindTemplateDTO,
) -> Result<(Recurrence, ItemKind, ItemTemplate), InvalidPatternBody> {
    let recurrence = Recurrence::try_from(recurrence).map_err(InvalidPatternBody::Recurrence)?;
    let (kind, mut template) = template.into_parts();
    template.title = template.title.trim().to_string();
    RecurringPattern::validate(kind, &recurrence, &template).map_err(InvalidPatternBody::Pattern)?;
    Ok((recurrence, kind, template))
}
