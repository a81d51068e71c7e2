mod course;
mod excluded_date;
mod item;
mod pattern;
mod shared;

use course::{ICourseRepo, InMemoryCourseRepo};
use excluded_date::{IExcludedDateRepo, InMemoryExcludedDateRepo};
use item::{IItemRepo, InMemoryItemRepo};
use pattern::{IPatternRepo, InMemoryPatternRepo};
use std::sync::Arc;

pub use shared::query_structs::*;
pub use shared::repo::DeleteResult;

#[derive(Clone)]
pub struct Repos {
    pub courses: Arc<dyn ICourseRepo>,
    pub excluded_dates: Arc<dyn IExcludedDateRepo>,
    pub items: Arc<dyn IItemRepo>,
    pub patterns: Arc<dyn IPatternRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            courses: Arc::new(InMemoryCourseRepo::new()),
            excluded_dates: Arc::new(InMemoryExcludedDateRepo::new()),
            items: Arc::new(InMemoryItemRepo::new()),
            patterns: Arc::new(InMemoryPatternRepo::new()),
        }
    }
}
