mod calendar;
mod course;
mod excluded_date;
mod item;
mod pattern;
mod shared;
mod status;

pub mod dtos {
    pub use crate::calendar::dtos::*;
    pub use crate::course::dtos::*;
    pub use crate::excluded_date::dtos::*;
    pub use crate::item::dtos::*;
    pub use crate::pattern::dtos::*;
}

pub use crate::calendar::api::*;
pub use crate::course::api::*;
pub use crate::excluded_date::api::*;
pub use crate::item::api::*;
pub use crate::pattern::api::*;
pub use crate::status::api::*;
