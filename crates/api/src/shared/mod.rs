pub mod materialization;
pub mod usecase;
