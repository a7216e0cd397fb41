//! Command implementations for actas

pub mod dispatch;
pub mod grades;
pub mod helpers;
pub mod report;
