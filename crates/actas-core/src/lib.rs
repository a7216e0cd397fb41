//! Actas Core Library
//!
//! Core grading logic for the actas report tool: roster parsing, resit
//! resolution, weighted grade aggregation, and the pass/fail partition.

pub mod config;
pub mod error;
pub mod grade;
pub mod logging;
pub mod partition;
pub mod report;
pub mod roster;
pub mod score;
