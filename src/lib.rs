// src/lib.rs

//! causelist: eCourts India cause-list and case-status fetcher.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(feature = "web")]
pub mod web;
