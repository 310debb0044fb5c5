//! Pagination module
//!
//! Supports: Next URL in the response body, single page
//!
//! # Overview
//!
//! A paginator inspects each page body and decides whether another page
//! exists and where to fetch it from. The roster loader drives it one page
//! at a time, so page N+1 is never requested before page N has been seen.

mod strategies;
mod types;

pub use strategies::{NextUrlPaginator, SinglePagePaginator};
pub use types::{extract_path, NextPage, PaginationState, Paginator};
