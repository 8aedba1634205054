//! Page generation modules for different view types
//!
//! This module organizes HTML page generators by page type (listing, date,
//! search, post). Each page module handles its specific view logic and
//! utilizes shared components from the components module.

pub mod all;
pub mod date;
pub mod index;
pub mod post;
pub mod search;
