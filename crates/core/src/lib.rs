//! Shared domain building blocks for the seashell catalogue.
//!
//! Everything here is storage- and transport-agnostic: id and timestamp
//! types, the domain error enum, record field rules, image upload
//! verification and the blob storage capability used for image files.

pub mod error;
pub mod seashell;
pub mod storage;
pub mod types;
pub mod upload;
