//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept an open `&mut SqliteConnection` as the first argument.

pub mod seashell_repo;

pub use seashell_repo::SeaShellRepo;
