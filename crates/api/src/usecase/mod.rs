//! Application layer: request shapes and orchestration over the repositories.

pub mod seashell;
