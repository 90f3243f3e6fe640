//! Configuration failures surfaced by maze generation before any mutation happens.

use thiserror::Error;

use crate::catalog::{RoomType, WordCategory};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid {width}x{height} is below the minimum supported size of {minimum}x{minimum}")]
    GridTooSmall { width: usize, height: usize, minimum: usize },

    #[error("grid {width}x{height} exceeds the maximum supported size of {maximum}x{maximum}")]
    GridTooLarge { width: usize, height: usize, maximum: usize },

    #[error("max room size {max_room_size} must be at least {minimum}")]
    RoomSizeTooSmall { max_room_size: usize, minimum: usize },

    #[error("word pool '{category}' for {room_type} is empty")]
    EmptyWordPool { room_type: RoomType, category: WordCategory },

    #[error("shuffle bag needs at least one item")]
    EmptyPool,

    #[error("sentence template {index} is malformed: {reason}")]
    MalformedTemplate { index: usize, reason: String },

    #[error("sentence template rotation needs at least one template")]
    NoTemplates,
}
