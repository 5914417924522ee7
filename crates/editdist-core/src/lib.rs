pub mod batch;
pub mod config;
pub mod distance;
pub mod error;
pub mod limits;
pub mod output;
pub mod similarity;
pub mod suggest;

pub use distance::{distance, distance_by, distance_chars, distance_within, DistanceMatrix};
pub use error::{Error, Result};
