pub mod cli;
pub mod columns;
pub mod config;
pub mod copywriter;
pub mod dataset;
pub mod error;
pub mod ingest;
pub mod keywords;
pub mod metrics;
pub mod normalize;
pub mod rank;

pub use error::{Result, TkscoutError};
