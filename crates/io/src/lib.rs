//! # vmp-io
//!
//! Read row-stochastic transition matrices from plain-text files and render
//! power-iteration results as delimited lines. Bridges the on-disk format
//! into the [`vmp_markov`] types.

mod error;
mod reader;
mod validate;
mod writer;

pub use error::IoError;
pub use reader::{
    ReaderConfig, determine_order, determine_order_with, load_matrix, parse_matrix, parse_order,
    read_matrix,
};
pub use writer::{WriterConfig, format_result, write_result};
