//! Core abstractions for document generation
//!
//! This module defines the traits every pipeline stage implements
//! (parser, database, layout, renderer) along with the shared data model.

mod database;
mod error;
mod layout;
pub mod logging;
mod parser;
mod renderer;
mod types;

pub use database::*;
pub use error::*;
pub use layout::*;
pub use logging::*;
pub use parser::*;
pub use renderer::*;
pub use types::*;
