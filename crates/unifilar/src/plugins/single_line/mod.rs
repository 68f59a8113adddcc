//! Single-line diagram plugin
//!
//! Draws one symbol group per equipment record, left to right:
//!
//! ```text
//!   (T1)----[52]----|BB|----(X)
//!   T1      52      BB      X
//!   10 MVA          ...
//!   115 kV
//! ```
//!
//! Layout is computed first as plain positioned primitives
//! ([`SingleLineLayoutAlgorithm`]); [`DxfRenderer`] then writes them out.

mod layout;
mod renderer;
mod style;

pub use layout::*;
pub use renderer::{DxfRenderer, DXF_MIME_TYPE};
pub use style::{EntityStyle, StyleClass, BUS_LINEWEIGHT};
