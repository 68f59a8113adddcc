//! Technical report plugin
//!
//! Lists every equipment record in a bordered four-column table under a
//! centered title:
//!
//! ```text
//!          Technical Report — Single-Line Diagram
//!
//! +-----------+--------+-------------+--------------+
//! | Equipment | Type   | Power (MVA) | Voltage (kV) |
//! +-----------+--------+-------------+--------------+
//! | T1        | Transf | 10          | 115          |
//! | 52-1      | Breake | nan         | 115          |
//! +-----------+--------+-------------+--------------+
//! ```

mod layout;
mod renderer;
mod text;

pub use layout::*;
pub use renderer::{PdfRenderer, TextStyle, PDF_MIME_TYPE};
pub use text::{encode_win_ansi, helvetica_width};
