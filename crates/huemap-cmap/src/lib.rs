//! Lexer, parser, and AST for `.cmap` colormap definition files.
//!
//! This crate has no dependencies so editors and linters can read `.cmap`
//! files without pulling in the engine.
//!
//! # Format
//!
//! ```text
//! // ice and fire
//! resolution 256
//! domain -1, 1
//! -1.0: 0 0 1
//!  0.0: #ffffff
//!  0.5: 1, 1, 0
//!  1.0: #ff0000ff
//! ```
//!
//! - `value: r g b [a]` with optional commas, or `value: #rrggbb[aa]`.
//! - `resolution N` sets the sample count; `domain MIN MAX` rescales the
//!   finished map.
//! - `//` and `/* */` comments.
//!
//! # Quick start
//!
//! ```rust
//! use huemap_cmap::parse_str;
//!
//! let doc = parse_str("0: 0 0 0\n1: #ffffff").unwrap();
//! assert_eq!(doc.stops.len(), 2);
//! assert_eq!(doc.stops[1].channels, vec![1.0, 1.0, 1.0, 1.0]);
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{CmapDocument, Stop};
pub use error::ParseError;
pub use parser::{MAX_RESOLUTION, parse_str};
