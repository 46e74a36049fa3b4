//! # Wire format
//!
//! A stream is a flat sequence of fields. There is no schema and no nesting;
//! the order of fields is the only structure, and the reader tracks it.
//!
//! Every field starts with one header byte. Its low nibble is the [`FieldType`] code;
//! its high nibble ("meta") means something only for `Short` and `Vector`.
//! Fixed-size payloads are little-endian regardless of the host.
//!
//! ```text
//! struct Int8 .. UInt64, Float32, Float64 {
//!     header:     u8,             // type | 0 << 4
//!     body:       [u8; 1, 2, 4 or 8],
//! }
//!
//! struct ULeb128 or SLeb128 {
//!     header:     u8,             // type | 0 << 4
//!     body:       [u8; 1..=10],   // minimal LEB128
//! }
//!
//! struct Short {
//!     header:     u8,             // 12 | value << 4, value in 0..=15
//! }
//!
//! struct Vector (len < 15) {
//!     header:     u8,             // 13 | len << 4
//!     body:       [u8; len],
//! }
//!
//! struct Vector (len >= 15) {
//!     header:     u8,             // 13 | 15 << 4
//!     len:        ULEB128,
//!     body:       [u8; len],
//! }
//!
//! struct Eof {
//!     header:     u8,             // 15
//! }
//! ```
//!
//! Type code 14 is reserved. A stream may end with an `Eof` field or simply
//! run out of bytes on a field boundary; readers treat both the same.

mod decoder;
mod encoder;
mod error;
mod input;
pub mod leb128;
mod value;
pub mod wire;

pub use decoder::*;
pub use encoder::*;
pub use error::*;
pub use input::*;
pub use value::*;
pub use wire::FieldType;
