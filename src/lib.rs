//! A reusable canonical-Huffman decode core.
//!
//! This crate is the shared primitive several bit-oriented codecs need:
//! DEFLATE, JPEG, HTTP/2 HPACK and Brotli all build a canonical Huffman
//! code from a table of codeword lengths and then decode symbols from a
//! bitstream against it. This crate builds the decode-ready [`Table`] /
//! [`TableExt`] structures from a length table and decodes individual
//! symbols at high throughput; it does not parse any container format,
//! assign lengths itself, or own the input buffer.
//!
//! Pipeline, leaves first:
//! 1. [`bitreverse`] -- 8-bit and whole-word bit reversal.
//! 2. [`bitreader`] -- pulls bits out of a byte buffer into a register word.
//! 3. [`builder`] -- turns a length table into a [`table::Table`] / [`table::TableExt`].
//! 4. [`decode`] -- decodes one symbol (and optionally its extra bits) per call.
//!
//! The core is synchronous, allocation-free on the decode path, and has no
//! internal mutable state: a built [`table::Table`] is `Send + Sync` and may
//! be shared across threads for concurrent decoding without synchronization.

#[macro_use]
extern crate static_assertions;

pub mod bitreader;
pub mod bitreverse;
pub mod builder;
pub mod decode;
pub mod deflate_tables;
pub mod error;
pub mod table;
pub(crate) mod unchecked;

pub use bitreader::{read, BitCursor, WORD_BITS};
pub use bitreverse::{rev8, rev8_full, rev_word as reverse_bits};
pub use builder::{build_lsb, build_lsb_ext, build_msb, build_msb_ext};
pub use decode::{
    decode_lsb, decode_lsb_ext, decode_lsb_ext_with_sym, decode_msb, decode_msb_ext,
    decode_msb_ext_with_sym,
};
pub use error::BuildError;
pub use table::{
    Extra, FastEntry, FastExtEntry, Table, TableExt, FAST_BITS, MAX_CODE_LENGTH, SENTINEL,
};
