//! stctok: bounded, caller-buffered string tokenizing with selectable
//! handling of adjacent break characters.

pub mod demo;
pub mod error;
pub mod search;
pub mod stctok;
pub mod str;
