//! Identifier Codec Adapter - content:// 书籍标识

mod book_uri_codec;

pub use book_uri_codec::*;
