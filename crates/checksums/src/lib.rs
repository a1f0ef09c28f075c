#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod digest;
pub mod hex;
mod sha256;

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub mod parallel;

pub use digest::{DigestParseError, Sha256Digest};
pub use hex::HexError;
pub use sha256::{
    BLOCK_LEN, DIGEST_LEN, H0, K, Sha256, big_sigma0, big_sigma1, block_count, choose, compress,
    digest, hash, majority, pad, padded_len, rotr, schedule, small_sigma0, small_sigma1,
};
