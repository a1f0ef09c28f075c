#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `vectors` loads SHA-256 known-answer tests and checks them against the
//! [`checksums`] engine. Two layouts are understood: CAVP response files
//! (`SHA256ShortMsg.rsp`, `SHA256LongMsg.rsp`, `SHA256Monte.rsp`) through
//! [`parse_rsp`], and JSON arrays of `{ "input", "hash" }` objects through
//! [`load_json`]. [`load_path`] reads a file and picks the parser.
//!
//! Monte Carlo files are replayed with [`monte_carlo`], which chains
//! [`monte_checkpoint`] 100 times from the file's seed.
//!
//! # Examples
//!
//! ```
//! use vectors::{parse_rsp, verify};
//!
//! let set = parse_rsp(
//!     "[L = 32]\n\nLen = 24\nMsg = 616263\n\
//!      MD = ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n",
//! )?;
//! let report = verify(&set);
//! assert!(report.is_success());
//! assert_eq!(report.passed, 1);
//! # Ok::<(), vectors::VectorError>(())
//! ```

mod error;
mod json;
mod load;
mod model;
mod monte;
mod rsp;
mod verify;

pub use error::VectorError;
pub use json::{JsonVector, load_json};
pub use load::{VectorFormat, load_path};
pub use model::{MessageVector, MonteSet, MonteVector, Origin, VectorSet};
pub use monte::{MONTE_CHECKPOINTS, MONTE_ITERATIONS, MonteCarlo, monte_carlo, monte_checkpoint};
pub use rsp::{decode_hex, parse_rsp};
pub use verify::{Failure, Report, VectorId, verify};
