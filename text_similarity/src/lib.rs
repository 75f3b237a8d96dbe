//! Similarity percentage of two texts, based on the optimal string alignment
//! (restricted Damerau-Levenshtein) distance.
//!
//! ```
//! use text_similarity::{format_percentage, similarity};
//!
//! let score = similarity("今天是星期天，天气晴，今天晚上我要去看电影。", "今天是周天，天气晴朗，我晚上要去看电影。");
//! assert_eq!(format_percentage(score), "72.73");
//! ```
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(unused_imports)]
#![warn(missing_docs)]

pub use crate::distance::{damerau_levenshtein, distance};
pub use crate::error::{Error, Operand, Result};
pub use crate::format::{format_percentage, DECIMAL_PLACES};
pub use crate::score::{percentage, similarity, similarity_chars, try_similarity};

mod distance;
mod error;
mod format;
mod score;
