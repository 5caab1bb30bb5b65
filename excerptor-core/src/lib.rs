//! Word-safe excerpt breaking for long texts
//!
//! This crate cuts long chapter text into readable excerpts. Given an anchor
//! offset and a length window, [`TextBreaker`] finds the nearest sentence- or
//! paragraph-level break without ever splitting a word.
//!
//! # Architecture
//!
//! - **Segmentation**: a [`Segmenter`] reports word boundaries (UAX#29 by
//!   default) and a [`Boundaries`] table navigates them by character offset.
//! - **Search**: [`TextBreaker`] walks boundaries in the configured
//!   [`ReadDirection`] and picks a breakpoint according to the
//!   [`BreakingPolicy`].
//! - **Configuration**: [`BreakerConfig`] is serializable and loads from TOML.
//!
//! # Example
//!
//! ```rust
//! use excerptor_core::TextBreaker;
//!
//! let breaker = TextBreaker::new();
//! let text = "Hello world. This is a test.";
//!
//! // Skip 5 characters, then cut at the first sentence end within 20
//! let index = breaker.find_closest_breaking_point(text, 0, 5, Some(20)).unwrap();
//! assert_eq!(index, 12);
//!
//! let excerpt = breaker.break_text(text, 0, 5, Some(20)).unwrap();
//! assert_eq!(excerpt, Some("Hello world."));
//! ```

pub mod boundaries;
pub mod breaker;
pub mod config;
pub mod error;
pub mod excerpt;
pub mod input;
pub mod policy;
pub mod segmenter;

pub use boundaries::Boundaries;
pub use breaker::TextBreaker;
pub use config::{defaults, BreakerConfig, ConfigBuilder};
pub use error::{Error, Result};
pub use excerpt::{Excerpt, Excerpts, OwnedExcerpt, Window};
pub use input::Input;
pub use policy::{BreakingPolicy, ReadDirection};
pub use segmenter::{Segmenter, UnicodeWordSegmenter};
