//! Paragraph measurement: Unicode-aware word breaking, glyph metrics caching,
//! greedy line wrapping, and a bounded font-size search.
//!
//! The entry point is [`Measurer`], which owns a measurement backend and a
//! [`MetricsCache`]. [`Measurer::measure_paragraph`] lays text out once at a
//! fixed font size; [`Measurer::fit_paragraph`] binary-searches font sizes for
//! the largest layout that still satisfies the width/height constraints.
//! Neither draws anything: the produced [`MeasuredParagraph`] is geometry for
//! a downstream rasterizer or for the caller's own layout decisions.
//!
//! # Example
//!
//! ```
//! use text_fit::{HeuristicBackend, Px};
//! use text_fit::measure::{Measurer, ParagraphOptions};
//!
//! let mut measurer = Measurer::new(HeuristicBackend::default());
//! let options = ParagraphOptions {
//!     max_width: Px(240.0),
//!     max_height: Px(120.0),
//!     font_size: Px(24.0),
//!     min_font_size: Some(Px(8.0)),
//!     ..ParagraphOptions::default()
//! };
//!
//! let paragraph = measurer.fit_paragraph("Hello, wrapping world!", &options);
//! assert!(paragraph.font_size >= Px(8.0) && paragraph.font_size <= Px(24.0));
//! assert!(!paragraph.lines.is_empty());
//! ```

mod cache;
mod line;
mod paragraph;
mod words;

pub use cache::*;
pub use line::*;
pub use paragraph::*;
pub use words::*;
