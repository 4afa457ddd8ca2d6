//! Chunked speed reading: text is shown one to five words at a time, paced
//! from a words-per-minute rate with length and punctuation adjustments.
//!
//! - [`reading`]: tokenizer, delay model, chunk cursor
//! - [`engine`]: playback controller, background run loop, render sink seam
//! - [`input`]: text sources (inline, file, clipboard)
//! - [`app`] and [`ui`]: the terminal front-end

pub mod app;
pub mod engine;
pub mod input;
pub mod reading;
pub mod ui;
