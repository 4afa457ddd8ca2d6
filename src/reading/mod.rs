pub mod cursor;
pub mod ovp;
pub mod state;
pub mod timing;
pub mod token;
pub mod tokenizer;

pub use cursor::{window_at, ChunkCursor, ChunkWindow};
pub use ovp::{calculate_anchor_position, split_at_anchor};
pub use state::ReadingState;
pub use timing::{base_delay_seconds, chunk_delay, delay_for, time_remaining, TimeRemaining};
pub use token::Token;
pub use tokenizer::{join_tokens, preprocess_text, tokenize_text};
