use crate::reading::token::Token;
use std::ops::Range;

/// The three rows shown to the reader.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChunkWindow {
    pub previous: String,
    pub current: String,
    pub next: String,
}

/// Token range of the chunk starting at `index`, or `None` when `index` is
/// outside the sequence. The end is clamped to the sequence length.
pub fn chunk_range(index: isize, chunk_size: usize, len: usize) -> Option<Range<usize>> {
    if index < 0 || index as usize >= len {
        return None;
    }
    let start = index as usize;
    let end = start.saturating_add(chunk_size.max(1)).min(len);
    Some(start..end)
}

pub fn chunk_at(index: isize, chunk_size: usize, tokens: &[Token]) -> String {
    chunk_range(index, chunk_size, tokens.len())
        .map(|range| {
            tokens[range]
                .iter()
                .map(Token::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

/// Previous, current and next chunks around `index`; no wraparound.
pub fn window_at(index: isize, chunk_size: usize, tokens: &[Token]) -> ChunkWindow {
    let step = chunk_size.max(1) as isize;
    ChunkWindow {
        previous: chunk_at(index - step, chunk_size, tokens),
        current: chunk_at(index, chunk_size, tokens),
        next: chunk_at(index + step, chunk_size, tokens),
    }
}

/// Position of the next chunk to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkCursor {
    index: usize,
    chunk_size: usize,
}

impl ChunkCursor {
    pub fn new(chunk_size: usize) -> Self {
        Self {
            index: 0,
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Takes effect on the next window; tokens already shown are not realigned.
    pub fn set_chunk_size(&mut self, chunk_size: usize) {
        self.chunk_size = chunk_size.max(1);
    }

    /// Moves forward by exactly the current chunk size. May overshoot the end.
    pub fn advance(&mut self) {
        self.index = self.index.saturating_add(self.chunk_size);
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn is_finished(&self, total_tokens: usize) -> bool {
        self.index >= total_tokens
    }

    pub fn window(&self, tokens: &[Token]) -> ChunkWindow {
        window_at(self.index as isize, self.chunk_size, tokens)
    }

    pub fn current_tokens<'a>(&self, tokens: &'a [Token]) -> &'a [Token] {
        match chunk_range(self.index as isize, self.chunk_size, tokens.len()) {
            Some(range) => &tokens[range],
            None => &[],
        }
    }
}
