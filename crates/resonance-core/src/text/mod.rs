//! Text statistics.
//!
//! Stateless functions that reduce a text to scalars: a tokenizer, word and
//! character Shannon entropy, character-bigram perplexity and bag-of-words
//! cosine distance. None of them touch affect state, so they are safe to call
//! concurrently without locking.
//!
//! Degenerate inputs map to fixed fallbacks rather than errors:
//!
//! | Function | Empty input |
//! |----------|-------------|
//! | [`word_entropy`] | entropy `0`, score `0` |
//! | [`char_entropy`] | `0` |
//! | [`perplexity`] | `1.0` |
//! | [`semantic_distance`] | `1.0` |

mod distance;
mod entropy;
mod perplexity;
mod tokenize;


pub use distance::semantic_distance;
pub use entropy::{char_entropy, word_entropy, word_entropy_tokens, word_entropy_with, WordEntropy};
pub use perplexity::perplexity;
pub use tokenize::tokenize;
