pub mod builder;

pub use builder::{fingerprint, CorpusBuilder, CorpusEntry, CorpusStats};
