pub mod snippet_extractor;

pub use snippet_extractor::SnippetExtractor;
