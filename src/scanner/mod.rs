pub mod test_scanner;

pub use test_scanner::{TestFile, TestScanner};
