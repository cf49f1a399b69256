pub mod cleaner;

pub use cleaner::{clean_text, strip_diacritics, CleanEngine, CleanOptions, CleanResult};
