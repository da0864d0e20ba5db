//! Synonym handling for word substitution.

pub mod dictionary;

pub use dictionary::SynonymDictionary;
