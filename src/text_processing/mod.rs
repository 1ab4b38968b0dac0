pub mod number_words;
pub mod radio_read;

pub use radio_read::normalize;
