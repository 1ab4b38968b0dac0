//! Copy assembly: turns a brief into a draft radio spot
//!
//! The draft is plain template text sized to the spot length. It still
//! carries written numbers, prices and URLs; the delivery boundary runs it
//! through `text_processing::normalize` before returning it.

pub mod brief;
pub mod builder;
pub mod duration;

pub use brief::Brief;
pub use builder::{assemble, build_script, pad_to_duration, word_count};
pub use duration::{SpotDuration, WordTargets};
