pub mod segmenter;
pub mod store;
