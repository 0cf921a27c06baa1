pub mod normalize;
pub mod token;
pub mod tokenizer;
