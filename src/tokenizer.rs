pub mod token;
pub mod whitespace_tokenizer;
