pub mod accuracy;
pub mod config_ops;
pub mod text_ops;
pub mod word_ops;
