pub mod bitpack;
pub mod byte_reader;
