pub mod tar_reader;
pub mod tar_writer;
