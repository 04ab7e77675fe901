mod writer;

pub use writer::JsonFileWriter;
