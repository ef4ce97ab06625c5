pub mod message_file;

pub use message_file::MessageFile;
