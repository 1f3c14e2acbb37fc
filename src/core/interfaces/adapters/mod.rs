mod clipboard_writer;

pub use clipboard_writer::ClipboardWriter;
