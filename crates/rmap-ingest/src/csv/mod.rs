//! CSV reading utilities.

mod header;
mod reader;

pub use header::{is_blank_header, normalize_headers};
pub use reader::{
    MAX_INPUT_FILE_SIZE, check_file_size, check_file_size_with_limit, load, load_file,
    validate_encoding,
};
