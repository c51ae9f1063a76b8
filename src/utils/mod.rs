pub mod extractor;
pub mod file_magic;
pub mod filename;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeBatchIdI64, SafeClassIdI64, SafeFileToken, SafeIdI64, SafeNoteIdI64,
    SafeNotificationIdI64, SafeTraineeIdI64, SafeUserIdI64,
};
pub use file_magic::validate_magic_bytes;
pub use filename::sanitize_stored_name;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
