pub mod naming;
pub mod reserved;

pub use naming::{check_constants, constant_ident, validate_type_name};
pub use reserved::{is_keyword, is_reserved_word};
