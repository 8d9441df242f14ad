pub mod constants;
pub mod string_utils;

pub use constants::*;
pub use string_utils::{char_len, is_blank, leading_integer, safe_truncate_chars};
