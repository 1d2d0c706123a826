//! Rule predicates
//!
//! Each submodule holds the pure checks for one family of rules. The
//! catalog decides which check backs which rule name.

mod fields;
mod length;
mod variety;

pub use fields::{match_check, no_spaces_check, not_empty_check};
pub use length::{max_length_check, min_length_check};
pub use variety::{has_capital, has_letter, has_lowercase, has_number, has_special_char};
