pub mod common_affix_len;
pub mod ids;
pub mod lists;
pub mod union_find;
pub mod unique_check;
