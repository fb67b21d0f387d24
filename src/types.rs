pub mod side;
pub mod source_target;
