pub mod dropdown;
pub mod form;
pub mod receipt;
pub mod tag;
