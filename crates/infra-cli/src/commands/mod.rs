//! Command implementations for infra-cli

pub mod check;
pub mod list;
pub mod load;
pub mod render;

pub use check::run_check;
pub use list::run_arns;
pub use load::run_load;
pub use render::run_render;
