pub mod books;
pub mod core;
pub mod utils;
