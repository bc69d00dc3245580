pub mod pool;
pub mod schedule_book;

pub use pool::*;
pub use schedule_book::*;
