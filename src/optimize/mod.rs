//! Cut-list optimization and purchase summaries.

mod cut_list;
mod purchase;

pub use cut_list::optimize_boards;
pub use purchase::summarize_purchase;
