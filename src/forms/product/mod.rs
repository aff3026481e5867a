mod add;
mod approval;
mod filter;
mod vote;

pub use add::AddProduct as Add;
pub use approval::Approval;
pub use filter::{ProductListQuery, TimeFilter};
pub use vote::Upvote;
