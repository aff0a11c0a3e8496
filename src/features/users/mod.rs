pub mod client;
pub mod types;

pub use types::{UserAccount, UserAccountForm, UserStatusUpdate};
