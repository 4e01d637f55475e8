pub mod lead;
pub mod user;

pub use lead::{Lead, LeadStatus, LeadType, Note};
pub use user::{User, UserRole};
