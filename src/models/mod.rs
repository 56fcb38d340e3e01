pub mod role;

pub use role::{JobPosting, RoleProfile, SearchResult};
