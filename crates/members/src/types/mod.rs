pub mod errors;

pub use errors::{MemberError, MemberResult};
