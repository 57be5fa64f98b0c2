//! # Roster Members Crate
//!
//! Business rules for the member record: payload validation, existence
//! checks before writes, and the [`MemberRepo`] seam that lets the HTTP layer
//! run against either SQLite or an in-memory store.
//!
//! ## Usage
//!
//! ```rust
//! use roster_members::{MemberPayload, MemberService};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), roster_members::MemberError> {
//! let service = MemberService::new_for_testing();
//! let member = service
//!     .create(MemberPayload::new("Ada", "ada@x.com", "555", "1 Infinite Loop"))
//!     .await?;
//! assert_eq!(service.get(member.id).await?, Some(member));
//! # Ok(())
//! # }
//! ```

pub mod services;
pub mod types;
pub mod utils;

pub use roster_database::{Member, MemberFilter, MemberPayload, MemberRepository};

pub use services::{MemberRepo, MemberService, MockMemberRepository};
pub use types::{MemberError, MemberResult};
