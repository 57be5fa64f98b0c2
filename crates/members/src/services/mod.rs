//! Business logic services for member management.

pub mod member_service;
pub mod mock_repositories;

pub use member_service::{MemberRepo, MemberService};
pub use mock_repositories::MockMemberRepository;
