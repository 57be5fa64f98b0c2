//! Member entity definitions

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `members` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: i64,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// The mutable fields of a member, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPayload {
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl MemberPayload {
    pub fn new(
        first_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Attach a store-assigned id.
    pub fn into_member(self, id: i64) -> Member {
        Member {
            id,
            first_name: self.first_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
        }
    }
}

/// Listing filter. Both fields are case-sensitive substring matches; an
/// absent or empty value matches every member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberFilter {
    pub first_name: Option<String>,
    pub address: Option<String>,
}

impl MemberFilter {
    pub fn by_first_name(first_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Drop empty criteria so they bind as NULL.
    pub fn normalized(&self) -> Self {
        fn keep(value: &Option<String>) -> Option<String> {
            value.as_ref().filter(|v| !v.is_empty()).cloned()
        }

        Self {
            first_name: keep(&self.first_name),
            address: keep(&self.address),
        }
    }

    pub fn is_empty(&self) -> bool {
        let normalized = self.normalized();
        normalized.first_name.is_none() && normalized.address.is_none()
    }

    /// In-process equivalent of the SQL predicate used by `MemberRepository::list`.
    pub fn matches(&self, member: &Member) -> bool {
        let normalized = self.normalized();
        let first_name_ok = normalized
            .first_name
            .as_deref()
            .map_or(true, |needle| member.first_name.contains(needle));
        let address_ok = normalized
            .address
            .as_deref()
            .map_or(true, |needle| member.address.contains(needle));
        first_name_ok && address_ok
    }
}
