//! User domain models.
//!
//! Users have no table of their own. A user exists once any user property has been
//! assigned to their id, and is represented by the set of those assignments.

use std::collections::BTreeMap;

use crate::model::user::{PaginatedUsersDto, UserDto};

/// User identified by id, with assigned property values keyed by property name.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub properties: BTreeMap<String, String>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            properties: self.properties,
        }
    }
}

/// Page of users with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
