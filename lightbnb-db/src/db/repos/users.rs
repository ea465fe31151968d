//! User repository

use tracing::instrument;

use super::decode_first;
use crate::db::Executor;
use crate::error::DbError;
use crate::models::{NewUser, User};
use crate::query::users;

/// User repository
pub struct UserRepo<'a> {
    executor: &'a dyn Executor,
}

impl<'a> UserRepo<'a> {
    pub fn new(executor: &'a dyn Executor) -> Self {
        Self { executor }
    }

    /// Look a user up by email, ignoring case.
    #[instrument(skip_all)]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        let rows = self.executor.execute(&users::by_email(email)).await?;
        decode_first(rows, "user")
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbError> {
        let rows = self.executor.execute(&users::by_id(id)).await?;
        decode_first(rows, "user")
    }

    /// Insert a user and return the stored row.
    #[instrument(skip_all)]
    pub async fn create(&self, user: &NewUser) -> Result<User, DbError> {
        user.validate()?;

        let rows = self.executor.execute(&users::insert(user)).await?;
        decode_first(rows, "user")?.ok_or(DbError::EmptyResult { record: "user" })
    }
}
