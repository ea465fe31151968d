//! User statements

use super::{SqlValue, Statement};
use crate::models::NewUser;

pub fn by_email(email: &str) -> Statement {
    Statement::new(
        "SELECT * FROM users WHERE LOWER(users.email) = LOWER($1)",
        vec![SqlValue::from(email)],
    )
}

pub fn by_id(id: i32) -> Statement {
    Statement::new(
        "SELECT * FROM users WHERE users.id = $1",
        vec![SqlValue::from(id)],
    )
}

pub fn insert(user: &NewUser) -> Statement {
    Statement::new(
        "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *",
        vec![
            SqlValue::from(user.name.as_str()),
            SqlValue::from(user.email.as_str()),
            SqlValue::from(user.password.as_str()),
        ],
    )
}
