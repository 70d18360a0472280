//! Sample records searched by the demo.

use std::fmt;

use sift_macros::Filterable;

/// A system user.
#[derive(Debug, Clone, PartialEq, Eq, Filterable)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        User {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// A product that can be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Filterable)]
pub struct Product {
    pub name: String,
}

impl Product {
    pub fn new(name: &str) -> Self {
        Product {
            name: name.to_string(),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        User::new("Joah", "MacKenzie"),
        User::new("Joab", "Maximilian"),
        User::new("Joash", "Joe"),
        User::new("Joel", "Bob"),
        User::new("Michael", "Joey"),
        User::new("John", "Doe"),
    ]
}

pub fn sample_products() -> Vec<Product> {
    vec![Product::new("Joe's"), Product::new("Johnsons")]
}
