use serde::{Deserialize, Serialize};

/// Identifier type for users.
pub type UserId = i64;

const MAX_NAME_LEN: usize = 100;
const MAX_EMAIL_LEN: usize = 255;

/// Represents a registered user in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
}

/// Payload for creating a user. The directory picks the id when it is omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub id: Option<UserId>,
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
}

/// Payload for replacing a stored user. The id comes from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within the directory
    /// * `name` - User's given name
    /// * `email` - User's email address
    #[cfg(test)]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            last_name: String::new(),
            email: email.into(),
        }
    }

    /// Trim every profile field in place.
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = self.email.trim().to_string();
    }

    /// Check the profile fields, returning a message for the first violation.
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(format!("Name cannot exceed {MAX_NAME_LEN} characters"));
        }

        if self.last_name.trim().chars().count() > MAX_NAME_LEN {
            return Err(format!("Last name cannot exceed {MAX_NAME_LEN} characters"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email cannot be empty".to_string());
        }
        // Basic email validation
        if !email.contains('@') || !email.contains('.') {
            return Err("Invalid email format".to_string());
        }
        if email.chars().count() > MAX_EMAIL_LEN {
            return Err(format!("Email cannot exceed {MAX_EMAIL_LEN} characters"));
        }

        Ok(())
    }
}

impl NewUser {
    /// Split into an optional requested id and the user record to store.
    ///
    /// The record carries id 0 when none was requested; the directory
    /// overwrites it on allocation.
    pub fn into_parts(self) -> (Option<UserId>, User) {
        let user = User {
            id: self.id.unwrap_or_default(),
            name: self.name,
            last_name: self.last_name,
            email: self.email,
        };
        (self.id, user)
    }
}

impl UserUpdate {
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}
