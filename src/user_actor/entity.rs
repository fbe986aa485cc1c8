use crate::actor_framework::Entity;
use crate::domain::{User, UserId};

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId { &self.id }

    fn assign_id(&mut self, id: UserId) {
        self.id = id;
    }

    /// Trims and validates the profile before it is first stored.
    fn on_create(&mut self) -> Result<(), String> {
        self.normalize();
        self.validate()
    }

    /// Applies the same profile rules to a replacement record.
    ///
    /// The previous record is not consulted: an update replaces every field.
    fn on_update(&mut self, _previous: &User) -> Result<(), String> {
        self.normalize();
        self.validate()
    }
}
