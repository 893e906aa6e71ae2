use chrono::Utc;

use tally_shared::{NewUser, UpdateConnections, User, UserId};

use crate::error::{Result, StoreError};
use crate::store::Store;

impl Store {
    /// Create a user with a freshly minted id.
    pub fn create_user(&mut self, new: NewUser) -> Result<User> {
        self.create_user_with_id(UserId::new(), new)
    }

    /// Create a user under a caller-chosen id (used for the fixed demo
    /// identity).  Rejects duplicate usernames.
    pub fn create_user_with_id(&mut self, id: UserId, new: NewUser) -> Result<User> {
        if self.get_user_by_username(&new.username).is_some() {
            return Err(StoreError::DuplicateUsername(new.username));
        }

        let user = User {
            id: id.clone(),
            username: new.username,
            display_name: new.display_name,
            email: new.email,
            avatar_url: new.avatar_url,
            twitter_handle: new.twitter_handle,
            svm_wallet_address: new.svm_wallet_address,
            total_points: 0,
            created_at: Utc::now(),
        };

        self.users.insert(id.clone(), user.clone());
        self.user_order.push(id);
        Ok(user)
    }

    pub fn get_user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|user| user.username == username)
    }

    /// Update a user's external-account links.  Fields absent from the
    /// payload keep their stored value.
    pub fn update_connections(
        &mut self,
        id: &UserId,
        connections: UpdateConnections,
    ) -> Result<User> {
        let user = self
            .users
            .get_mut(id)
            .ok_or_else(|| StoreError::UserNotFound(id.clone()))?;

        if let Some(handle) = connections.twitter_handle {
            user.twitter_handle = Some(handle);
        }
        if let Some(address) = connections.svm_wallet_address {
            user.svm_wallet_address = Some(address);
        }

        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            display_name: username.to_uppercase(),
            email: None,
            avatar_url: None,
            twitter_handle: None,
            svm_wallet_address: None,
        }
    }

    #[test]
    fn create_and_fetch() {
        let mut store = Store::new();
        let created = store.create_user(new_user("alice")).unwrap();

        let fetched = store.get_user(&created.id).unwrap();
        assert_eq!(fetched.username, "alice");
        assert_eq!(fetched.total_points, 0);
        assert_eq!(store.get_user_by_username("alice").unwrap().id, created.id);
    }

    #[test]
    fn duplicate_username_rejected() {
        let mut store = Store::new();
        store.create_user(new_user("alice")).unwrap();

        let err = store.create_user(new_user("alice")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateUsername(_)));
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn update_connections_is_partial() {
        let mut store = Store::new();
        let user = store.create_user(new_user("alice")).unwrap();

        store
            .update_connections(
                &user.id,
                UpdateConnections {
                    twitter_handle: Some("alice_online".into()),
                    svm_wallet_address: None,
                },
            )
            .unwrap();
        let updated = store
            .update_connections(
                &user.id,
                UpdateConnections {
                    twitter_handle: None,
                    svm_wallet_address: Some("9xQeWvG816bUx9EP".into()),
                },
            )
            .unwrap();

        // The second update must not clobber the handle set by the first.
        assert_eq!(updated.twitter_handle.as_deref(), Some("alice_online"));
        assert_eq!(updated.svm_wallet_address.as_deref(), Some("9xQeWvG816bUx9EP"));
    }

    #[test]
    fn update_connections_unknown_user() {
        let mut store = Store::new();
        let err = store
            .update_connections(&UserId::from_raw("ghost"), UpdateConnections::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound(_)));
    }
}
