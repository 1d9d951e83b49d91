//! Custom actions for the User and UserDocument stores.

use crate::model::{UserDocument, UserId, UserStatusChange};

#[derive(Debug, Clone)]
pub enum UserAction {
    /// `PATCH /users` with `{userId, status}`. Accepts or rejects a registration.
    UpdateStatus(UserStatusChange),
}

#[derive(Debug, Clone)]
pub enum UserDocumentAction {
    /// `GET /userdocuments/{user_id}`. Replaces the collection with that user's documents.
    FetchForUser(UserId),
}

#[derive(Debug, Clone)]
pub enum UserDocumentActionResult {
    FetchedForUser(Vec<UserDocument>),
}
