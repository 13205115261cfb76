//! Shared application state for the HTTP surface.

use std::sync::Arc;

use crate::application::handlers::account::{
    DeleteUserHandler, ListUsersHandler, LoginHandler, RegisterUserHandler, SetUserRoleHandler,
};
use crate::application::handlers::album::{
    CreateAlbumHandler, DeleteAlbumHandler, ListAlbumsHandler, UpdateAlbumHandler,
};
use crate::application::handlers::contact::{
    DeleteContactHandler, ListContactsHandler, SubmitContactHandler,
};
use crate::application::handlers::favorite::{ListFavoritesHandler, ToggleFavoriteHandler};
use crate::ports::{
    AlbumRepository, ContactRepository, FavoriteRepository, PasswordHasher, SessionValidator,
    TokenIssuer, UserRepository,
};

/// Arc-wrapped ports, cloned per request. Handlers are built on demand.
#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<dyn AlbumRepository>,
    pub users: Arc<dyn UserRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub favorites: Arc<dyn FavoriteRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub session_validator: Arc<dyn SessionValidator>,
}

impl AppState {
    // Albums

    pub fn list_albums_handler(&self) -> ListAlbumsHandler {
        ListAlbumsHandler::new(self.albums.clone())
    }

    pub fn create_album_handler(&self) -> CreateAlbumHandler {
        CreateAlbumHandler::new(self.albums.clone())
    }

    pub fn update_album_handler(&self) -> UpdateAlbumHandler {
        UpdateAlbumHandler::new(self.albums.clone())
    }

    pub fn delete_album_handler(&self) -> DeleteAlbumHandler {
        DeleteAlbumHandler::new(self.albums.clone())
    }

    // Accounts

    pub fn register_user_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(self.users.clone(), self.password_hasher.clone())
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(
            self.users.clone(),
            self.password_hasher.clone(),
            self.token_issuer.clone(),
        )
    }

    pub fn list_users_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.users.clone())
    }

    pub fn set_user_role_handler(&self) -> SetUserRoleHandler {
        SetUserRoleHandler::new(self.users.clone())
    }

    pub fn delete_user_handler(&self) -> DeleteUserHandler {
        DeleteUserHandler::new(self.users.clone())
    }

    // Contacts

    pub fn submit_contact_handler(&self) -> SubmitContactHandler {
        SubmitContactHandler::new(self.contacts.clone())
    }

    pub fn list_contacts_handler(&self) -> ListContactsHandler {
        ListContactsHandler::new(self.contacts.clone())
    }

    pub fn delete_contact_handler(&self) -> DeleteContactHandler {
        DeleteContactHandler::new(self.contacts.clone())
    }

    // Favorites

    pub fn toggle_favorite_handler(&self) -> ToggleFavoriteHandler {
        ToggleFavoriteHandler::new(self.favorites.clone())
    }

    pub fn list_favorites_handler(&self) -> ListFavoritesHandler {
        ListFavoritesHandler::new(self.favorites.clone())
    }
}
