//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) and query handlers (read) live side by side,
//! grouped by the resource they act on.

pub mod handlers;

pub use handlers::account::{
    DeleteUserCommand, DeleteUserHandler, EnsureAdminCommand, EnsureAdminHandler,
    EnsureAdminOutcome, ListUsersHandler, LoginCommand, LoginHandler, LoginResult,
    RegisterUserCommand, RegisterUserHandler, SetUserRoleCommand, SetUserRoleHandler,
};
pub use handlers::album::{
    CreateAlbumCommand, CreateAlbumHandler, DeleteAlbumCommand, DeleteAlbumHandler,
    ListAlbumsHandler, UpdateAlbumCommand, UpdateAlbumHandler,
};
pub use handlers::contact::{
    DeleteContactCommand, DeleteContactHandler, ListContactsHandler, SubmitContactCommand,
    SubmitContactHandler,
};
pub use handlers::favorite::{
    ListFavoritesHandler, ListFavoritesQuery, ToggleFavoriteCommand, ToggleFavoriteHandler,
    ToggleFavoriteResult,
};
