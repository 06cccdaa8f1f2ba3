//! Core types shared by every provider

pub mod client;
pub mod error;
pub mod mailbox;
pub mod token;
pub mod user;

pub use client::OAuth2Client;
pub use error::ProviderError;
pub use token::Token;
pub use user::AuthUser;
