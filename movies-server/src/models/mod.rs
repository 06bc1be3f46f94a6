//! Domain models shared by the store and the HTTP layer

pub mod movie;

pub use movie::{Movie, NewMovie};
