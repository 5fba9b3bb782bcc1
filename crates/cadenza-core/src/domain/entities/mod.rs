//! Catalog entities: users, albums, and songs.
//!
//! Albums and songs reference each other only by denormalized name; there
//! is no foreign key between them and no referential integrity is enforced.

mod album;
mod song;
mod user;

pub use album::Album;
pub use song::Song;
pub use user::User;
