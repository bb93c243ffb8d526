//! sea-orm entities for the tables in [`crate::declaration`].

pub mod art;
pub mod user;

pub mod prelude {
    pub use super::art::Entity as Art;
    pub use super::user::Entity as User;
}
