pub mod dev;
pub mod guild;
pub mod landing;
pub mod legal;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod ticket;

pub use landing::Landing;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
