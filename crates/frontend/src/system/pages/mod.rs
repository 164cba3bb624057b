pub mod about;
pub mod contact;
pub mod login;
pub mod not_found;
pub mod policy;
pub mod register;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use policy::{PolicyKind, PolicyPage};
pub use register::RegisterPage;
