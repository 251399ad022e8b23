//! Page components.

mod login;
mod manage;
mod members;
mod register;
mod synagogues;

pub use login::LoginPage;
pub use manage::ManagePage;
pub use members::MembersPage;
pub use register::RegisterPage;
pub use synagogues::SynagoguesPage;
