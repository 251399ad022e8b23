//! Reusable UI components.

mod loading;
mod member_row;
mod members_table;
mod nav_bar;
mod steps;

pub use loading::Loading;
pub use member_row::MemberRow;
pub use members_table::MembersTable;
pub use nav_bar::NavBar;
pub use steps::Steps;
