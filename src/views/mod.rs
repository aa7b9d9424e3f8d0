pub mod about;
pub mod chat;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod theme;

pub use about::About;
pub use chat::ChatWidget;
pub use contact::Contact;
pub use dashboard::Dashboard;
pub use home::Home;
pub use not_found::NotFound;
pub use theme::{ThemeDemo, ThemeToggle};
