pub mod chat;
pub mod config;
pub mod contact;
pub mod storage;
pub mod theme;
pub mod theme_store;
pub mod types;

#[cfg(feature = "ui")]
pub mod ui;
#[cfg(feature = "ui")]
pub mod views;
