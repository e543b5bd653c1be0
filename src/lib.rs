pub mod chat;
pub mod config;
pub mod storage;
pub mod theme;
pub mod types;
pub mod ui;
pub mod upload;
pub mod views;
