mod config;
mod error;
mod key_layout;
