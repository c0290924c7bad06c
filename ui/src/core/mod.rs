pub mod config;
pub mod fetch;
pub mod format;
pub mod platform;
pub mod request;
pub mod timing;
pub mod tween;
