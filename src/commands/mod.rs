//! CLI commands for campus-route

pub mod connected;
pub mod dispatch;
pub mod locations;
pub mod menu;
pub mod render;
pub mod route;
