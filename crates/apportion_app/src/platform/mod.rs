pub mod allocate;
pub mod app;
mod commands;
mod effects;
pub mod logging;
mod persistence;
mod render;
