//! MelodyStream: a music streaming demo for the terminal.
//!
//! A landing screen, a mock login with user and admin roles, a listening
//! dashboard and a catalog management dashboard, all backed by one
//! in-memory catalog seeded with sample data.

mod app;
mod catalog;
mod config;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
