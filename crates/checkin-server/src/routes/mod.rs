//! API routes

pub mod checkins;
pub mod health;
