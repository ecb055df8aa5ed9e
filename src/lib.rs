//! Trip planning API: budget allocation, planning-fee quotes and day-by-day
//! itinerary generation behind an actix-web service.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;
