pub mod activities;
pub mod api;
pub mod auth;
pub mod db;
pub mod goals;
pub mod routes;
pub mod stats;
pub mod users;
