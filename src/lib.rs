pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod paths;
pub mod routes;
pub mod state;
pub mod trivia;

#[cfg(test)]
pub mod testing;
