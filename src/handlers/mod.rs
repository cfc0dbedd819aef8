pub mod backend_health_handler;
pub mod matches;
pub mod players;
