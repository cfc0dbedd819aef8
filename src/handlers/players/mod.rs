pub mod image_handler;
pub mod player_handler;
