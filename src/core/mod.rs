pub mod console; // Plain line-oriented front end
pub mod engine;
pub mod game;
pub mod logging;
pub mod menu;
pub mod rng;
pub mod terminal; // Colored line output for console mode
