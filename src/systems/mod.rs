pub mod collision;
pub mod input;
pub mod movement;
pub mod render;
pub mod reset;
pub mod spawner;
pub mod tail;
