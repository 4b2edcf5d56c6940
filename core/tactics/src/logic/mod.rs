pub mod action;
pub mod board;
pub mod combat;
pub mod game;
pub mod id_generator;
pub mod layout;
pub mod movement;
pub mod roster;
pub mod turn;
pub mod unit_attributes;
