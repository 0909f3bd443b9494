// File: ./src/model/mod.rs
pub mod display;
pub mod item;
pub mod parser;
pub mod recurrence;
pub mod resolve;

pub use item::{Agenda, Classification, Event, EventStart, ParseError};
