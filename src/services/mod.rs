// src/services/mod.rs
pub mod chatbot;
pub mod completion;
pub mod persona;
