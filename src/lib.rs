// src/lib.rs

pub mod catalog;
pub mod log;
pub mod model;
pub mod select;
