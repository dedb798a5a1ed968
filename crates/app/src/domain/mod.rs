//! Day-Off Domain Concerns

pub mod dayoffs;
