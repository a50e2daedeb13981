//! Bus journey planner server.
//!
//! Answers: "Which buses take me from this stop to that one, how long will
//! it take, and what will it cost?"

pub mod config;
pub mod domain;
pub mod fare;
pub mod geo;
pub mod planner;
pub mod store;
pub mod web;
