//! Journey planner over a graph of ports and one-way routes.
//!
//! Answers: "which ways are there to get from this port to that one, and
//! which is quickest?"

pub mod config;
pub mod domain;
pub mod planner;
pub mod routes;
pub mod web;
