//! Linear Equation Solver
//!
//! This crate parses equations such as `2x + 3y = 12` and solves pairs of
//! them in up to two variables using Cramer's rule, exposed over a small
//! HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod solver;
