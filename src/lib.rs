//! Payroll roster engine.
//!
//! This crate provides validated payroll records (timecards, standard and
//! commissioned employees, department rosters), weekly pay computation and
//! the fixed-layout text reports each record renders.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
