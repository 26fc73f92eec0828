//! Budget engine for collaborative creative projects
//!
//! This crate derives each collaborator's goal, current and minimum rates from
//! their living expenses and work schedule, prices their labor under a
//! scenario's pay policy, tracks the equity owed when pay falls short of goal,
//! and totals scenario budgets against a project's income.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod store;
