//! Shared fixtures for the Paver integration tests.

pub mod contractors;
