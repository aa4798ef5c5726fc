//! Facet predicates and the controller composing them.

pub mod controller;
pub mod predicates;
