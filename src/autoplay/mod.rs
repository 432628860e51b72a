//! Automatic players used for simulations

pub mod strategy;

pub use strategy::{BisectStrategy, HintBisectStrategy, RandomStrategy, Strategy, StrategyType};
