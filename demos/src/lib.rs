//! Headless driver for the Labyrinth solver: level loading, a simulated
//! frame clock with wandering enemies, and text output.

pub mod compare;
pub mod config;
pub mod enemies;
pub mod render;
pub mod sim;

pub use compare::{Comparison, compare};
pub use config::DemoConfig;
pub use enemies::EnemyWalker;
pub use render::{Overlay, render};
pub use sim::{RunOutcome, Simulation};
