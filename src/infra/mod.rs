//! Инфраструктурный слой вокруг ядра:
//! - RNG-реализации для колоды;
//! - конфигурация dev-CLI.

pub mod config;
pub mod rng;

pub use config::*;
pub use rng::*;
