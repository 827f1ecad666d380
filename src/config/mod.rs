//! Configuration management for the Game of Life driver

pub mod settings;

pub use settings::{
    Settings, GridConfig, SeedConfig, DriverConfig, InputConfig, OutputConfig,
    OutputFormat, CliOverrides
};
