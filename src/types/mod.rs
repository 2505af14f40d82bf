pub mod config;
pub mod sarif;
pub mod sonar;
