pub mod calculators;
pub mod catch;
pub mod commands;
pub mod engine;
pub mod state;

#[cfg(test)]
mod tests;
