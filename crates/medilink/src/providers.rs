pub mod base;
pub mod configs;
pub mod keywords;
pub mod utils;

#[cfg(test)]
pub mod mock;
