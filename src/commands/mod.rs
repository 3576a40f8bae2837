pub mod browse;
pub mod configure;
pub mod favorites;
pub mod generate;
pub mod list;
pub mod search;
