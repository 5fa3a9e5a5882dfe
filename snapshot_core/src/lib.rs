pub mod export;
pub mod holders;
