pub mod check;
pub mod export;
pub mod health;
pub mod static_files;
