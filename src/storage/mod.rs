// Core storage modules
pub mod db;

pub use db::DatabaseManager;
