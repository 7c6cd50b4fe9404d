pub mod api;
pub mod data;
pub mod db;
pub mod ui;
