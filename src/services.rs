pub mod crud;
pub mod db;
