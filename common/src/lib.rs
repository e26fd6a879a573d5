//! Common library exports shared by the frontend and the native test suite.

extern crate serde;


pub mod app_const;
pub mod university;
pub mod dataset;
pub mod filter;
pub mod view_state;
pub mod debounce;
pub mod card_export;
pub mod hidden_trigger;
pub mod errors;
