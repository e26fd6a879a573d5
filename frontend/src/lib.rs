//! Frontend library entry point.

// dioxus components are snake case
#![allow(non_snake_case)]

pub mod app;
pub(crate) mod pages;
pub(crate) mod components;
pub(crate) mod api;
pub(crate) mod export;
pub(crate) mod js_error;
