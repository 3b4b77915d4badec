//! Modelos de Redação.
//!
//! A screen that lists essay models fetched from a remote REST API and lets
//! the user create new ones, served as a server-rendered web page.

pub mod age;
pub mod api;
pub mod components;
pub mod config;
pub mod constants;
pub mod screen;
pub mod text;
pub mod web;
