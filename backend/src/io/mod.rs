//! # IO Module
//!
//! Interface layer exposing the backend over HTTP.

pub mod rest;
