//! Live bus finder server.
//!
//! A web application that answers: "which buses running right now will
//! get me from this stop to that one, and how soon will they reach me?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod feed;
pub mod matcher;
pub mod schedule;
pub mod web;
