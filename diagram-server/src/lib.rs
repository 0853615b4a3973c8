//! Time–space diagram layout server.
//!
//! Orders the stations of a set of transit trips along one axis, so that as
//! many trips as possible draw as monotone, non-crossing paths, and serves
//! that layout over HTTP.

pub mod clusters;
pub mod config;
pub mod diagram;
pub mod domain;
pub mod layout;
pub mod web;
