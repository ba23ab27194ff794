//! PATH train schedule server.
//!
//! Scrapes the published PATH timetables and answers "when are the next
//! trains from this station" in a form small enough for a watch to render.

pub mod cache;
pub mod document;
pub mod domain;
pub mod error;
pub mod service;
pub mod source;
pub mod timetable;
pub mod web;
