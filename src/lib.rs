//! Core of the marks viewer: table validation, descriptive statistics and
//! histogram binning for a column of percentage marks.
//!
//! The desktop binary (`src/main.rs`) is only a collaborator: it reads a file
//! into a [`data::model::RawTable`], hands it to [`data::pipeline::process`]
//! and renders whatever comes back.

pub mod config;
pub mod data;
pub mod sample;
