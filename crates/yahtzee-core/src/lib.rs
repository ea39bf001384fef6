#![deny(warnings)]
pub mod model;
pub mod scoring;
