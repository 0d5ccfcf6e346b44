//! Common function use in test and benchmark

#![allow(dead_code)]

pub mod constant;
pub mod generator;
pub mod io;
