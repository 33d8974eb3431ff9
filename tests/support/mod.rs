#![allow(dead_code)]

pub mod network;
pub mod solver;
