//! Solutions for Advent of Code 2022
//!
//! Days 16, 19, 20 and 23-25 are not implemented.

pub mod day_01;
pub mod day_02;
pub mod day_03;
pub mod day_04;
pub mod day_05;
pub mod day_06;
pub mod day_07;
pub mod day_08;
pub mod day_09;
pub mod day_10;
pub mod day_11;
pub mod day_12;
pub mod day_13;
pub mod day_14;
pub mod day_15;
pub mod day_17;
pub mod day_18;
pub mod day_21;
pub mod day_22;
