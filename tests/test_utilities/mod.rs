#![allow(dead_code)]

pub mod maven_fixture;
pub mod mocks;
