// Stand-alone pattern demonstrations. They are not reachable from the
// menu; `patterns-demo` and the tests drive them.

pub mod dao;
pub mod data_mapper;
pub mod decorator;
pub mod repository;
pub mod strategy;
