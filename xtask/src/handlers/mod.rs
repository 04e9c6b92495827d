pub mod apps;
pub mod dev;
pub mod run;
pub mod testing;
