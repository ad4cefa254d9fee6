pub mod get_args;
pub mod report;
pub mod run;
pub mod sources;
