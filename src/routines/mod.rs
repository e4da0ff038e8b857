pub mod publish_benchmark;
pub mod routine;
