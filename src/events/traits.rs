/// The typed stage abstraction every pipeline handler implements.
pub mod pipeline_stage;
