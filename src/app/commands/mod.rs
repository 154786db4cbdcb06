pub mod config_writer;
pub mod env_export;
pub mod prompt_gate;
pub mod provision;
pub mod resolve;
pub mod sequencer;
