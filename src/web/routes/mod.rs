pub mod cluster;
pub mod public_url;
pub mod recommendations;
