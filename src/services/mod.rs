pub mod scoring;
pub mod server;
pub mod standings;
