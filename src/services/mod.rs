pub mod console;
pub mod ingestion;
pub mod server;
