// src/lib.rs
//
// rosterscan: extracts roster records (surname, given name, birth date)
// from scanned/typed documents and writes them to CSV.

pub mod constants;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod output;
pub mod types;
pub mod workflow;
