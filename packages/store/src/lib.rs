pub mod clock;
pub mod config;
pub mod models;
pub mod records;
pub mod seed;

mod error;
pub use error::{Result, StoreError};

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebStorage;

pub use config::StoreConfig;
pub use models::{NewProblem, ParseStatusError, Problem, ProblemStatus, Role, User};
pub use records::RecordStore;
