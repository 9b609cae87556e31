//! # Rollbook Architecture
//!
//! Rollbook is an **in-process student roster**: records keyed by a generated
//! identifier such as `24-25STU5582`, seeded once at startup and grown by
//! insertions. Nothing is persisted across runs.
//!
//! The interesting part is small: the identifier allocator and the keyed store
//! it feeds. Everything else (prompts, argument parsing, rendering) lives in the
//! binary's `cli` module and talks to the library through [`api::RollbookApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Prompts, input coercion, terminal and JSON rendering     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the allocator                         │
//! │  - Seeds, then initializes the allocator exactly once       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / find / list, returning `CmdResult`                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) + Identifier Allocator (ids.rs)     │
//! │  - `RecordStore` trait, `InMemoryStore`                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code takes Rust values and returns Rust values. It never
//! writes to stdout/stderr and never exits the process. Diagnostics are emitted
//! through `tracing` and, for anything the user should see, returned as
//! [`commands::CmdMessage`] values.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: add, find and list
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`ids`]: Identifier allocation
//! - [`model`]: `Student` and `NewStudent`
//! - [`seed`]: Built-in roster and seed-file loading
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod seed;
pub mod store;
