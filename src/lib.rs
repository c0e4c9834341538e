//! # RelayPub
//!
//! `relaypub` is a minimalist event-driven notification relay built with Rust.
//! A publisher builds a message payload (a fixed subject/body pair, or a
//! randomly chosen category label carried as a typed attribute) and hands it
//! to a pub/sub transport addressed by a topic identifier; a consumer decodes
//! delivered batches and reports their fields to an observability sink.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `publisher`: builds message payloads and hands them to the transport.
//! - `consumer`: processes batches of delivered records.
//! - `transport`: the delivery seam and its WebSocket client implementation.
//! - `config`: handles loading and managing relay configuration.
//! - `sink`: the observability capability injected into each entry point.
//! - `utils`: shared definitions, such as error and response types.

pub mod config;
pub mod consumer;
pub mod publisher;
pub mod sink;
pub mod transport;
pub mod utils;
