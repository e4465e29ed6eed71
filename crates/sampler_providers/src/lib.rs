//! # sampler_providers: LLM Number-Generation Adapters
//!
//! Adapter layer of the workspace. Drives chat-completion APIs to produce
//! "random" numbers and runs full sampling campaigns over multiple ranges
//! and repeated runs.
//!
//! - [`Provider`] resolves a model name to its API endpoint and key
//! - [`PromptStyle`] holds the prompt templates sent to the model
//! - [`GeneratorConfig`] validates campaign/client parameters
//! - [`NumberGenerator`] is the reqwest-backed client
//! - [`campaign`] collects [`TrialResults`] from any [`SampleSource`]
//! - [`simulated`] provides an offline, seeded sampler for demos and tests
//!
//! Collection is deliberately sequential: one request at a time with an
//! inter-call delay, because provider rate limits, not throughput, are the
//! binding constraint.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod campaign;
pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod provider;
pub mod simulated;

pub use campaign::{run_consistency_test, CampaignPlan, RangeSpec, SampleSource, TrialResults};
pub use client::NumberGenerator;
pub use config::GeneratorConfig;
pub use error::ProviderError;
pub use prompt::PromptStyle;
pub use provider::Provider;
pub use simulated::SimulatedSampler;
