//! Debate state: transcript, summary log, verdict and the per-session store.
//!
//! - [`transcript::Transcript`]: alternating turns, plus the context windower
//! - [`summary::SummaryLog`]: digests produced every `summary_interval` turns
//! - [`verdict::Verdict`]: the judge's final analysis
//! - [`session::DebateSession`]: lifecycle flags and the state above

pub mod session;
pub mod summary;
pub mod transcript;
pub mod verdict;
