// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Webpage summarization and grounded question answering

pub mod engine;
pub mod prompts;

pub use engine::{SummarizeError, WebpageSummarizer};
