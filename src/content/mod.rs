// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page fetching and section extraction

pub mod extractor;
pub mod fetcher;

pub use extractor::{extract_sections, page_text};
pub use fetcher::{FetchError, PageFetcher, MAX_FETCH_CHARS};
