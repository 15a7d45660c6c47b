// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Interactive console for the summarizer
//!
//! URLs are summarized, anything else is asked as a question against the
//! current document, `quit` or `exit` leaves. Questions are refused until
//! a first page has been summarized.

use anyhow::Result;
use fabstir_summarizer_node::{
    config::NodeConfig,
    content::PageFetcher,
    llm::GeminiClient,
    memory::ConversationMemory,
    summarizer::WebpageSummarizer,
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Refusal printed for questions typed before any page is summarized
const NO_DOCUMENT_REPLY: &str =
    "No webpage has been summarized yet. Please enter a URL first.";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = NodeConfig::from_env();
    if let Err(e) = config.validate() {
        eprintln!("❌ Invalid configuration: {}", e);
        eprintln!("   Set GOOGLE_API_KEY in the environment or a .env file.");
        std::process::exit(1);
    }

    let completer = Arc::new(GeminiClient::new(
        config.google_api_key.clone(),
        config.model_name.clone(),
        config.llm_timeout_secs,
    ));
    let fetcher = PageFetcher::new(config.fetch_timeout_secs);
    let memory = Arc::new(ConversationMemory::new(config.memory_window_size));
    let summarizer = WebpageSummarizer::new(
        completer,
        fetcher,
        memory,
        config.content_scoring_enabled,
    );

    println!("🌐 Fabstir Summarizer Console ({})", config.model_name);
    println!("   Paste a URL to summarize it.");
    println!("   Ask anything else as a question about the current page.");
    println!("   Type 'quit' or 'exit' to leave.\n");

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        if line.starts_with("http://") || line.starts_with("https://") {
            println!("⏳ Summarizing {}...", line);
            match summarizer.summarize_url(line).await {
                Ok(document) => {
                    println!("\n📄 Summary:\n{}\n", document.summary);
                    println!("🏷️  Main topic: {}\n", document.main_topic);
                }
                Err(e) => println!("❌ {}\n", e),
            }
        } else {
            let answer = console_answer(&summarizer, line).await;
            println!("\n💬 {}\n", answer);
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

/// Answer a console question, refusing until a document exists
async fn console_answer(summarizer: &WebpageSummarizer, question: &str) -> String {
    if summarizer.current_document().is_none() {
        return NO_DOCUMENT_REPLY.to_string();
    }
    summarizer.answer_question(question).await
}
