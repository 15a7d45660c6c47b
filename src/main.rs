// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use fabstir_summarizer_node::{
    api::{self, AppState},
    config::NodeConfig,
    content::PageFetcher,
    llm::GeminiClient,
    memory::ConversationMemory,
    summarizer::WebpageSummarizer,
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Fabstir Summarizer Node...\n");
    println!(
        "📦 BUILD VERSION: {}",
        fabstir_summarizer_node::version::VERSION
    );
    println!(
        "📅 Build Date: {}",
        fabstir_summarizer_node::version::BUILD_DATE
    );
    println!();

    let config = NodeConfig::from_env();
    if let Err(e) = config.validate() {
        eprintln!("❌ Invalid configuration: {}", e);
        eprintln!("   Set GOOGLE_API_KEY in the environment or a .env file.");
        std::process::exit(1);
    }

    println!("🧠 Model:           {}", config.model_name);
    println!("🌐 Fetch timeout:   {}s", config.fetch_timeout_secs);
    println!("⏱️  LLM timeout:     {}s", config.llm_timeout_secs);
    println!("💬 Memory window:   {} turns", config.memory_window_size);
    println!(
        "🎯 Content scoring: {}",
        if config.content_scoring_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );

    let completer = Arc::new(GeminiClient::new(
        config.google_api_key.clone(),
        config.model_name.clone(),
        config.llm_timeout_secs,
    ));
    let fetcher = PageFetcher::new(config.fetch_timeout_secs);
    let memory = Arc::new(ConversationMemory::new(config.memory_window_size));
    let summarizer = Arc::new(WebpageSummarizer::new(
        completer,
        fetcher,
        memory,
        config.content_scoring_enabled,
    ));
    let state = Arc::new(AppState::new(summarizer));

    let separator = "=".repeat(60);
    println!("\n{}", separator);
    println!("🎉 Fabstir Summarizer Node is running!");
    println!("{}", separator);
    println!("API Port:       {}", config.api_port);
    println!("\nAPI Endpoints:");
    println!(
        "  Health:       http://localhost:{}/health",
        config.api_port
    );
    println!(
        "  Summarize:    POST http://localhost:{}/summarize",
        config.api_port
    );
    println!("  Ask:          POST http://localhost:{}/ask", config.api_port);
    println!(
        "  Current:      http://localhost:{}/current",
        config.api_port
    );
    println!(
        "  Clear:        POST http://localhost:{}/clear",
        config.api_port
    );
    println!("\nTest with curl:");
    println!(
        "  curl -X POST http://localhost:{}/summarize \\",
        config.api_port
    );
    println!("    -H 'Content-Type: application/json' \\");
    println!("    -d '{{\"url\": \"https://example.com\"}}'");
    println!("\nPress Ctrl+C to shutdown...");
    println!("{}\n", separator);

    if let Err(e) = api::start_server(&config.api_host, config.api_port, state).await {
        eprintln!("❌ API server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
