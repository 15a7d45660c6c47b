// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt templates for summarization, topic extraction and grounded Q&A
//!
//! Wording is fixed; callers only substitute content. Keep edits here in
//! sync with the scorer's JSON parsing, which expects the exact field names
//! the scoring template demands.

/// Prompt for the main summary call
pub fn summarization_prompt(content: &str) -> String {
    format!(
        r#"
You are an expert content analyzer tasked with creating a high-quality summary of a webpage.

INSTRUCTIONS:
1. Analyze the webpage content below and identify:
   - The main topic or purpose
   - Key points and important details
   - Any significant conclusions or calls to action

2. Create a well-structured summary that:
   - Begins with a clear overview sentence
   - Includes the most important information in order of relevance
   - Maintains the original meaning without bias
   - Excludes advertisements, navigation elements, and irrelevant content

3. Format your response as a cohesive summary of 3-5 paragraphs.

WEBPAGE CONTENT:
{content}

SUMMARY:
"#
    )
}

/// Prompt for the topic extraction call
pub fn topic_prompt(summary: &str) -> String {
    format!(
        r#"
Based on the following summary, identify the main topic of the webpage in 2-5 words.

SUMMARY:
{summary}

MAIN TOPIC (2-5 words only):
"#
    )
}

/// Simpler direct prompt used when the topic call fails once
pub fn topic_fallback_prompt(summary: &str) -> String {
    format!(
        "Based on this summary, what is the single main topic in 2-5 words?\n\n{summary}"
    )
}

/// Prompt for a grounded answer over the current document and history
pub fn answer_prompt(summary: &str, main_topic: &str, chat_history: &str, input: &str) -> String {
    format!(
        r#"
You are a helpful AI assistant specializing in webpage analysis and information retrieval.

WEBPAGE SUMMARY:
{summary}

MAIN TOPIC:
{main_topic}

CONVERSATION HISTORY:
{chat_history}

CURRENT QUERY:
{input}

INSTRUCTIONS:
1. Use the webpage summary and conversation history to provide an accurate, helpful response.
2. If asked about information not in the summary, politely explain you can only answer based on the summarized webpage.
3. If uncertain about details, acknowledge the limitations rather than making assumptions.
4. Keep your response focused, informative, and conversational.

RESPONSE:
"#
    )
}

/// Prompt scoring section previews for relevance
///
/// `previews` are already cut to the scorer's preview length; each becomes a
/// numbered `SECTION n:` block.
pub fn relevance_scoring_prompt(previews: &[&str]) -> String {
    let sections = previews
        .iter()
        .enumerate()
        .map(|(i, preview)| format!("SECTION {}:\n{}...\n", i + 1, preview))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a content relevance analyst.

Analyze the relevance and importance of the following webpage sections.

WEBPAGE SECTIONS:
{sections}

For each section, evaluate how relevant it is to the main content of the webpage, ignoring navigation elements, advertisements, and other non-content elements.

Rate each section on a scale of 0-10:
- 0: Completely irrelevant (navigation, ads, etc.)
- 5: Somewhat relevant but not essential
- 10: Highly relevant core content

INSTRUCTIONS:
1. For each section, provide a JSON object with:
   - score: The relevance score (0-10)
   - rationale: A brief explanation for the score
   - include_in_summary: Boolean (true if score >= 6, otherwise false)

2. Format your response as a valid JSON array of objects.

RESPONSE (valid JSON only):
"#
    )
}
