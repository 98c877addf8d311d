//! APEER listwise ranking prompt

use super::types::Passage;

/// Opens the query inside the prompt
pub const QUERY_START: &str = "[querystart]";
/// Closes the query inside the prompt
pub const QUERY_END: &str = "[queryend]";
/// Opens the ranking in the completion text
pub const RANK_START: &str = "[rankstart]";
/// Closes the ranking in the completion text
pub const RANK_END: &str = "[rankend]";

const ROLE: &str = "You are RankGPT, an intelligent assistant that can rank passages based on their relevancy and accuracy to the query.";

const INSTRUCTION: &str = "Rank the following passages based on their relevance and accuracy to the query. Prioritize passages that directly address the query and provide detailed, correct answers. Ignore factors such as length, complexity, or writing style unless they seriously hinder readability.";

const OUTPUT_FORMAT: &str = "Produce a succinct and clear ranking of all passages, from most to least relevant, using their identifiers. The format should be [rankstart] [most relevant passage ID] > [next most relevant passage ID] > ... > [least relevant passage ID] [rankend]. Refrain from including any additional commentary or explanations in your ranking.";

/// Render the ranking prompt for `query` over `passages`.
///
/// Passage content is inserted verbatim. Text that itself contains the
/// ranking markers can confuse the parser downstream; that is accepted.
pub fn build_prompt(query: &str, passages: &[Passage<'_>]) -> String {
    let body: usize = passages.iter().map(|p| p.content.len() + 8).sum();
    let mut prompt =
        String::with_capacity(ROLE.len() + INSTRUCTION.len() + OUTPUT_FORMAT.len() + query.len() + body + 64);

    prompt.push_str(ROLE);
    prompt.push_str("\n\n");
    prompt.push_str(&format!("Query: {} {} {}\n\n", QUERY_START, query, QUERY_END));
    prompt.push_str(INSTRUCTION);
    prompt.push_str("\n\n");

    for passage in passages {
        prompt.push_str(&format!("[{}] {}\n\n", passage.id, passage.content));
    }

    prompt.push_str(OUTPUT_FORMAT);
    prompt
}
