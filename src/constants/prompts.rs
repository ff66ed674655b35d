pub const FOCUS_SENTENCE_INSTRUCTION: &str = "Summarize the passage below as ONE factual sentence. \
Keep domain terminology and proper nouns exactly as written. \
Do not add opinions, slang, emoji, bullet points or commentary. \
Return plain text only.";
