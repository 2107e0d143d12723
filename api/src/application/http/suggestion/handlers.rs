pub mod suggest_prompt_metadata;
