// ai module - organises ai-related functionality into submodules

pub mod api;
pub mod prompts;

// re-export key public items for convenient access
pub use api::{build_request, extract_content, request_completion, CompletionRequest, Message};
pub use prompts::{construct_user_prompt, get_system_prompt};
