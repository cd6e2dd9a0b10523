//! Tool definitions for the assistant.

use crate::error::{PlukkError, Result};
use serde::{Deserialize, Serialize};

/// Default number of search results when the model omits the count.
const DEFAULT_SEARCH_COUNT: usize = 10;

/// Tools the assistant can invoke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ToolCall {
    /// Search YouTube for video candidates.
    YtSearch {
        query: String,
        #[serde(default = "default_count")]
        count: usize,
    },
}

fn default_count() -> usize {
    DEFAULT_SEARCH_COUNT
}

/// OpenAI function/tool definitions for the assistant.
pub fn tool_definitions() -> Vec<async_openai::types::ChatCompletionTool> {
    use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};

    vec![ChatCompletionTool {
        r#type: ChatCompletionToolType::Function,
        function: FunctionObject {
            name: "yt_search".to_string(),
            description: Some(
                "Search YouTube for video content. Returns a JSON array of candidate \
                video URLs for the given search string."
                    .to_string(),
            ),
            parameters: Some(serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search string"
                    },
                    "count": {
                        "type": "integer",
                        "description": "Number of videos to search for (default: 10)",
                        "default": 10
                    }
                },
                "required": ["query"]
            })),
            strict: None,
        },
    }]
}

/// Parse a tool call from the OpenAI response format.
pub fn parse_tool_call(name: &str, arguments: &str) -> Result<ToolCall> {
    let args: serde_json::Value = serde_json::from_str(arguments)
        .map_err(|e| PlukkError::Agent(format!("Invalid tool arguments: {}", e)))?;

    match name {
        "yt_search" => {
            let query = args["query"]
                .as_str()
                .ok_or_else(|| PlukkError::Agent("Missing 'query' argument".to_string()))?
                .to_string();
            let count = args["count"].as_u64().unwrap_or(DEFAULT_SEARCH_COUNT as u64) as usize;
            Ok(ToolCall::YtSearch { query, count })
        }
        _ => Err(PlukkError::Agent(format!("Unknown tool: {}", name))),
    }
}
