//! The assistant node: one LLM call with the search tool bound.

use super::tools::{parse_tool_call, tool_definitions, ToolCall};
use crate::error::{PlukkError, Result};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionMessageToolCall, ChatCompletionRequestAssistantMessageArgs,
    ChatCompletionRequestMessage, CreateChatCompletionRequestArgs,
};
use tracing::debug;

/// Outcome of one assistant step.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// The model asked to invoke a tool.
    ToolRequest {
        /// OpenAI tool call ID, needed to feed the result back.
        call_id: String,
        call: ToolCall,
    },
    /// The model answered directly; the workflow terminates here.
    DirectAnswer(String),
}

/// Assistant that decides between searching and answering directly.
pub struct Assistant {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
}

impl Assistant {
    /// Create a new assistant using the given model.
    pub fn new(model: &str) -> Self {
        Self {
            client: create_client(),
            model: model.to_string(),
        }
    }

    /// Run one assistant step over the conversation.
    ///
    /// Appends the model's message to the conversation and returns the
    /// routing decision.
    pub async fn decide(
        &self,
        messages: &mut Vec<ChatCompletionRequestMessage>,
    ) -> Result<Decision> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages.clone())
            .tools(tool_definitions())
            .build()
            .map_err(|e| PlukkError::Agent(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| PlukkError::OpenAI(format!("Assistant API error: {}", e)))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| PlukkError::Agent("No response from model".to_string()))?;

        let content = choice.message.content;
        let tool_calls = choice.message.tool_calls;

        let decision = route(content.clone(), tool_calls.as_deref())?;
        debug!("Assistant decision: {:?}", decision);

        // Mirror the model's message into the conversation state
        let mut assistant_msg = ChatCompletionRequestAssistantMessageArgs::default();
        if let Some(calls) = tool_calls {
            assistant_msg.tool_calls(calls);
        }
        if let Some(text) = content {
            assistant_msg.content(text);
        }
        messages.push(
            assistant_msg
                .build()
                .map_err(|e| PlukkError::Agent(e.to_string()))?
                .into(),
        );

        Ok(decision)
    }
}

/// Route a model response to a tagged decision.
///
/// A non-empty tool call list wins over text content; anything else is a
/// direct answer.
fn route(
    content: Option<String>,
    tool_calls: Option<&[ChatCompletionMessageToolCall]>,
) -> Result<Decision> {
    if let Some(calls) = tool_calls {
        if let Some(first) = calls.first() {
            let call = parse_tool_call(&first.function.name, &first.function.arguments)?;
            return Ok(Decision::ToolRequest {
                call_id: first.id.clone(),
                call,
            });
        }
    }

    Ok(Decision::DirectAnswer(content.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_openai::types::{ChatCompletionToolType, FunctionCall};

    fn search_call(arguments: &str) -> ChatCompletionMessageToolCall {
        ChatCompletionMessageToolCall {
            id: "call_1".to_string(),
            r#type: ChatCompletionToolType::Function,
            function: FunctionCall {
                name: "yt_search".to_string(),
                arguments: arguments.to_string(),
            },
        }
    }

    #[test]
    fn test_route_tool_request() {
        let calls = vec![search_call(r#"{"query": "graph algorithms", "count": 10}"#)];
        let decision = route(None, Some(&calls)).unwrap();
        assert_eq!(
            decision,
            Decision::ToolRequest {
                call_id: "call_1".to_string(),
                call: ToolCall::YtSearch {
                    query: "graph algorithms".to_string(),
                    count: 10
                },
            }
        );
    }

    #[test]
    fn test_route_direct_answer() {
        let decision = route(Some("Here is my answer.".to_string()), None).unwrap();
        assert_eq!(
            decision,
            Decision::DirectAnswer("Here is my answer.".to_string())
        );
    }

    #[test]
    fn test_route_empty_tool_list_is_direct_answer() {
        let decision = route(Some("Done.".to_string()), Some(&[])).unwrap();
        assert_eq!(decision, Decision::DirectAnswer("Done.".to_string()));
    }

    #[test]
    fn test_route_malformed_tool_call_errors() {
        let calls = vec![search_call("not json")];
        assert!(route(None, Some(&calls)).is_err());
    }
}
