//! Assistant step of the workflow.
//!
//! A single LLM call with the search tool bound, producing a tagged decision:
//! either a tool invocation request or a direct answer.

mod assistant;
mod tools;

pub use assistant::{Assistant, Decision};
pub use tools::{parse_tool_call, tool_definitions, ToolCall};
