//! MCP server exposing the component catalog as tools.
//!
//! Lifecycle:
//!
//! 1. **Initialisation**: `initialize` request, then `notifications/initialized`
//! 2. **Operation**: `tools/list`, `tools/call`, `ping`
//! 3. **Shutdown**: EOF on the input stream, SIGINT or SIGTERM
//!
//! Every tool is a thin translation onto a [`Catalog`] query. Tools that find
//! nothing return an ordinary result, not an error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader, Stdin, Stdout};

use crate::catalog::{Catalog, Category};
use crate::config::SearchConfig;
use crate::mcp::protocol::{
    parse_message, IncomingMessage, JsonRpcError, JsonRpcNotification, JsonRpcRequest,
    JsonRpcResponse, RequestId, MCP_PROTOCOL_VERSION, SERVER_NAME,
};
use crate::mcp::transport::{LineTransport, StdioTransport};

/// Server state in the MCP lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for initialize request.
    AwaitingInit,
    /// Initialize received, waiting for initialized notification.
    Initialising,
    /// Ready for normal operation.
    Running,
    /// Shutdown in progress.
    ShuttingDown,
}

/// Server capabilities advertised during initialisation.
#[derive(Debug, Clone, Serialize)]
pub struct ServerCapabilities {
    /// Tool-related capabilities.
    pub tools: ToolCapabilities,
}

/// Tool-specific capabilities.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolCapabilities {
    /// The tool list never changes during a session.
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}

/// Server information for initialisation response.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: &'static str,
    /// Server version.
    pub version: &'static str,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: SERVER_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Client information received during initialisation.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    /// Client name.
    pub name: String,
    /// Client version.
    #[serde(default)]
    pub version: Option<String>,
}

/// Parameters for the initialize request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// Protocol version requested by client.
    pub protocol_version: String,
    /// Client information.
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
}

/// A tool definition for tools/list response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: Value,
}

/// Parameters for tools/call request.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    /// Name of the tool to call.
    pub name: String,
    /// Arguments for the tool.
    #[serde(default)]
    pub arguments: Value,
}

/// Content item in a tool call response.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
}

/// Result of a tool call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    /// Content returned by the tool.
    pub content: Vec<ToolContent>,
    /// Whether the tool call resulted in an error.
    #[serde(skip_serializing_if = "is_false")]
    pub is_error: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's skip_serializing_if requires fn(&T) -> bool
const fn is_false(b: &bool) -> bool {
    !*b
}

impl ToolCallResult {
    /// Creates a successful text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Creates an error text result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: true,
        }
    }

    /// Creates a successful result holding pretty-printed JSON.
    #[must_use]
    pub fn json(value: &Value) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(text) => Self::text(text),
            Err(e) => Self::error(format!("Failed to serialise result: {e}")),
        }
    }

    /// Returns the text of the first content item.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|c| match c {
            ToolContent::Text { text } => text.as_str(),
        })
    }
}

/// The MCP server for the component catalog.
pub struct McpServer<R = BufReader<Stdin>, W = Stdout> {
    /// Current server state.
    state: ServerState,
    /// The transport layer.
    transport: LineTransport<R, W>,
    /// Negotiated protocol version (set after initialisation).
    protocol_version: Option<String>,
    /// The catalog every tool reads from.
    catalog: Arc<Catalog>,
    /// Search behaviour and page size.
    search: SearchConfig,
}

impl McpServer {
    /// Creates a server over stdin/stdout.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, search: SearchConfig) -> Self {
        Self::with_transport(catalog, search, StdioTransport::stdio())
    }
}

impl<R, W> McpServer<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a server over an arbitrary transport.
    #[must_use]
    pub const fn with_transport(
        catalog: Arc<Catalog>,
        search: SearchConfig,
        transport: LineTransport<R, W>,
    ) -> Self {
        Self {
            state: ServerState::AwaitingInit,
            transport,
            protocol_version: None,
            catalog,
            search,
        }
    }

    /// Returns the current server state.
    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.state
    }

    /// Returns the protocol version agreed during initialisation.
    #[must_use]
    pub fn protocol_version(&self) -> Option<&str> {
        self.protocol_version.as_deref()
    }

    /// Consumes the server and returns its transport.
    pub fn into_transport(self) -> LineTransport<R, W> {
        self.transport
    }

    /// Runs the server until EOF or a termination signal.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    #[cfg(unix)]
    pub async fn run(&mut self) -> std::io::Result<()> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt()).map_err(std::io::Error::other)?;
        let mut sigterm = signal(SignalKind::terminate()).map_err(std::io::Error::other)?;

        loop {
            tokio::select! {
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Runs the server until EOF or Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    #[cfg(windows)]
    pub async fn run(&mut self) -> std::io::Result<()> {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    tracing::info!("Received Ctrl+C, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Processes messages until the input reaches EOF, without signal handling.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn serve(&mut self) -> std::io::Result<()> {
        loop {
            let line_result = self.transport.read_line().await;
            if self.handle_transport_result(line_result).await? {
                return Ok(());
            }
        }
    }

    /// Handles the result from transport read.
    ///
    /// Returns `true` if the server should shut down.
    async fn handle_transport_result(
        &mut self,
        line_result: std::io::Result<Option<String>>,
    ) -> std::io::Result<bool> {
        let Some(line) = line_result? else {
            tracing::debug!("Input closed");
            self.state = ServerState::ShuttingDown;
            return Ok(true);
        };

        if !line.trim().is_empty() {
            self.handle_line(&line).await?;
        }

        Ok(self.state == ServerState::ShuttingDown)
    }

    /// Handles a single line of input.
    async fn handle_line(&mut self, line: &str) -> std::io::Result<()> {
        let msg = match parse_message(line) {
            Ok(msg) => msg,
            Err(error) => {
                tracing::warn!(code = error.error.code, "Rejected malformed message");
                return self.transport.write_message(&error).await;
            }
        };

        tracing::debug!(method = msg.method(), "Received message");

        match msg {
            IncomingMessage::Request(req) => match self.handle_request(&req) {
                Ok(resp) => self.transport.write_message(&resp).await,
                Err(error) => self.transport.write_message(&error).await,
            },
            IncomingMessage::Notification(ref notif) => {
                self.handle_notification(notif);
                Ok(())
            }
        }
    }

    /// Dispatches a request to its handler.
    ///
    /// # Errors
    ///
    /// Returns a JSON-RPC error for unknown methods, bad parameters, or
    /// requests that arrive in the wrong lifecycle state.
    pub fn handle_request(&mut self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        tracing::debug!(id = %req.id, method = %req.method, "Handling request");

        match req.method.as_str() {
            "initialize" => self.handle_initialize(req),
            "tools/list" => self.handle_tools_list(req),
            "tools/call" => self.handle_tools_call(req),
            "ping" => Ok(JsonRpcResponse::success(req.id.clone(), json!({}))),
            _ => Err(JsonRpcError::method_not_found(req.id.clone(), &req.method)),
        }
    }

    /// Handles an incoming notification.
    pub fn handle_notification(&mut self, notif: &JsonRpcNotification) {
        if notif.method == "notifications/initialized" && self.state == ServerState::Initialising {
            tracing::info!("Client initialised, server running");
            self.state = ServerState::Running;
        }
    }

    /// Handles the initialize request.
    fn handle_initialize(&mut self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        if self.state != ServerState::AwaitingInit {
            return Err(JsonRpcError::invalid_request_with(
                req.id.clone(),
                "Server already initialised",
            ));
        }

        let params: InitializeParams = req.parse_params("initialize")?;

        if let Some(client) = &params.client_info {
            tracing::info!(
                client = %client.name,
                client_version = client.version.as_deref().unwrap_or("unknown"),
                requested_version = %params.protocol_version,
                "Client connected"
            );
        }

        self.protocol_version = Some(MCP_PROTOCOL_VERSION.to_string());
        self.state = ServerState::Initialising;

        let capabilities = ServerCapabilities {
            tools: ToolCapabilities::default(),
        };
        let result = json!({
            "protocolVersion": MCP_PROTOCOL_VERSION,
            "capabilities": capabilities,
            "serverInfo": ServerInfo::default(),
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/list request.
    fn handle_tools_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        Ok(JsonRpcResponse::success(
            req.id.clone(),
            json!({ "tools": tool_definitions() }),
        ))
    }

    /// Handles the tools/call request.
    fn handle_tools_call(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let params: ToolCallParams = req.parse_params("tool call")?;

        tracing::debug!(tool = %params.name, "Calling tool");

        let result = self.call_tool(&params.name, &params.arguments);

        let result_value = serde_json::to_value(&result).map_err(|e| {
            tracing::error!(error = %e, "Failed to serialise tool call result");
            JsonRpcError::internal_error(
                req.id.clone(),
                "Internal error: failed to serialise result",
            )
        })?;

        Ok(JsonRpcResponse::success(req.id.clone(), result_value))
    }

    /// Ensures the server is in the Running state.
    fn require_running(&self, id: &RequestId) -> Result<(), JsonRpcError> {
        if self.state != ServerState::Running {
            return Err(JsonRpcError::invalid_request_with(
                id.clone(),
                "Server not initialised",
            ));
        }
        Ok(())
    }

    /// Runs a tool by name.
    #[must_use]
    pub fn call_tool(&self, name: &str, arguments: &Value) -> ToolCallResult {
        match name {
            "get_component" => self.call_get_component(arguments),
            "list_components_by_category" => self.call_list_components_by_category(arguments),
            "search_components" => self.call_search_components(arguments),
            "list_categories" => self.call_list_categories(),
            "list_components" => self.call_list_components(),
            _ => ToolCallResult::error(format!("Unknown tool: {name}")),
        }
    }

    // ==================== Tool Handlers ====================

    fn call_get_component(&self, arguments: &Value) -> ToolCallResult {
        let id = match required_str(arguments, "id") {
            Ok(id) => id,
            Err(e) => return e,
        };

        let result = self.catalog.get_by_id(id).map_or_else(
            || {
                tracing::debug!(id, "Component not found");
                json!({
                    "status": "not_found",
                    "id": id,
                    "message": format!("No component with id '{id}'"),
                })
            },
            |record| json!({ "status": "found", "component": record }),
        );

        ToolCallResult::json(&result)
    }

    fn call_list_components_by_category(&self, arguments: &Value) -> ToolCallResult {
        let tag = match required_str(arguments, "category") {
            Ok(tag) => tag,
            Err(e) => return e,
        };

        let category: Category = match tag.parse() {
            Ok(c) => c,
            Err(e) => {
                return ToolCallResult::error(format!(
                    "{e}. Must be one of: {}",
                    Category::valid_tags()
                ))
            }
        };

        let components = self.catalog.get_by_category(category);

        ToolCallResult::json(&json!({
            "category": category,
            "count": components.len(),
            "components": components,
        }))
    }

    fn call_search_components(&self, arguments: &Value) -> ToolCallResult {
        let query = match required_str(arguments, "query") {
            Ok(query) => query,
            Err(e) => return e,
        };

        let limit = match optional_count(arguments, "limit", 1) {
            Ok(limit) => limit.unwrap_or(self.search.default_limit),
            Err(e) => return e,
        };
        let offset = match optional_count(arguments, "offset", 0) {
            Ok(offset) => offset.unwrap_or(0),
            Err(e) => return e,
        };

        let matches = self.catalog.search_with(query, self.search.options());
        let total_count = matches.len();

        let components: Vec<_> = matches
            .iter()
            .skip(offset)
            .take(limit)
            .map(|r| r.summary())
            .collect();
        let returned_count = components.len();

        tracing::debug!(query, total_count, returned_count, "Search complete");

        ToolCallResult::json(&json!({
            "query": query,
            "total_count": total_count,
            "returned_count": returned_count,
            "offset": offset,
            "has_more": offset.saturating_add(returned_count) < total_count,
            "components": components,
        }))
    }

    fn call_list_categories(&self) -> ToolCallResult {
        let categories: Vec<_> = self
            .catalog
            .categories()
            .into_iter()
            .map(|(category, count)| json!({ "id": category, "count": count }))
            .collect();

        ToolCallResult::json(&json!({ "categories": categories }))
    }

    fn call_list_components(&self) -> ToolCallResult {
        let components: Vec<_> = self.catalog.iter().map(|r| r.summary()).collect();

        ToolCallResult::json(&json!({
            "total_count": components.len(),
            "components": components,
        }))
    }
}

/// Reads a required string argument.
///
/// An absent or `null` argument is reported as missing; any other non-string
/// value is reported as invalid.
fn required_str<'a>(arguments: &'a Value, name: &str) -> Result<&'a str, ToolCallResult> {
    match arguments.get(name) {
        None | Some(Value::Null) => Err(ToolCallResult::error(format!(
            "Missing required parameter: {name}"
        ))),
        Some(value) => value.as_str().ok_or_else(|| {
            ToolCallResult::error(format!("Invalid parameter: {name} must be a string"))
        }),
    }
}

/// Reads an optional integer argument that must be at least `min` (0 or 1).
///
/// Returns `Ok(None)` when the argument is absent or `null`.
fn optional_count(
    arguments: &Value,
    name: &str,
    min: usize,
) -> Result<Option<usize>, ToolCallResult> {
    let Some(value) = arguments.get(name).filter(|v| !v.is_null()) else {
        return Ok(None);
    };

    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .filter(|&n| n >= min)
        .map(Some)
        .ok_or_else(|| {
            let kind = if min > 0 { "positive" } else { "non-negative" };
            ToolCallResult::error(format!("Invalid parameter: {name} must be a {kind} integer"))
        })
}

/// Returns the tools this server exposes.
#[must_use]
pub fn tool_definitions() -> Vec<ToolDefinition> {
    let category_tags: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();

    vec![
        ToolDefinition {
            name: "get_component",
            description: "Get the full documentation for one UI component by its id: props \
                          with types and defaults, usage examples, related sub-components and \
                          caveats. Ids are case-sensitive. An unknown id returns status \
                          'not_found'.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "Component id, e.g. 'button' or 'text-input'"
                    }
                },
                "required": ["id"]
            }),
        },
        ToolDefinition {
            name: "list_components_by_category",
            description: "List the full documentation for every component in one category, \
                          in catalog order.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "enum": category_tags,
                        "description": "Category tag"
                    }
                },
                "required": ["category"]
            }),
        },
        ToolDefinition {
            name: "search_components",
            description: "Search components by case-insensitive substring match on name, \
                          description and id. Returns summaries in catalog order; use \
                          get_component for details. An empty query returns no results.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Text to look for"
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "Optional: maximum number of results to return"
                    },
                    "offset": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Optional: skip first N results (default: 0)"
                    }
                },
                "required": ["query"]
            }),
        },
        ToolDefinition {
            name: "list_categories",
            description: "List every component category with the number of components in it.",
            input_schema: json!({ "type": "object", "properties": {} }),
        },
        ToolDefinition {
            name: "list_components",
            description: "List the id, name, category and description of every component.",
            input_schema: json!({ "type": "object", "properties": {} }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ComponentRecord;

    type TestServer = McpServer<&'static [u8], Vec<u8>>;

    fn fixture_catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                ComponentRecord::new("btn-1", "Button", Category::FormInputs, "A pressable control"),
                ComponentRecord::new(
                    "table-1",
                    "Table",
                    Category::DataDisplay,
                    "Tabular data display",
                ),
            ])
            .unwrap(),
        )
    }

    fn server() -> TestServer {
        McpServer::with_transport(
            fixture_catalog(),
            SearchConfig::default(),
            LineTransport::new(&b""[..], Vec::new()),
        )
    }

    fn running_server() -> TestServer {
        let mut server = server();
        let init = JsonRpcRequest::new(
            RequestId::Number(1),
            "initialize",
            Some(json!({ "protocolVersion": MCP_PROTOCOL_VERSION, "capabilities": {} })),
        );
        server.handle_request(&init).unwrap();
        server.handle_notification(&JsonRpcNotification {
            jsonrpc: "2.0".to_string(),
            method: "notifications/initialized".to_string(),
            params: None,
        });
        server
    }

    fn tool_json(server: &TestServer, name: &str, args: Value) -> Value {
        let result = server.call_tool(name, &args);
        assert!(!result.is_error, "{name} failed: {:?}", result.first_text());
        serde_json::from_str(result.first_text().unwrap()).unwrap()
    }

    #[test]
    fn server_initial_state() {
        assert_eq!(server().state(), ServerState::AwaitingInit);
    }

    #[test]
    fn lifecycle_reaches_running() {
        let server = running_server();
        assert_eq!(server.state(), ServerState::Running);
        assert_eq!(server.protocol_version(), Some(MCP_PROTOCOL_VERSION));
    }

    #[test]
    fn tools_require_initialisation() {
        let mut server = server();
        let req = JsonRpcRequest::new(RequestId::Number(2), "tools/list", None);
        let err = server.handle_request(&req).unwrap_err();
        assert_eq!(err.error.message, "Server not initialised");
    }

    #[test]
    fn second_initialize_rejected() {
        let mut server = running_server();
        let init = JsonRpcRequest::new(
            RequestId::Number(9),
            "initialize",
            Some(json!({ "protocolVersion": MCP_PROTOCOL_VERSION })),
        );
        assert!(server.handle_request(&init).is_err());
    }

    #[test]
    fn initialize_without_params_rejected() {
        let mut server = server();
        let init = JsonRpcRequest::new(RequestId::Number(1), "initialize", None);
        let err = server.handle_request(&init).unwrap_err();
        assert_eq!(err.error.code, -32602);
        assert_eq!(server.state(), ServerState::AwaitingInit);
    }

    #[test]
    fn unknown_method() {
        let mut server = running_server();
        let req = JsonRpcRequest::new(RequestId::Number(3), "resources/list", None);
        let err = server.handle_request(&req).unwrap_err();
        assert_eq!(err.error.code, -32601);
    }

    #[test]
    fn tool_definitions_valid() {
        let tools = tool_definitions();
        assert_eq!(tools.len(), 5);

        for tool in &tools {
            assert!(!tool.name.is_empty());
            assert!(tool.input_schema.is_object());
        }

        let server = running_server();
        for tool in &tools {
            let result = server.call_tool(tool.name, &json!({}));
            assert!(
                result.first_text().is_some_and(|t| !t.starts_with("Unknown tool")),
                "{} is listed but not dispatched",
                tool.name
            );
        }
    }

    #[test]
    fn get_component_found_and_missing() {
        let server = running_server();

        let found = tool_json(&server, "get_component", json!({ "id": "table-1" }));
        assert_eq!(found["status"], "found");
        assert_eq!(found["component"]["name"], "Table");
        assert_eq!(found["component"]["category"], "data-display");

        let missing = tool_json(&server, "get_component", json!({ "id": "missing" }));
        assert_eq!(missing["status"], "not_found");
        assert_eq!(missing["id"], "missing");
    }

    #[test]
    fn get_component_requires_id() {
        let result = running_server().call_tool("get_component", &json!({}));
        assert!(result.is_error);
        assert_eq!(result.first_text(), Some("Missing required parameter: id"));
    }

    #[test]
    fn category_tool_validates_tag() {
        let server = running_server();

        let listed = tool_json(
            &server,
            "list_components_by_category",
            json!({ "category": "form-inputs" }),
        );
        assert_eq!(listed["count"], 1);
        assert_eq!(listed["components"][0]["id"], "btn-1");

        let empty = tool_json(
            &server,
            "list_components_by_category",
            json!({ "category": "navigation" }),
        );
        assert_eq!(empty["count"], 0);

        let bad = server.call_tool("list_components_by_category", &json!({ "category": "widgets" }));
        assert!(bad.is_error);
        assert!(bad.first_text().unwrap().contains("form-inputs"));
    }

    #[test]
    fn search_paginates() {
        let server = running_server();

        let all = tool_json(&server, "search_components", json!({ "query": "-1" }));
        assert_eq!(all["total_count"], 2);
        assert_eq!(all["has_more"], false);

        let page = tool_json(
            &server,
            "search_components",
            json!({ "query": "-1", "limit": 1, "offset": 0 }),
        );
        assert_eq!(page["returned_count"], 1);
        assert_eq!(page["components"][0]["id"], "btn-1");
        assert_eq!(page["has_more"], true);

        let past_end = tool_json(
            &server,
            "search_components",
            json!({ "query": "-1", "offset": 10 }),
        );
        assert_eq!(past_end["returned_count"], 0);
        assert_eq!(past_end["has_more"], false);
    }

    #[test]
    fn search_rejects_zero_limit() {
        let result =
            running_server().call_tool("search_components", &json!({ "query": "-1", "limit": 0 }));
        assert!(result.is_error);
        assert_eq!(
            result.first_text(),
            Some("Invalid parameter: limit must be a positive integer")
        );
    }

    #[test]
    fn search_rejects_negative_limit() {
        let result =
            running_server().call_tool("search_components", &json!({ "query": "-1", "limit": -3 }));
        assert!(result.is_error);
        assert_eq!(
            result.first_text(),
            Some("Invalid parameter: limit must be a positive integer")
        );
    }

    #[test]
    fn search_rejects_non_integer_paging() {
        let server = running_server();

        let fractional = server.call_tool("search_components", &json!({ "query": "-1", "limit": 1.5 }));
        assert!(fractional.is_error);

        let text = server.call_tool("search_components", &json!({ "query": "-1", "limit": "10" }));
        assert!(text.is_error);

        let negative = server.call_tool("search_components", &json!({ "query": "-1", "offset": -1 }));
        assert!(negative.is_error);
        assert_eq!(
            negative.first_text(),
            Some("Invalid parameter: offset must be a non-negative integer")
        );
    }

    #[test]
    fn search_accepts_null_paging_as_default() {
        let server = running_server();
        let result = tool_json(
            &server,
            "search_components",
            json!({ "query": "-1", "limit": null, "offset": null }),
        );
        assert_eq!(result["returned_count"], 2);
        assert_eq!(result["offset"], 0);
    }

    #[test]
    fn wrong_argument_type_is_not_missing() {
        let server = running_server();

        let id = server.call_tool("get_component", &json!({ "id": 5 }));
        assert!(id.is_error);
        assert_eq!(id.first_text(), Some("Invalid parameter: id must be a string"));

        let category = server.call_tool(
            "list_components_by_category",
            &json!({ "category": ["layout"] }),
        );
        assert_eq!(
            category.first_text(),
            Some("Invalid parameter: category must be a string")
        );

        let query = server.call_tool("search_components", &json!({ "query": true }));
        assert_eq!(query.first_text(), Some("Invalid parameter: query must be a string"));

        let missing = server.call_tool("search_components", &json!({ "query": null }));
        assert_eq!(missing.first_text(), Some("Missing required parameter: query"));
    }

    #[test]
    fn search_respects_match_id_setting() {
        let server: TestServer = McpServer::with_transport(
            fixture_catalog(),
            SearchConfig {
                match_id: false,
                default_limit: 50,
            },
            LineTransport::new(&b""[..], Vec::new()),
        );

        let result = tool_json(&server, "search_components", json!({ "query": "-1" }));
        assert_eq!(result["total_count"], 0);
    }

    #[test]
    fn list_tools() {
        let server = running_server();

        let categories = tool_json(&server, "list_categories", json!({}));
        assert_eq!(categories["categories"].as_array().map(Vec::len), Some(5));
        assert_eq!(categories["categories"][0]["id"], "form-inputs");
        assert_eq!(categories["categories"][0]["count"], 1);

        let components = tool_json(&server, "list_components", json!({}));
        assert_eq!(components["total_count"], 2);
        assert_eq!(components["components"][1]["id"], "table-1");
    }

    #[test]
    fn tool_call_result_error() {
        let result = ToolCallResult::error("Something went wrong");
        assert!(result.is_error);
        assert_eq!(result.first_text(), Some("Something went wrong"));

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["isError"], true);
        assert_eq!(value["content"][0]["type"], "text");
    }

    #[test]
    fn successful_result_omits_is_error() {
        let value = serde_json::to_value(ToolCallResult::text("ok")).unwrap();
        assert!(value.get("isError").is_none());
    }

    #[tokio::test]
    async fn serve_full_session() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test"}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_component","arguments":{"id":"btn-1"}}}"#,
            "\n",
            "garbage\n",
            r#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#,
            "\n",
        );

        let mut server: TestServer = McpServer::with_transport(
            fixture_catalog(),
            SearchConfig::default(),
            LineTransport::new(input.as_bytes(), Vec::new()),
        );
        server.serve().await.unwrap();
        assert_eq!(server.state(), ServerState::ShuttingDown);

        let output = String::from_utf8(server.into_transport().into_writer()).unwrap();
        let replies: Vec<Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(replies.len(), 4);
        assert_eq!(replies[0]["result"]["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(replies[1]["id"], 2);
        let text = replies[1]["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("\"Button\""));
        assert_eq!(replies[2]["error"]["code"], -32700);
        assert_eq!(replies[3]["id"], 3);
        assert!(replies[3]["result"].is_object());
    }
}
