//! Tallgrass MCP Server
//!
//! A Model Context Protocol server that exposes the Tallgrass game engine
//! for LLM interaction through natural language responses.

use std::io::{self, BufRead, BufReader, Write};
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tallgrass::mcp_interface::*;
use tallgrass::{GameConfig, GameRng, GameSession};

/// Shared game session that persists across MCP tool calls
type SharedSession = Arc<Mutex<Option<GameSession>>>;

const NO_GAME: &str = "No game in progress. Use 'new_game' to begin.";

struct McpServer {
    session: SharedSession,
}

impl McpServer {
    fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(None)),
        }
    }

    fn handle_request(&self, method: &str, params: &Value) -> Value {
        match method {
            "initialize" => {
                json!({
                    "capabilities": {
                        "tools": {}
                    },
                    "serverInfo": {
                        "name": "tallgrass",
                        "version": "0.1.0"
                    }
                })
            }
            "tools/list" => {
                json!({
                    "tools": [
                        {
                            "name": "new_game",
                            "description": "Start a new game with a fresh overworld, starter creature, and bag",
                            "inputSchema": {
                                "type": "object",
                                "properties": {
                                    "seed": {
                                        "type": "number",
                                        "description": "Optional RNG seed for a reproducible game"
                                    }
                                }
                            }
                        },
                        {
                            "name": "move_player",
                            "description": "Walk one tile on the overworld; stepping may start a wild encounter",
                            "inputSchema": {
                                "type": "object",
                                "properties": {
                                    "direction": {
                                        "type": "string",
                                        "description": "Direction to walk: north, south, east, or west"
                                    }
                                },
                                "required": ["direction"]
                            }
                        },
                        {
                            "name": "battle_action",
                            "description": "Act on your turn in a wild battle",
                            "inputSchema": {
                                "type": "object",
                                "properties": {
                                    "action": {
                                        "type": "string",
                                        "description": "What to do: attack, catch, or flee"
                                    }
                                },
                                "required": ["action"]
                            }
                        },
                        {
                            "name": "switch_creature",
                            "description": "Make a different party member the active creature",
                            "inputSchema": {
                                "type": "object",
                                "properties": {
                                    "number": {
                                        "type": "number",
                                        "description": "Party member number to switch to (1-based)"
                                    }
                                },
                                "required": ["number"]
                            }
                        },
                        {
                            "name": "buy_item",
                            "description": "Buy an item while in the shop",
                            "inputSchema": {
                                "type": "object",
                                "properties": {
                                    "item": {
                                        "type": "string",
                                        "description": "Item to buy: pokeball or potion"
                                    }
                                },
                                "required": ["item"]
                            }
                        },
                        {
                            "name": "use_potion",
                            "description": "Use a potion on a party member while in the menu",
                            "inputSchema": {
                                "type": "object",
                                "properties": {
                                    "number": {
                                        "type": "number",
                                        "description": "Party member number to heal (1-based)"
                                    }
                                },
                                "required": ["number"]
                            }
                        },
                        {
                            "name": "enter_shop",
                            "description": "Open the shop from the overworld",
                            "inputSchema": {
                                "type": "object",
                                "properties": {}
                            }
                        },
                        {
                            "name": "enter_menu",
                            "description": "Open the party menu from the overworld",
                            "inputSchema": {
                                "type": "object",
                                "properties": {}
                            }
                        },
                        {
                            "name": "leave",
                            "description": "Leave the shop or menu and return to the overworld",
                            "inputSchema": {
                                "type": "object",
                                "properties": {}
                            }
                        },
                        {
                            "name": "wait",
                            "description": "Let game time pass so pending battle beats can play out",
                            "inputSchema": {
                                "type": "object",
                                "properties": {
                                    "milliseconds": {
                                        "type": "number",
                                        "description": "How much game time to advance (default 1000)"
                                    }
                                }
                            }
                        },
                        {
                            "name": "get_state",
                            "description": "Get the current game state and status",
                            "inputSchema": {
                                "type": "object",
                                "properties": {}
                            }
                        }
                    ]
                })
            }
            "tools/call" => {
                let tool_name = params["name"].as_str().unwrap_or("");
                let args = &params["arguments"];
                self.handle_tool_call(tool_name, args)
            }
            _ => {
                json!({
                    "error": {
                        "code": -32601,
                        "message": "Method not found"
                    }
                })
            }
        }
    }

    fn handle_tool_call(&self, tool_name: &str, args: &Value) -> Value {
        let result = match tool_name {
            "new_game" => {
                let rng = match args["seed"].as_u64() {
                    Some(seed) => GameRng::seeded(seed),
                    None => GameRng::new_random(),
                };
                match GameSession::new(GameConfig::default(), rng) {
                    Ok(new_session) => {
                        let intro = format!(
                            "🌱 Welcome to Tallgrass! 🌱\n\nGo {}!\n\n{}",
                            new_session.party().active().name(),
                            get_session_summary(&new_session)
                        );
                        *self.session.lock().unwrap() = Some(new_session);
                        json!({
                            "content": [{"type": "text", "text": intro}]
                        })
                    }
                    Err(e) => json!({
                        "content": [{"type": "text", "text": format!("Error: {}", e)}]
                    }),
                }
            }
            "move_player" => {
                let direction = args["direction"].as_str().unwrap_or("");
                let text = match self.session.lock().unwrap().as_mut() {
                    Some(session) => match execute_move(session, direction) {
                        Ok(result) => result,
                        Err(e) => format!("Error: {}", e),
                    },
                    None => NO_GAME.to_string(),
                };
                json!({
                    "content": [{"type": "text", "text": text}]
                })
            }
            "battle_action" => {
                let action = args["action"].as_str().unwrap_or("");
                let text = match self.session.lock().unwrap().as_mut() {
                    Some(session) => match execute_battle_action(session, action) {
                        Ok(result) => result,
                        Err(e) => format!("Error: {}", e),
                    },
                    None => NO_GAME.to_string(),
                };
                json!({
                    "content": [{"type": "text", "text": text}]
                })
            }
            "switch_creature" => {
                let number = args["number"].as_u64().unwrap_or(1) as usize;
                let text = match self.session.lock().unwrap().as_mut() {
                    Some(session) => match execute_switch(session, number) {
                        Ok(result) => result,
                        Err(e) => format!("Error: {}", e),
                    },
                    None => NO_GAME.to_string(),
                };
                json!({
                    "content": [{"type": "text", "text": text}]
                })
            }
            "buy_item" => {
                let item = args["item"].as_str().unwrap_or("");
                let text = match self.session.lock().unwrap().as_mut() {
                    Some(session) => match execute_buy(session, item) {
                        Ok(result) => result,
                        Err(e) => format!("Error: {}", e),
                    },
                    None => NO_GAME.to_string(),
                };
                json!({
                    "content": [{"type": "text", "text": text}]
                })
            }
            "use_potion" => {
                let number = args["number"].as_u64().unwrap_or(1) as usize;
                let text = match self.session.lock().unwrap().as_mut() {
                    Some(session) => match execute_use_potion(session, number) {
                        Ok(result) => result,
                        Err(e) => format!("Error: {}", e),
                    },
                    None => NO_GAME.to_string(),
                };
                json!({
                    "content": [{"type": "text", "text": text}]
                })
            }
            "enter_shop" => {
                let text = match self.session.lock().unwrap().as_mut() {
                    Some(session) => match execute_enter_shop(session) {
                        Ok(result) => result,
                        Err(e) => format!("Error: {}", e),
                    },
                    None => NO_GAME.to_string(),
                };
                json!({
                    "content": [{"type": "text", "text": text}]
                })
            }
            "enter_menu" => {
                let text = match self.session.lock().unwrap().as_mut() {
                    Some(session) => match execute_enter_menu(session) {
                        Ok(result) => result,
                        Err(e) => format!("Error: {}", e),
                    },
                    None => NO_GAME.to_string(),
                };
                json!({
                    "content": [{"type": "text", "text": text}]
                })
            }
            "leave" => {
                let text = match self.session.lock().unwrap().as_mut() {
                    Some(session) => match execute_leave(session) {
                        Ok(result) => result,
                        Err(e) => format!("Error: {}", e),
                    },
                    None => NO_GAME.to_string(),
                };
                json!({
                    "content": [{"type": "text", "text": text}]
                })
            }
            "wait" => {
                let milliseconds = args["milliseconds"].as_u64().unwrap_or(1000);
                let text = match self.session.lock().unwrap().as_mut() {
                    Some(session) => execute_wait(session, milliseconds),
                    None => NO_GAME.to_string(),
                };
                json!({
                    "content": [{"type": "text", "text": text}]
                })
            }
            "get_state" => {
                let text = match self.session.lock().unwrap().as_ref() {
                    Some(session) => get_session_summary(session),
                    None => NO_GAME.to_string(),
                };
                json!({
                    "content": [{"type": "text", "text": text}]
                })
            }
            _ => json!({
                "content": [{"type": "text", "text": format!("Unknown tool: {}", tool_name)}]
            }),
        };

        result
    }

    fn run(&self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            // Parse the JSON-RPC request
            let request: Value = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(_) => continue,
            };

            let id = request["id"].clone();
            let method = request["method"].as_str().unwrap_or("");
            let params = &request["params"];

            // Handle the request and create response
            let result = self.handle_request(method, params);

            let response = json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": result
            });

            // Send response
            writeln!(stdout, "{}", response)?;
            stdout.flush()?;
        }

        Ok(())
    }
}

fn main() -> io::Result<()> {
    let server = McpServer::new();
    server.run()
}
