//! JSON command protocol for scripted and headless control.

use serde::{Deserialize, Serialize};

use crate::harness::TestHarness;
use crate::input::GridCommand;
use crate::state::CommandOutcome;

/// A command a script can execute against the grid.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ScriptCommand {
    /// Select a cell by linear index.
    Select { index: usize },
    /// Select the cell under a pointer position given in NDC.
    Pick { ndc: [f32; 2] },
    /// Clear selection.
    ClearSelection,
    /// Raise (positive) or lower (negative) the selected cell.
    ChangeDepth { amount: i32 },
    /// Cycle the colour of the selected cell.
    ToggleColor,
    /// Load a previously saved blob.
    Load { data: String },
    /// Return the current state as a save blob.
    Export,
    /// Summarize the grid, or a single cell when `index` is given.
    Inspect {
        #[serde(default)]
        index: Option<usize>,
    },
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn outcome_response(outcome: CommandOutcome) -> CommandResponse {
    match outcome {
        CommandOutcome::Applied { index, cell } => CommandResponse::ok_with_data(serde_json::json!({
            "applied": true,
            "index": index,
            "cell": cell,
        })),
        CommandOutcome::Unchanged { index } => CommandResponse::ok_with_data(serde_json::json!({
            "applied": false,
            "index": index,
        })),
        CommandOutcome::NoSelection => CommandResponse::ok_with_data(serde_json::json!({
            "applied": false,
            "index": null,
        })),
    }
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: ScriptCommand) -> CommandResponse {
    match cmd {
        ScriptCommand::Select { index } => {
            if harness.select(index) {
                CommandResponse::ok_with_data(serde_json::json!({ "selected": index }))
            } else {
                CommandResponse::err(format!(
                    "Cell index {index} out of range (grid has {} cells)",
                    harness.size()
                ))
            }
        }

        ScriptCommand::Pick { ndc } => {
            let picked = harness.pick(ndc[0], ndc[1]);
            CommandResponse::ok_with_data(serde_json::json!({ "selected": picked }))
        }

        ScriptCommand::ClearSelection => {
            harness.clear_selection();
            CommandResponse::ok()
        }

        ScriptCommand::ChangeDepth { amount } => {
            outcome_response(harness.execute(GridCommand::ChangeDepthBy(amount)))
        }

        ScriptCommand::ToggleColor => outcome_response(harness.execute(GridCommand::ToggleColor)),

        ScriptCommand::Load { data } => match harness.load_blob(&data) {
            Ok(()) => CommandResponse::ok(),
            Err(e) => CommandResponse::err(e.to_string()),
        },

        ScriptCommand::Export => match harness.save_blob() {
            Ok(blob) => CommandResponse::ok_with_data(serde_json::json!({ "data": blob })),
            Err(e) => CommandResponse::err(e.to_string()),
        },

        ScriptCommand::Inspect { index: Some(index) } => match harness.cell(index) {
            Some(cell) => CommandResponse::ok_with_data(serde_json::json!({
                "index": index,
                "cell": cell,
            })),
            None => CommandResponse::err(format!("Cell index {index} out of range")),
        },

        ScriptCommand::Inspect { index: None } => {
            CommandResponse::ok_with_data(serde_json::json!({
                "size": harness.size(),
                "extruded": harness.state.grid.extruded_count(),
                "selected": harness.state.selection.selected(),
                "version": harness.state.grid.version(),
            }))
        }
    }
}

/// Parse and execute a single JSON command.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: ScriptCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute a JSON array of commands.
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<ScriptCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serde_toggle() {
        let cmd: ScriptCommand = serde_json::from_str(r#"{"command": "toggle_color"}"#).unwrap();
        assert!(matches!(cmd, ScriptCommand::ToggleColor));
    }

    #[test]
    fn test_command_serde_change_depth() {
        let json = r#"{"command": "change_depth", "amount": -1}"#;
        let cmd: ScriptCommand = serde_json::from_str(json).unwrap();
        match cmd {
            ScriptCommand::ChangeDepth { amount } => assert_eq!(amount, -1),
            _ => panic!("Expected ChangeDepth"),
        }
    }

    #[test]
    fn test_command_serde_inspect_without_index() {
        let cmd: ScriptCommand = serde_json::from_str(r#"{"command": "inspect"}"#).unwrap();
        assert!(matches!(cmd, ScriptCommand::Inspect { index: None }));
    }

    #[test]
    fn test_execute_select_out_of_range() {
        let mut h = TestHarness::with_size(2, 2);
        let resp = execute_json(&mut h, r#"{"command": "select", "index": 4}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.error.unwrap().contains("out of range"));
    }

    #[test]
    fn test_execute_change_depth_reports_cell() {
        let mut h = TestHarness::with_size(2, 2);
        h.select(0);
        let resp = execute_json(&mut h, r#"{"command": "change_depth", "amount": 1}"#).unwrap();
        assert!(resp.success);
        let data = resp.data.unwrap();
        assert_eq!(data["applied"], true);
        assert_eq!(data["index"], 0);
        assert_eq!(data["cell"]["depth"], 1);
        assert_eq!(data["cell"]["color"], 1);
    }

    #[test]
    fn test_execute_invalid_json() {
        let mut h = TestHarness::with_size(2, 2);
        assert!(execute_json(&mut h, "not valid json").is_err());
    }
}
