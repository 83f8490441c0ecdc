//! JSON export of the laid out diagram.
//!
//! The output mirrors the [`Diagram`] structure with camelCase keys, so a
//! front end can draw the diagram without re-running the layout.

use log::info;

use ladderview_core::draw::Diagram;

use crate::export;

/// Serializes a [`Diagram`] as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl export::Exporter for Json {
    fn export(&self, diagram: &Diagram) -> Result<String, export::Error> {
        let content = serde_json::to_string_pretty(diagram)
            .map_err(|err| export::Error::Render(format!("Failed to serialize diagram: {err}")))?;

        info!(bytes = content.len(); "JSON exported");
        Ok(content)
    }
}
