use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Spaces inserted per Tab. Zero is treated as one.
    pub indent_width: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl EditorConfig {
    pub fn indent_unit(&self) -> String {
        " ".repeat(usize::from(self.indent_width.max(1)))
    }
}
