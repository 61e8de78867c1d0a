//! Code generation configuration

use lslpy_core::runtime;

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Number of spaces per indentation level; Python needs at least 1
    pub indent_width: usize,
    /// Name of the generated script class
    pub class_name: String,
    /// Runtime module star-imported at the top of the output
    pub runtime_module: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            class_name: "Script".to_string(),
            runtime_module: runtime::DEFAULT_RUNTIME_MODULE.to_string(),
        }
    }
}

impl CodegenConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the generated class name
    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }

    /// Set the runtime module
    pub fn with_runtime_module(mut self, module: impl Into<String>) -> Self {
        self.runtime_module = module.into();
        self
    }
}
