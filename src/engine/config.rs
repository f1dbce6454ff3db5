// Configuration for the string calculator
// Defaults reproduce the classic kata rules

/// Calculator settings
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    /// Largest value that still counts toward the sum (default 1000)
    pub max_value: i64,

    /// Delimiters used when no custom header is present (default "," and "\n")
    pub default_delimiters: Vec<String>,

    /// Prefix that opens a custom delimiter header (default "//")
    pub header_marker: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_value: 1000,
            default_delimiters: vec![",".to_string(), "\n".to_string()],
            header_marker: "//".to_string(),
        }
    }
}
