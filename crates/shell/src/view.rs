use serde::{Deserialize, Serialize};

/// The closed set of screens the shell can mount.
///
/// Catalog and Wizard carry state; the rest are placeholder panels. The
/// string form matches the selector identifiers the chrome emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Dashboard,
    Catalog,
    Wizard,
    Stocks,
    Sales,
    Documents,
    Returns,
    Reports,
}

impl View {
    /// Interpret a selector identifier. Unrecognized values fall back to
    /// the dashboard explicitly rather than being rejected.
    pub fn parse(selector: &str) -> View {
        match selector {
            "dashboard" => View::Dashboard,
            "inventory" => View::Catalog,
            "add-product" => View::Wizard,
            "stocks" => View::Stocks,
            "sales" => View::Sales,
            "documents" => View::Documents,
            "return" => View::Returns,
            "report" => View::Reports,
            _ => View::Dashboard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Catalog => "inventory",
            View::Wizard => "add-product",
            View::Stocks => "stocks",
            View::Sales => "sales",
            View::Documents => "documents",
            View::Returns => "return",
            View::Reports => "report",
        }
    }
}

impl Default for View {
    fn default() -> Self {
        View::Dashboard
    }
}

impl core::fmt::Display for View {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
