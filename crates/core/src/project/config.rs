use serde::{Deserialize, Serialize};

/// How each IP's role is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolePolicy {
    /// Role comes from the interconnect master/slave lists; ids follow name order.
    #[default]
    Membership,
    /// Role comes from a flag column in the IP table; ids follow row order.
    RowFlag,
}

impl RolePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RolePolicy::Membership => "membership",
            RolePolicy::RowFlag => "row_flag",
        }
    }
}

/// Row order of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdOrder {
    /// Masters before slaves, then by numeric suffix (`M2` before `M10`).
    #[default]
    Numeric,
    /// Plain string order of the identifier (`M10` before `M2`).
    Lexicographic,
}

impl IdOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdOrder::Numeric => "numeric",
            IdOrder::Lexicographic => "lexicographic",
        }
    }
}

/// Header names used to locate columns by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub interconnect_name: String,
    pub masters: String,
    pub slaves: String,
    /// IP table column holding the master flag (row-flag policy only).
    pub role_flag: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            interconnect_name: "interconnect name".to_string(),
            masters: "set of masters".to_string(),
            slaves: "set of slaves".to_string(),
            role_flag: "master".to_string(),
        }
    }
}

/// Serializable generator configuration.
///
/// This lives at `ipconf.json` next to the workbook. Every field has a default,
/// so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Config format version.
    pub config_version: String,
    pub role_policy: RolePolicy,
    pub id_order: IdOrder,
    pub columns: ColumnNames,
    /// Report file name, relative to the project root unless absolute.
    pub output_file: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            config_version: "0.1.0".to_string(),
            role_policy: RolePolicy::default(),
            id_order: IdOrder::default(),
            columns: ColumnNames::default(),
            output_file: "config.txt".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Builder-style override of the role policy.
    pub fn with_policy(mut self, policy: Option<RolePolicy>) -> Self {
        if let Some(p) = policy {
            self.role_policy = p;
        }
        self
    }

    /// Builder-style override of the report order.
    pub fn with_order(mut self, order: Option<IdOrder>) -> Self {
        if let Some(o) = order {
            self.id_order = o;
        }
        self
    }
}
