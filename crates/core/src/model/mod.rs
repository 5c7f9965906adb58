//! Config model: IP records, interconnect records, and the canonical naming scheme.
//!
//! The model is passive storage. The identity resolver builds it, the property
//! propagator mutates the `final_*` fields of its IP records, and the report
//! renderer reads it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Marker written for attributes that were never set.
pub const UNSET: &str = "-";

/// Role of an IP block on its interconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Master,
    Slave,
}

impl Role {
    /// Upper-case label used in the report.
    pub fn label(self) -> &'static str {
        match self {
            Role::Master => "MASTER",
            Role::Slave => "SLAVE",
        }
    }

    /// Prefix of canonical identifiers for this role.
    pub fn prefix(self) -> char {
        match self {
            Role::Master => 'M',
            Role::Slave => 'S',
        }
    }
}

/// Canonical identifier such as `M1` or `S12`.
///
/// Ordering is numeric-aware: masters before slaves, then by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalId {
    pub role: Role,
    /// 1-based rank within the role.
    pub index: usize,
}

impl CanonicalId {
    pub fn new(role: Role, index: usize) -> Self {
        Self { role, index }
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.role.prefix(), self.index)
    }
}

impl Serialize for CanonicalId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Baseline attributes of one IP table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpRow {
    pub original_name: String,
    pub read_write: String,
    pub bit_width: u64,
    pub frequency: u64,
    pub clk_domain: String,
    /// Value of the role-flag column, when the sheet carries one.
    pub role_flag: Option<bool>,
    /// 1-based sheet row the values were taken from.
    pub row: usize,
}

/// One resolved IP block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpRecord {
    pub canonical_id: CanonicalId,
    pub original_name: String,
    pub role: Role,
    pub read_write: String,
    pub original_bit_width: u64,
    pub original_frequency: u64,
    pub original_clk_domain: String,
    pub final_bit_width: u64,
    pub final_frequency: u64,
    pub final_protocol: String,
    pub final_clk_domain: String,
    pub connected_interconnect: String,
}

impl IpRecord {
    /// Build a record whose derived attributes start at the row's baseline.
    pub fn from_row(canonical_id: CanonicalId, row: &IpRow) -> Self {
        Self {
            canonical_id,
            original_name: row.original_name.clone(),
            role: canonical_id.role,
            read_write: row.read_write.clone(),
            original_bit_width: row.bit_width,
            original_frequency: row.frequency,
            original_clk_domain: row.clk_domain.clone(),
            final_bit_width: row.bit_width,
            final_frequency: row.frequency,
            final_protocol: UNSET.to_string(),
            final_clk_domain: row.clk_domain.clone(),
            connected_interconnect: UNSET.to_string(),
        }
    }

    /// Overwrite the derived attributes with an interconnect's values.
    pub fn apply(&mut self, interconnect: &InterconnectRecord) {
        self.final_bit_width = interconnect.bit_width;
        self.final_frequency = interconnect.frequency;
        self.final_protocol = interconnect.protocol.clone();
        self.final_clk_domain = interconnect.clk_domain.clone();
        self.connected_interconnect = interconnect.name.clone();
    }

    /// True while no interconnect has claimed this IP.
    pub fn is_unattached(&self) -> bool {
        self.connected_interconnect == UNSET
    }
}

/// One interconnect fabric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterconnectRecord {
    pub name: String,
    pub bit_width: u64,
    pub frequency: u64,
    pub protocol: String,
    pub clk_domain: String,
    pub master_ips: Vec<String>,
    pub slave_ips: Vec<String>,
}

impl InterconnectRecord {
    /// Every listed name with the role it was listed under, masters first.
    pub fn members(&self) -> impl Iterator<Item = (&str, Role)> {
        self.master_ips
            .iter()
            .map(|n| (n.as_str(), Role::Master))
            .chain(self.slave_ips.iter().map(|n| (n.as_str(), Role::Slave)))
    }
}

/// In-memory record set produced by one pipeline invocation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigModel {
    /// IP records in the order their identifiers were assigned.
    pub ips: Vec<IpRecord>,
    pub interconnects: Vec<InterconnectRecord>,
    #[serde(skip)]
    by_original: BTreeMap<String, usize>,
}

impl ConfigModel {
    pub fn new(interconnects: Vec<InterconnectRecord>) -> Self {
        Self { ips: Vec::new(), interconnects, by_original: BTreeMap::new() }
    }

    /// Add a record. A record whose original name is already present replaces it.
    pub fn insert(&mut self, record: IpRecord) {
        match self.by_original.get(&record.original_name) {
            Some(&idx) => self.ips[idx] = record,
            None => {
                self.by_original.insert(record.original_name.clone(), self.ips.len());
                self.ips.push(record);
            }
        }
    }

    /// Look up the canonical identifier of an original name.
    pub fn canonical_for(&self, original_name: &str) -> Option<CanonicalId> {
        self.by_original.get(original_name).map(|&idx| self.ips[idx].canonical_id)
    }

    /// Look up the original name behind a canonical identifier.
    pub fn original_for(&self, id: CanonicalId) -> Option<&str> {
        self.ips.iter().find(|ip| ip.canonical_id == id).map(|ip| ip.original_name.as_str())
    }

    pub fn get(&self, original_name: &str) -> Option<&IpRecord> {
        self.by_original.get(original_name).map(|&idx| &self.ips[idx])
    }

    pub fn get_mut(&mut self, original_name: &str) -> Option<&mut IpRecord> {
        match self.by_original.get(original_name) {
            Some(&idx) => Some(&mut self.ips[idx]),
            None => None,
        }
    }

    /// Find a record by its canonical identifier string, e.g. `"M2"`.
    pub fn by_id(&self, id: &str) -> Option<&IpRecord> {
        self.ips.iter().find(|ip| ip.canonical_id.to_string() == id)
    }

    /// Number of records holding the given role.
    pub fn count(&self, role: Role) -> usize {
        self.ips.iter().filter(|ip| ip.role == role).count()
    }

    /// Original name → canonical identifier, ordered by original name.
    pub fn mapping(&self) -> BTreeMap<&str, CanonicalId> {
        self.ips.iter().map(|ip| (ip.original_name.as_str(), ip.canonical_id)).collect()
    }
}
