//! Identity resolution: assigns every IP a role and a canonical identifier.
//!
//! Two policies exist and they are never mixed within one run:
//! - `MembershipResolver` takes roles from the interconnect master/slave lists and
//!   numbers each role in lexicographic order of the original names.
//! - `RowFlagResolver` takes roles from the IP table's flag column and numbers each
//!   role in table row order.

use std::collections::{BTreeSet, HashMap};

use crate::error::Warning;
use crate::model::{CanonicalId, ConfigModel, InterconnectRecord, IpRecord, IpRow, Role};
use crate::project::RolePolicy;

/// Resolved record set plus the warnings raised while building it.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub model: ConfigModel,
    pub warnings: Vec<Warning>,
}

/// Trait implemented by role-resolution policies.
pub trait RoleResolver {
    fn resolve(&self, rows: &[IpRow], interconnects: &[InterconnectRecord]) -> Resolution;
    fn name(&self) -> &'static str;
}

/// Running per-role counters, scoped to one resolution.
#[derive(Debug, Default)]
struct IdAllocator {
    masters: usize,
    slaves: usize,
}

impl IdAllocator {
    fn next(&mut self, role: Role) -> CanonicalId {
        let counter = match role {
            Role::Master => &mut self.masters,
            Role::Slave => &mut self.slaves,
        };
        *counter += 1;
        CanonicalId::new(role, *counter)
    }
}

/// Role inferred from which interconnect list a name appears in.
///
/// A name listed as both master and slave is a conflict and resolves to master.
/// IP table entries listed by no interconnect become slaves numbered after the
/// listed slaves. Listed names without an IP table row get no record.
pub struct MembershipResolver;

impl RoleResolver for MembershipResolver {
    fn resolve(&self, rows: &[IpRow], interconnects: &[InterconnectRecord]) -> Resolution {
        let mut masters: BTreeSet<&str> = BTreeSet::new();
        let mut slaves: BTreeSet<&str> = BTreeSet::new();
        for ic in interconnects {
            masters.extend(ic.master_ips.iter().map(String::as_str));
            slaves.extend(ic.slave_ips.iter().map(String::as_str));
        }

        let mut warnings = Vec::new();
        let conflicts: Vec<&str> = masters.intersection(&slaves).copied().collect();
        for name in conflicts {
            log::warn!("IP '{}' listed as both master and slave; treating as master", name);
            slaves.remove(name);
            warnings.push(Warning::RoleConflict { name: name.to_string(), resolved_as: Role::Master });
        }

        let by_name: HashMap<&str, &IpRow> =
            rows.iter().map(|r| (r.original_name.as_str(), r)).collect();
        let mut unattached: BTreeSet<&str> = by_name.keys().copied().collect();

        let mut model = ConfigModel::new(interconnects.to_vec());
        let mut ids = IdAllocator::default();
        for (names, role) in [(&masters, Role::Master), (&slaves, Role::Slave)] {
            for &name in names {
                unattached.remove(name);
                match by_name.get(name) {
                    Some(row) => {
                        let id = ids.next(role);
                        log::debug!("Identified {}: {} -> {}", role.label().to_lowercase(), name, id);
                        model.insert(IpRecord::from_row(id, row));
                    }
                    None => log::debug!("Listed IP {} has no IP table row; no record created", name),
                }
            }
        }

        for name in unattached {
            let id = ids.next(Role::Slave);
            log::debug!("Identified unattached IP: {} -> {}", name, id);
            model.insert(IpRecord::from_row(id, by_name[name]));
            warnings.push(Warning::Unattached { name: name.to_string(), resolved_as: Role::Slave });
        }

        Resolution { model, warnings }
    }

    fn name(&self) -> &'static str {
        "membership"
    }
}

/// Role read from the IP table's flag column; ids follow table row order.
///
/// The interconnect table is not consulted for role.
pub struct RowFlagResolver;

impl RoleResolver for RowFlagResolver {
    fn resolve(&self, rows: &[IpRow], interconnects: &[InterconnectRecord]) -> Resolution {
        let mut model = ConfigModel::new(interconnects.to_vec());
        let mut ids = IdAllocator::default();
        for row in rows {
            let role = if row.role_flag.unwrap_or(false) { Role::Master } else { Role::Slave };
            let id = ids.next(role);
            log::debug!("Identified {}: {} -> {}", role.label().to_lowercase(), row.original_name, id);
            model.insert(IpRecord::from_row(id, row));
        }
        Resolution { model, warnings: Vec::new() }
    }

    fn name(&self) -> &'static str {
        "row_flag"
    }
}

/// Resolver implementing the given policy.
pub fn resolver_for(policy: RolePolicy) -> Box<dyn RoleResolver> {
    match policy {
        RolePolicy::Membership => Box::new(MembershipResolver),
        RolePolicy::RowFlag => Box::new(RowFlagResolver),
    }
}

/// Resolve identities under `policy`.
pub fn resolve_identities(
    policy: RolePolicy,
    rows: &[IpRow],
    interconnects: &[InterconnectRecord],
) -> Resolution {
    let resolver = resolver_for(policy);
    log::debug!("Resolving {} IP rows with the {} resolver", rows.len(), resolver.name());
    resolver.resolve(rows, interconnects)
}
