//! Property propagation from interconnects onto their attached IPs.

use crate::error::Warning;
use crate::model::ConfigModel;

/// Overwrite the derived attributes of every referenced IP.
///
/// Interconnects are visited in table order and, within each, the master list
/// before the slave list. The last interconnect to reference an IP wins. Names
/// with no record produce a `DanglingReference` warning and are skipped.
pub fn propagate_properties(model: &mut ConfigModel) -> Vec<Warning> {
    let interconnects = std::mem::take(&mut model.interconnects);
    let mut warnings = Vec::new();

    for ic in &interconnects {
        for (name, listed_as) in ic.members() {
            match model.get_mut(name) {
                Some(ip) => {
                    ip.apply(ic);
                    log::debug!(
                        "Updated {} {} with {} properties",
                        listed_as.label().to_lowercase(),
                        ip.canonical_id,
                        ic.name
                    );
                }
                None => {
                    let warning = Warning::DanglingReference {
                        interconnect: ic.name.clone(),
                        name: name.to_string(),
                        listed_as,
                    };
                    log::warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }
    }

    model.interconnects = interconnects;
    warnings
}
