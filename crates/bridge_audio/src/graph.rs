//! Evaluation order of the module graph.
//!
//! Modules are visited depth-first, upstream before downstream, so that every
//! module runs after the modules feeding its inputs within the same tick.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::AudioError;
use crate::module::ModuleId;

/// A wire from an Output field of one module to an Input field of another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub from: ModuleId,
    pub from_field: &'static str,
    pub to: ModuleId,
    pub to_field: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Compute a dependency-first order over `modules`.
///
/// Ties are broken by module id. A cycle is reported with the first module
/// found on it.
pub fn evaluation_order(
    modules: &[ModuleId],
    connections: &[Connection],
) -> Result<Vec<ModuleId>, AudioError> {
    let mut upstream: BTreeMap<ModuleId, BTreeSet<ModuleId>> = BTreeMap::new();
    for connection in connections {
        upstream
            .entry(connection.to)
            .or_default()
            .insert(connection.from);
    }

    let mut roots = modules.to_vec();
    roots.sort_unstable();

    let mut marks = BTreeMap::new();
    let mut order = Vec::with_capacity(roots.len());
    for id in roots {
        visit(id, &upstream, &mut marks, &mut order)?;
    }
    Ok(order)
}

fn visit(
    id: ModuleId,
    upstream: &BTreeMap<ModuleId, BTreeSet<ModuleId>>,
    marks: &mut BTreeMap<ModuleId, Mark>,
    order: &mut Vec<ModuleId>,
) -> Result<(), AudioError> {
    match marks.get(&id) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::Visiting) => return Err(AudioError::Cycle(id)),
        None => {}
    }

    marks.insert(id, Mark::Visiting);
    if let Some(dependencies) = upstream.get(&id) {
        for &dependency in dependencies {
            visit(dependency, upstream, marks, order)?;
        }
    }
    marks.insert(id, Mark::Done);
    order.push(id);
    Ok(())
}
