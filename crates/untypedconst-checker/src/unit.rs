//! Whole-unit snapshots.
//!
//! A host front end serializes one compilation unit (tree plus type facts)
//! as JSON; [`CompilationUnit`] loads it and runs the pass. Facts are written
//! as lists of `{ "node": <index>, ... }` entries.

use serde::{Deserialize, Serialize};
use untypedconst_common::Diagnostic;
use untypedconst_syntax::{NodeArena, NodeIndex};

use crate::type_api::{TypeQueries, TypeTable};
use crate::types::{Callee, ConstDecl, ConstValue, Type, TypeAndValue};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "UnitSnapshot", into = "UnitSnapshot")]
pub struct CompilationUnit {
    pub file: String,
    /// Source text, used only to render snippets.
    pub source: Option<String>,
    pub arena: NodeArena,
    pub root: NodeIndex,
    pub types: TypeTable,
}

impl CompilationUnit {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn package(&self) -> &str {
        self.types.package_path()
    }

    /// Run the pass and collect its diagnostics in report order.
    pub fn check(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        crate::check_source_file(
            &self.arena,
            self.root,
            &self.types,
            &self.file,
            &mut diagnostics,
        );
        diagnostics
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct UnitSnapshot {
    file: String,
    package: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    nodes: NodeArena,
    root: NodeIndex,
    #[serde(default)]
    types: Vec<TypeEntry>,
    #[serde(default)]
    constants: Vec<ConstDecl>,
    #[serde(default)]
    callees: Vec<CalleeEntry>,
}

#[derive(Clone, Serialize, Deserialize)]
struct TypeEntry {
    node: NodeIndex,
    #[serde(rename = "type")]
    ty: Type,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<ConstValue>,
}

#[derive(Clone, Serialize, Deserialize)]
struct CalleeEntry {
    node: NodeIndex,
    callee: Callee,
}

impl From<UnitSnapshot> for CompilationUnit {
    fn from(snapshot: UnitSnapshot) -> Self {
        let mut types = TypeTable::new(snapshot.package);
        for entry in snapshot.types {
            types.record_type(
                entry.node,
                TypeAndValue {
                    ty: entry.ty,
                    value: entry.value,
                },
            );
        }
        for decl in snapshot.constants {
            types.record_constant(decl);
        }
        for entry in snapshot.callees {
            types.record_callee(entry.node, entry.callee);
        }

        CompilationUnit {
            file: snapshot.file,
            source: snapshot.source,
            arena: snapshot.nodes,
            root: snapshot.root,
            types,
        }
    }
}

impl From<CompilationUnit> for UnitSnapshot {
    fn from(unit: CompilationUnit) -> Self {
        let types = unit
            .types
            .types_sorted()
            .into_iter()
            .map(|(node, fact)| TypeEntry {
                node,
                ty: fact.ty.clone(),
                value: fact.value.clone(),
            })
            .collect();
        let constants = unit.types.constants_sorted().into_iter().cloned().collect();
        let callees = unit
            .types
            .callees_sorted()
            .into_iter()
            .map(|(node, callee)| CalleeEntry {
                node,
                callee: callee.clone(),
            })
            .collect();

        UnitSnapshot {
            file: unit.file,
            package: unit.types.package_path().to_string(),
            source: unit.source,
            nodes: unit.arena,
            root: unit.root,
            types,
            constants,
            callees,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit_tests.rs"]
mod tests;
