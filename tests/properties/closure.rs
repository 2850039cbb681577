//! Property tests for the project closure.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use proptest::prelude::*;

use manifest_split::domain::entities::{ModuleRecord, Overrides, ProjectIndex, HEADER_LIBRARIES};
use manifest_split::domain::ports::InputQuery;
use manifest_split::domain::services::{Closure, ClosureEngine, ModuleGraph};
use manifest_split::SplitResult;

/// One module per project `p{i}`, named `m{i}`.
#[derive(Debug, Clone)]
struct World {
    size: usize,
    header: Vec<bool>,
    /// Build-graph inputs of each module, as project indices.
    inputs: Vec<Vec<usize>>,
    /// Dependencies of each module, as module indices.
    deps: Vec<Vec<usize>>,
    /// Projects holding the targets' direct inputs.
    direct: Vec<usize>,
}

struct WorldInputs<'a>(&'a World);

impl InputQuery for WorldInputs<'_> {
    fn inputs(&self, modules: &[String]) -> SplitResult<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        for module in modules {
            let inputs = match module.strip_prefix('m').and_then(|i| i.parse::<usize>().ok()) {
                Some(i) => self.0.inputs[i].clone(),
                None => self.0.direct.clone(),
            };
            found.extend(inputs.into_iter().map(|p| format!("p{p}/src/file.cc")));
        }
        Ok(found)
    }
}

impl World {
    fn index(&self) -> ProjectIndex {
        ProjectIndex::from_pairs((0..self.size).map(|i| (format!("p{i}"), format!("p{i}"))))
    }

    fn graph(&self, index: &ProjectIndex) -> ModuleGraph {
        let records = (0..self.size).map(|i| {
            let class = if self.header[i] { HEADER_LIBRARIES } else { "SHARED_LIBRARIES" };
            ModuleRecord::new(
                format!("m{i}"),
                vec![format!("p{i}")],
                vec![class.to_string()],
                self.deps[i].iter().map(|d| format!("m{d}")).collect(),
            )
            .unwrap()
        });
        ModuleGraph::build(index, records).unwrap()
    }

    fn close(&self, overrides: &Overrides) -> Closure {
        let index = self.index();
        let graph = self.graph(&index);
        let inputs = WorldInputs(self);
        ClosureEngine::new(&index, &graph, &inputs)
            .run(&["target".to_string()], &BTreeSet::new(), overrides)
            .unwrap()
    }
}

fn world() -> impl Strategy<Value = World> {
    (1usize..10).prop_flat_map(|size| {
        let indices = proptest::collection::vec(0..size, 0..4);
        (
            proptest::collection::vec(any::<bool>(), size),
            proptest::collection::vec(indices.clone(), size),
            proptest::collection::vec(indices.clone(), size),
            indices,
        )
            .prop_map(move |(header, inputs, deps, direct)| World {
                size,
                header,
                inputs,
                deps,
                direct,
            })
    })
}

fn overrides(add: &[usize], remove: &[usize]) -> Overrides {
    let mut overrides = Overrides::new();
    for i in add {
        overrides.add_project(format!("p{i}"), Path::new("add.xml"));
    }
    for i in remove {
        overrides.remove_project(format!("p{i}"), Path::new("remove.xml"));
    }
    overrides
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: feeding the result back in as manual additions changes nothing.
    #[test]
    fn property_closure_is_idempotent(world in world()) {
        let first = world.close(&Overrides::new());

        let mut again = Overrides::new();
        for project in &first.retained {
            again.add_project(project.as_str(), Path::new("previous.xml"));
        }
        let second = world.close(&again);

        prop_assert_eq!(first.retained, second.retained);
    }

    /// PROPERTY: adding a project never shrinks the result.
    #[test]
    fn property_additions_are_monotonic(world in world(), extra in 0usize..10) {
        let extra = extra % world.size;
        let base = world.close(&Overrides::new());
        let grown = world.close(&overrides(&[extra], &[]));

        prop_assert!(base.retained.is_subset(&grown.retained));
        let extra_name = format!("p{}", extra);
        prop_assert!(grown.retained.contains(&extra_name));
    }

    /// PROPERTY: a removed project is never retained, even when also added.
    #[test]
    fn property_removal_takes_precedence(
        world in world(),
        add in proptest::collection::vec(0usize..10, 0..4),
        remove in proptest::collection::vec(0usize..10, 1..4),
    ) {
        let add: Vec<usize> = add.into_iter().map(|i| i % world.size).collect();
        let remove: Vec<usize> = remove.into_iter().map(|i| i % world.size).collect();

        let closure = world.close(&overrides(&add, &remove));

        for i in &remove {
            let removed = format!("p{}", i);
            prop_assert!(!closure.retained.contains(&removed));
        }
    }

    /// PROPERTY: every pass checks at least one new project, so the loop
    /// ends within one pass per project and the sizes never decrease.
    #[test]
    fn property_converges_within_project_count(world in world()) {
        let closure = world.close(&Overrides::new());

        prop_assert!(closure.passes() <= world.size);
        prop_assert!(closure.pass_sizes.windows(2).all(|w| w[0] <= w[1]));
        let last = closure.pass_sizes.last().copied().unwrap_or(closure.seed_size);
        prop_assert_eq!(last, closure.retained.len());
    }

    /// PROPERTY: every retained project is explained by the debug report.
    #[test]
    fn property_retained_projects_have_provenance(world in world(), extra in 0usize..10) {
        let extra = extra % world.size;
        let closure = world.close(&overrides(&[extra], &[]));

        let report: BTreeMap<_, _> = closure
            .retained
            .iter()
            .map(|p| (p.clone(), closure.report.get(p).cloned()))
            .collect();
        for (project, record) in report {
            let record = record.expect("retained project has a record");
            prop_assert!(
                record.direct_input
                    || record.adjacent_input
                    || record.deps_input
                    || !record.manual_add_configs.is_empty(),
                "{} has no provenance",
                project
            );
        }
    }
}
