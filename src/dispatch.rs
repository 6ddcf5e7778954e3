//! Cluster dispatch: raw props in, render instruction out.
//!
//! The registry is built once from an ordered list of cluster names and is
//! immutable afterwards, so it can be shared freely between widgets.
//!
//! Registration tolerates malformed modules (they are skipped and recorded
//! in [`DispatchRegistry::skipped`]). When two modules declare the same
//! cluster, the one registered later shadows the earlier one.

use std::collections::HashMap;

use crate::errors::RegistryError;
use crate::instruction::RenderInstruction;
use crate::log::{debug, warn};
use crate::mappers::{self, MapperModule, TranslateFn};
use crate::toolkit::Toolkit;
use crate::value::RawProps;

#[derive(Debug, Clone, Default)]
pub struct DispatchRegistry {
    mappers: HashMap<String, TranslateFn>,
    /// Cluster names in registration order, without duplicates
    order: Vec<String>,
    default_cluster: Option<String>,
    skipped: Vec<RegistryError>,
}

impl DispatchRegistry {
    /// Registry over every built-in mapper
    pub fn builtin() -> Self {
        Self::build(mappers::builtin_names(), mappers::lookup)
    }

    /// Build from an ordered list of names and a module lookup.
    ///
    /// Names the lookup does not know are skipped silently; modules with a
    /// broken contract are skipped and recorded.
    pub fn build<I, S, F>(names: I, lookup: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<MapperModule>,
    {
        let mut registry = Self::default();
        for name in names {
            let name = name.as_ref();
            match lookup(name) {
                Some(module) => registry.register(name, module),
                None => {
                    debug!(cluster = name, "no mapper module, skipping");
                }
            }
        }
        registry
    }

    /// Build directly from modules, in order
    pub fn from_modules(modules: impl IntoIterator<Item = MapperModule>) -> Self {
        let mut registry = Self::default();
        for module in modules {
            let listed = module.cluster.clone();
            registry.register(&listed, module);
        }
        registry
    }

    /// Cluster used when the props carry none
    pub fn with_default_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.default_cluster = Some(cluster.into());
        self
    }

    fn register(&mut self, listed: &str, module: MapperModule) {
        if module.cluster.is_empty() {
            self.skip(RegistryError::MissingCluster {
                listed: listed.to_string(),
            });
            return;
        }
        let Some(translate) = module.translate else {
            self.skip(RegistryError::MissingTranslate {
                cluster: module.cluster,
            });
            return;
        };
        if self.mappers.insert(module.cluster.clone(), translate).is_some() {
            debug!(cluster = %module.cluster, "mapper shadows an earlier registration");
        } else {
            self.order.push(module.cluster);
        }
    }

    fn skip(&mut self, error: RegistryError) {
        warn!(%error, "skipping malformed mapper module");
        self.skipped.push(error);
    }

    /// Translate one props bag. Never fails: a missing cluster, unknown
    /// cluster or unrecognized kind all produce the empty instruction.
    pub fn translate(&self, props: &RawProps) -> RenderInstruction {
        let Some(cluster) = props.cluster().or(self.default_cluster.as_deref()) else {
            debug!("props carry no cluster");
            return RenderInstruction::empty();
        };
        let Some(translate) = self.mappers.get(cluster) else {
            debug!(cluster, "no mapper registered for cluster");
            return RenderInstruction::empty();
        };
        let toolkit = Toolkit::new(props);
        match translate(props, &toolkit) {
            Some(instruction) => instruction,
            None => {
                debug!(cluster, kind = ?props.kind(), "mapper produced nothing");
                RenderInstruction::empty()
            }
        }
    }

    pub fn contains(&self, cluster: &str) -> bool {
        self.mappers.contains_key(cluster)
    }

    /// Registered cluster names in registration order
    pub fn clusters(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn default_cluster(&self) -> Option<&str> {
        self.default_cluster.as_deref()
    }

    /// Modules rejected while building
    pub fn skipped(&self) -> &[RegistryError] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }
}
