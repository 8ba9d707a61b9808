//! Tool Registry - discovery, registration and lookup of all tools.
//!
//! The registry has a two-step lifecycle:
//!
//! 1. [`RegistryBuilder`] loads tool modules and registers their
//!    definitions. Any failure here is fatal.
//! 2. [`RegistryBuilder::freeze`] turns it into a [`ToolRegistry`], which is
//!    read-only and shared by every connection and transport.

use std::collections::{BTreeMap, BTreeSet};

use rmcp::model::{JsonObject, Tool};
use tracing::{debug, info};

use super::definition::{ToolContext, ToolDefinition, ToolResult};
use super::definitions::MODULES;
use super::error::RegistryError;

/// Loader signature of a tool module.
pub type LoadFn = fn(&ToolContext) -> Result<Vec<ToolDefinition>, RegistryError>;

/// A unit of tool declarations, discovered at startup.
#[derive(Debug, Clone, Copy)]
pub struct ToolModule {
    /// Module name; also the identity of every tool it declares.
    pub name: &'static str,

    /// Builds the module's definitions against the shared context.
    pub load: LoadFn,
}

struct Entry {
    module: &'static str,
    definition: ToolDefinition,
}

// ============================================================================
// Builder (discovery phase)
// ============================================================================

/// Mutable registry used while tools are being discovered.
pub struct RegistryBuilder {
    ctx: ToolContext,
    entries: BTreeMap<&'static str, Entry>,
    loaded: BTreeSet<&'static str>,
}

impl RegistryBuilder {
    /// Create an empty builder bound to the shared tool context.
    pub fn new(ctx: ToolContext) -> Self {
        Self {
            ctx,
            entries: BTreeMap::new(),
            loaded: BTreeSet::new(),
        }
    }

    /// Load every built-in tool module.
    pub fn discover(&mut self) -> Result<usize, RegistryError> {
        self.discover_from(MODULES)
    }

    /// Load the given modules and register their tools.
    ///
    /// Modules that were already loaded by this builder are skipped, so
    /// running discovery twice leaves the registry unchanged. Returns the
    /// number of newly registered tools.
    pub fn discover_from(&mut self, modules: &[ToolModule]) -> Result<usize, RegistryError> {
        let mut added = 0;

        for module in modules {
            if self.loaded.contains(module.name) {
                debug!("Tool module already loaded: {}", module.name);
                continue;
            }

            let definitions = (module.load)(&self.ctx)?;
            if definitions.is_empty() {
                return Err(RegistryError::EmptyModule(module.name.to_string()));
            }

            self.check_module(module.name, &definitions)?;
            for definition in definitions {
                if self.register(module.name, definition)? {
                    added += 1;
                }
            }

            self.loaded.insert(module.name);
            debug!("Loaded tool module: {}", module.name);
        }

        Ok(added)
    }

    /// Reject a module before any of its tools are inserted.
    fn check_module(
        &self,
        module: &'static str,
        definitions: &[ToolDefinition],
    ) -> Result<(), RegistryError> {
        let mut seen = BTreeSet::new();
        for definition in definitions {
            let name = definition.name();
            if !seen.insert(name) {
                return Err(RegistryError::duplicate(name, module, module));
            }
            if let Some(existing) = self.entries.get(name) {
                if existing.module != module {
                    return Err(RegistryError::duplicate(name, module, existing.module));
                }
            }
        }
        Ok(())
    }

    /// Register one definition on behalf of `module`.
    ///
    /// Returns `Ok(false)` when the same module already registered this
    /// name (a re-import). A name owned by another module is rejected.
    pub fn register(
        &mut self,
        module: &'static str,
        definition: ToolDefinition,
    ) -> Result<bool, RegistryError> {
        let name = definition.name();
        if let Some(existing) = self.entries.get(name) {
            if existing.module == module {
                debug!("Tool {} re-registered by {}, keeping original", name, module);
                return Ok(false);
            }
            return Err(RegistryError::duplicate(name, module, existing.module));
        }

        self.entries.insert(name, Entry { module, definition });
        Ok(true)
    }

    /// Number of tools registered so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End discovery. The returned registry cannot be modified.
    pub fn freeze(self) -> ToolRegistry {
        let tools: BTreeMap<_, _> = self
            .entries
            .into_iter()
            .map(|(name, entry)| (name, entry.definition))
            .collect();
        info!(
            "Registered {} tools from {} modules",
            tools.len(),
            self.loaded.len()
        );
        ToolRegistry { tools }
    }
}

// ============================================================================
// Frozen registry (serving phase)
// ============================================================================

/// Read-only set of registered tools, ordered by name.
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, ToolDefinition>,
}

impl ToolRegistry {
    /// Discover all built-in tools and freeze the result.
    pub fn discover(ctx: ToolContext) -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::new(ctx);
        builder.discover()?;
        Ok(builder.freeze())
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.keys().copied().collect()
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    /// Iterate over all definitions.
    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.tools.values().map(ToolDefinition::to_tool).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Call a tool by name. `None` if no such tool is registered.
    pub async fn call_tool(&self, name: &str, arguments: JsonObject) -> Option<ToolResult> {
        let tool = self.tools.get(name)?;
        Some(tool.call(arguments).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EntityKind;
    use crate::domains::tools::definitions::common::get_tool;
    use crate::domains::tools::testing::FakeApi;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    fn load_duplicate(ctx: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
        Ok(vec![get_tool("get_story", "Shadow", ctx, EntityKind::Stories)])
    }

    fn load_twice(ctx: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
        Ok(vec![
            get_tool("get_thing", "One", ctx, EntityKind::Stories),
            get_tool("get_thing", "Two", ctx, EntityKind::Stories),
        ])
    }

    fn load_broken(_: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
        Err(RegistryError::module_load("broken", "declarations unavailable"))
    }

    fn load_empty(_: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
        Ok(Vec::new())
    }

    fn builder() -> RegistryBuilder {
        RegistryBuilder::new(FakeApi::new().context())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = assert_ok!(ToolRegistry::discover(FakeApi::new().context()));
        let names = registry.tool_names();
        assert_eq!(names.len(), 37);
        assert!(names.contains(&"get_vulnerability"));
        assert!(names.contains(&"list_trending_threat_actors"));
        assert!(names.contains(&"search"));
        assert!(names.contains(&"list_sources"));
        assert!(names.contains(&"list_story_topics"));
        assert!(names.contains(&"get_attack_pattern_malware"));
    }

    #[test]
    fn test_tool_names_are_unique() {
        let registry = ToolRegistry::discover(FakeApi::new().context()).unwrap();
        let names = registry.tool_names();
        let unique: BTreeSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        assert_eq!(registry.get_all_tools().len(), names.len());
    }

    #[test]
    fn test_discovery_is_idempotent() {
        let mut builder = builder();
        let first = assert_ok!(builder.discover());
        let names_once: Vec<_> = builder.entries.keys().copied().collect();

        let second = assert_ok!(builder.discover());
        assert_eq!(first, 37);
        assert_eq!(second, 0);
        let names_twice: Vec<_> = builder.entries.keys().copied().collect();
        assert_eq!(names_once, names_twice);
    }

    #[test]
    fn test_reregistration_from_same_module_is_noop() {
        let mut builder = builder();
        let ctx = builder.ctx.clone();
        let tool = get_tool("get_story", "Story", &ctx, EntityKind::Stories);

        assert!(assert_ok!(builder.register("stories", tool.clone())));
        assert!(!assert_ok!(builder.register("stories", tool)));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_duplicate_name_from_other_module_is_rejected() {
        let mut builder = builder();
        builder.discover().unwrap();

        let shadow = ToolModule {
            name: "shadow",
            load: load_duplicate,
        };
        let err = assert_err!(builder.discover_from(&[shadow]));
        assert!(matches!(
            err,
            RegistryError::DuplicateTool { ref name, ref existing, .. }
                if name == "get_story" && existing == "stories"
        ));
    }

    #[test]
    fn test_duplicate_within_module_is_rejected() {
        let module = ToolModule {
            name: "twice",
            load: load_twice,
        };
        let mut builder = builder();
        assert_err!(builder.discover_from(&[module]));
        assert!(builder.is_empty());
    }

    #[test]
    fn test_failing_module_aborts_discovery() {
        let broken = ToolModule {
            name: "broken",
            load: load_broken,
        };
        let mut builder = builder();
        let err = assert_err!(builder.discover_from(&[MODULES[0], broken, MODULES[1]]));
        assert!(matches!(err, RegistryError::ModuleLoad { .. }));
    }

    #[test]
    fn test_empty_module_aborts_discovery() {
        let empty = ToolModule {
            name: "empty",
            load: load_empty,
        };
        let err = assert_err!(builder().discover_from(&[empty]));
        assert!(matches!(err, RegistryError::EmptyModule(ref m) if m == "empty"));
    }

    #[tokio::test]
    async fn test_registry_call_tool() {
        let registry = ToolRegistry::discover(FakeApi::new().context()).unwrap();
        let args = json!({"identifier": "s-1"}).as_object().cloned().unwrap();

        let result = registry.call_tool("get_story", args).await.unwrap();
        assert_eq!(result.unwrap()["identifier"], "s-1");
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::discover(FakeApi::new().context()).unwrap();
        assert!(registry.call_tool("unknown", JsonObject::new()).await.is_none());
    }
}
