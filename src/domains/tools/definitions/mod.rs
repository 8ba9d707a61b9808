//! Tool definitions module.
//!
//! One file per entity area. Each file exports a `MODULE` descriptor whose
//! `load` function declares that area's tools; `common` holds the shared
//! parameter shapes and binders.
//!
//! ## Adding a New Tool
//!
//! 1. Add a declaration to the relevant module's `load` (or create a new
//!    module exporting `MODULE`)
//! 2. For a new module, list it in [`MODULES`]
//!
//! No router, server or registry change is needed.

pub mod common;

pub mod advisories;
pub mod attack_patterns;
pub mod breaches;
pub mod mentions;
pub mod organizations;
pub mod products;
pub mod search;
pub mod sources;
pub mod stories;
pub mod threat_actors;
pub mod vulnerabilities;

use super::registry::ToolModule;

/// Every tool module, in discovery order.
pub const MODULES: &[ToolModule] = &[
    advisories::MODULE,
    attack_patterns::MODULE,
    breaches::MODULE,
    mentions::MODULE,
    organizations::MODULE,
    products::MODULE,
    search::MODULE,
    sources::MODULE,
    stories::MODULE,
    threat_actors::MODULE,
    vulnerabilities::MODULE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{Call, FakeApi};
    use serde_json::json;
    use std::collections::HashSet;

    /// Upstream path each tool reaches, with `x` as the identifier.
    const ROUTES: &[(&str, &str)] = &[
        ("get_advisory", "advisories/x"),
        ("list_advisories", "advisories"),
        ("get_advisory_vulnerabilities", "advisories/x/vulnerabilities"),
        ("get_attack_pattern", "attack-patterns/x"),
        ("list_attack_patterns", "attack-patterns"),
        ("get_attack_pattern_threat_actors", "attack-patterns/x/threat-actors"),
        ("get_attack_pattern_malware", "attack-patterns/x/malware"),
        ("get_breach", "breaches/x"),
        ("list_breaches", "breaches"),
        ("get_breach_organizations", "breaches/x/organizations"),
        ("list_mentions", "mentions"),
        ("list_mentions_actors", "mentions/actors"),
        ("list_mentions_vulnerabilities", "mentions/vulnerabilities"),
        ("get_organization", "organizations/x"),
        ("list_organizations", "organizations"),
        ("list_trending_organizations", "organizations/trending"),
        ("get_organization_breaches", "organizations/x/breaches"),
        ("get_product", "products/x"),
        ("list_products", "products"),
        ("get_product_advisories", "products/x/advisories"),
        ("search", "search"),
        ("list_sources", "sources"),
        ("get_story", "stories/x"),
        ("list_stories", "stories"),
        ("list_story_topics", "stories/topics"),
        ("get_threat_actor", "threat-actors/x"),
        ("list_threat_actors", "threat-actors"),
        ("list_trending_threat_actors", "threat-actors/trending"),
        ("list_mentioned_threat_actors", "mentions/actors"),
        ("get_threat_actor_attack_patterns", "threat-actors/x/attack-patterns"),
        ("get_vulnerability", "vulnerabilities/x"),
        ("list_vulnerabilities", "vulnerabilities"),
        ("list_trending_vulnerabilities", "vulnerabilities/trending"),
        ("list_exploited_vulnerabilities", "vulnerabilities/exploited"),
        ("get_vulnerability_detection_signatures", "vulnerabilities/x/detection-signatures"),
        ("get_vulnerability_exploitations", "vulnerabilities/x/exploitations"),
        ("get_vulnerability_configurations", "vulnerabilities/x/configurations"),
    ];

    fn route_of(call: &Call) -> String {
        match call {
            Call::Get(kind, id) => format!("{}/{}", kind.as_path(), id),
            Call::List(kind, _) => kind.as_path().to_string(),
            Call::Trending(kind, _, _) => format!("{}/trending", kind.as_path()),
            Call::Feed(kind, feed, _) => format!("{}/{}", kind.as_path(), feed),
            Call::Related(kind, id, relation, _) => {
                format!("{}/{}/{}", kind.as_path(), id, relation)
            }
            Call::Topics => "stories/topics".to_string(),
            Call::Search(..) => "search".to_string(),
        }
    }

    #[tokio::test]
    async fn test_every_tool_reaches_its_route() {
        let api = FakeApi::new();
        let ctx = api.context();
        let mut seen = HashSet::new();

        for module in MODULES {
            for tool in (module.load)(&ctx).unwrap() {
                let (_, expected) = ROUTES
                    .iter()
                    .find(|(name, _)| *name == tool.name())
                    .unwrap_or_else(|| panic!("{} has no route entry", tool.name()));

                let args = if tool.name() == "search" {
                    json!({"q": "x"})
                } else {
                    json!({"identifier": "x"})
                };
                tool.call(args.as_object().cloned().unwrap()).await.unwrap();

                let call = api.last_call().unwrap();
                assert_eq!(route_of(&call), *expected, "tool {}", tool.name());
                seen.insert(tool.name());
            }
        }

        assert_eq!(seen.len(), ROUTES.len());
    }

    #[test]
    fn test_every_module_declares_tools() {
        let ctx = FakeApi::new().context();
        for module in MODULES {
            let tools = (module.load)(&ctx).unwrap();
            assert!(!tools.is_empty(), "module {} is empty", module.name);
        }
    }

    #[test]
    fn test_module_names_are_unique() {
        let names: HashSet<_> = MODULES.iter().map(|m| m.name).collect();
        assert_eq!(names.len(), MODULES.len());
    }

    #[test]
    fn test_descriptions_are_present() {
        let ctx = FakeApi::new().context();
        for module in MODULES {
            for tool in (module.load)(&ctx).unwrap() {
                assert!(!tool.description().is_empty(), "{} has no description", tool.name());
            }
        }
    }
}
