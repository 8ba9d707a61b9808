//! Vulnerability intelligence tools.

use super::common::{detail_tool, feed_tool, filtered_list_tool, get_tool, trending_tool};
use crate::api::EntityKind;
use crate::domains::tools::definition::{ToolContext, ToolDefinition};
use crate::domains::tools::error::RegistryError;
use crate::domains::tools::registry::ToolModule;

pub const MODULE: ToolModule = ToolModule {
    name: "vulnerabilities",
    load,
};

fn load(ctx: &ToolContext) -> Result<Vec<ToolDefinition>, RegistryError> {
    let kind = EntityKind::Vulnerabilities;
    Ok(vec![
        get_tool(
            "get_vulnerability",
            "Get a vulnerability by CVE ID (e.g. CVE-2024-1234) or UUID. Use for threat assessment, patching priority and technical details of a CVE.",
            ctx,
            kind,
        ),
        filtered_list_tool(
            "list_vulnerabilities",
            "List or search vulnerabilities with optional filters (e.g. cve:, uuid:, desc:) and pagination. Sort by fields such as created_at or cvss_3_base_score.",
            ctx,
            kind,
        ),
        trending_tool(
            "list_trending_vulnerabilities",
            "List vulnerabilities trending over a time period (1d, 7d or 30d). Use for prioritising recently active or discussed CVEs.",
            ctx,
            kind,
        ),
        feed_tool(
            "list_exploited_vulnerabilities",
            "List vulnerabilities known to be exploited in the wild. Use for prioritising remediation and KEV-style lists.",
            ctx,
            kind,
            "exploited",
        ),
        detail_tool(
            "get_vulnerability_detection_signatures",
            "Get detection signatures for a vulnerability. Use for building detection rules and verifying detection coverage.",
            ctx,
            kind,
            "detection-signatures",
        ),
        detail_tool(
            "get_vulnerability_exploitations",
            "Get exploitation records for a vulnerability. Use for confirming in-the-wild exploitation and timelines.",
            ctx,
            kind,
            "exploitations",
        ),
        detail_tool(
            "get_vulnerability_configurations",
            "Get affected configurations (CPE) for a vulnerability. Use for scope of impact and asset mapping.",
            ctx,
            kind,
            "configurations",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ListQuery};
    use crate::domains::tools::testing::{Call, FakeApi};
    use crate::domains::tools::ErrorCategory;
    use serde_json::json;

    #[tokio::test]
    async fn test_unknown_cve_is_not_found() {
        let api = FakeApi::failing(ApiError::not_found("no such id"));
        let tools = load(&api.context()).unwrap();

        let args = json!({"identifier": "CVE-0000-0000"}).as_object().cloned().unwrap();
        let err = tools[0].call(args).await.unwrap_err();
        assert_eq!(err.category, ErrorCategory::NotFound);
        assert_eq!(err.status_code, Some(404));
        assert_eq!(err.message, "no such id");
    }

    #[tokio::test]
    async fn test_signatures_are_unpaginated() {
        let api = FakeApi::new();
        let tools = load(&api.context()).unwrap();
        let tool = tools
            .iter()
            .find(|t| t.name() == "get_vulnerability_detection_signatures")
            .unwrap();

        let args = json!({"identifier": "CVE-2024-3400"}).as_object().cloned().unwrap();
        tool.call(args).await.unwrap();
        assert_eq!(
            api.last_call(),
            Some(Call::Related(
                EntityKind::Vulnerabilities,
                "CVE-2024-3400".to_string(),
                "detection-signatures".to_string(),
                None,
            ))
        );
    }

    #[tokio::test]
    async fn test_exploited_feed() {
        let api = FakeApi::new();
        let tools = load(&api.context()).unwrap();
        let tool = tools
            .iter()
            .find(|t| t.name() == "list_exploited_vulnerabilities")
            .unwrap();

        let args = json!({"offset": 10, "limit": 20}).as_object().cloned().unwrap();
        let payload = tool.call(args).await.unwrap();
        assert_eq!(payload["total"], 5);
        assert_eq!(
            api.last_call(),
            Some(Call::Feed(
                EntityKind::Vulnerabilities,
                "exploited".to_string(),
                ListQuery::page(10, 20),
            ))
        );
    }
}
