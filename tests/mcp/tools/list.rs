use rmcp::handler::server::wrapper::Parameters;
use vuepact::mcp::{VuePactMcpServer, types::ListComponentsParams};

use crate::{
    McpTestFixture, assert_pagination, extract_tool_result_json, fixture_design_system,
    fixture_many,
};

fn params(fixture: &McpTestFixture) -> ListComponentsParams {
    ListComponentsParams {
        manifest_path: fixture.manifest_path(),
        query: None,
        limit: None,
        offset: None,
    }
}

#[tokio::test]
async fn test_list_components_all() {
    let fixture = fixture_design_system().unwrap();
    let server = VuePactMcpServer::new();

    let result = server
        .list_components(Parameters(params(&fixture)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert!(json_result["scannedAt"].is_string());
    assert_pagination(&json_result, 0, 20, false);

    let items = json_result["items"].as_array().unwrap();
    let names: Vec<_> = items.iter().map(|i| i["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Badge", "Card", "CardGrid"]);

    let card = &items[1];
    assert_eq!(card["path"], "src/components/Card.vue");
    assert_eq!(card["propCount"], 3);
    assert_eq!(card["eventCount"], 1);
    assert_eq!(card["slotCount"], 0);
    assert_eq!(card["diagnosticCount"], 2);
    assert_eq!(card["cohesion"], 0.67);
}

#[tokio::test]
async fn test_list_components_query_is_case_insensitive() {
    let fixture = fixture_design_system().unwrap();
    let server = VuePactMcpServer::new();

    let mut p = params(&fixture);
    p.query = Some("CARD".to_string());
    let result = server.list_components(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items[0]["name"], "Card");
    assert_eq!(items[1]["name"], "CardGrid");
}

#[tokio::test]
async fn test_list_components_query_matches_path() {
    let fixture = fixture_design_system().unwrap();
    let server = VuePactMcpServer::new();

    let mut p = params(&fixture);
    p.query = Some("layout/".to_string());
    let result = server.list_components(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["path"], "src/layout/CardGrid.vue");
}

#[tokio::test]
async fn test_list_components_pagination() {
    let fixture = fixture_many(25).unwrap();
    let server = VuePactMcpServer::new();

    let result = server
        .list_components(Parameters(params(&fixture)))
        .await
        .unwrap();
    let first_page = extract_tool_result_json(&result);
    assert_eq!(first_page["totalCount"], 25);
    assert_eq!(first_page["items"].as_array().unwrap().len(), 20);
    assert_pagination(&first_page, 0, 20, true);

    let mut p = params(&fixture);
    p.offset = Some(20);
    p.limit = Some(10);
    let result = server.list_components(Parameters(p)).await.unwrap();
    let second_page = extract_tool_result_json(&result);
    let items = second_page["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["name"], "Item20");
    assert_pagination(&second_page, 20, 10, false);
}

#[tokio::test]
async fn test_list_components_limit_is_capped() {
    let fixture = fixture_many(3).unwrap();
    let server = VuePactMcpServer::new();

    let mut p = params(&fixture);
    p.limit = Some(1000);
    let result = server.list_components(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 100, false);
}

#[tokio::test]
async fn test_list_components_offset_past_end() {
    let fixture = fixture_many(3).unwrap();
    let server = VuePactMcpServer::new();

    let mut p = params(&fixture);
    p.offset = Some(10);
    let result = server.list_components(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert!(json_result["items"].as_array().unwrap().is_empty());
    assert_pagination(&json_result, 10, 20, false);
}

#[tokio::test]
async fn test_list_components_missing_manifest() {
    let fixture = McpTestFixture::new().unwrap();
    let server = VuePactMcpServer::new();

    let result = server.list_components(Parameters(params(&fixture))).await;
    assert!(result.is_err());
}
