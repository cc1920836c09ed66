use hydric_gateway::{
    ChainId, GatewayConfig, GatewayError, HydricGateway, OrderField, SortDirection,
    TokenListParams, TokenSearchParams,
};
use mockito::Matcher;
use serde_json::json;

fn gateway(server: &mockito::Server) -> HydricGateway {
    HydricGateway::new(&GatewayConfig::with_key("test-key", server.url())).unwrap()
}

#[test]
fn multi_chain_list_posts_empty_object_by_default() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/tokens")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_body(r#"{"statusCode":200,"data":{"tokens":[{"symbol":"USDC"}],"nextCursor":null}}"#)
        .create();

    let result = gateway(&server)
        .tokens()
        .list_multi_chain(&TokenListParams::default())
        .unwrap();

    assert_eq!(result.tokens.len(), 1);
    assert_eq!(result.tokens[0]["symbol"], "USDC");
    assert_eq!(result.next_cursor, None);
    mock.assert();
}

#[test]
fn multi_chain_search_sends_keyword_and_config() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/tokens/search")
        .match_body(Matcher::Json(json!({
            "search": "USDC",
            "config": { "limit": 10, "orderBy": { "field": "tvl", "direction": "desc" } }
        })))
        .with_status(200)
        .with_body(r#"{"data":{"tokens":[],"nextCursor":"next"}}"#)
        .create();

    let params = TokenSearchParams::new("USDC").with(
        TokenListParams::default()
            .limit(10)
            .order_by(OrderField::Tvl, SortDirection::Desc),
    );
    let result = gateway(&server).tokens().search_multi_chain(&params).unwrap();

    assert_eq!(result.next_cursor.as_deref(), Some("next"));
    mock.assert();
}

#[test]
fn single_chain_list_targets_the_chain_path() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/tokens/8453")
        .match_body(Matcher::Json(json!({ "config": { "limit": 10 } })))
        .with_status(200)
        .with_body(r#"{"data":{"tokens":[]}}"#)
        .create();

    let result = gateway(&server)
        .tokens()
        .list_single_chain(ChainId::BASE, &TokenListParams::default().limit(10))
        .unwrap();

    assert!(result.tokens.is_empty());
    mock.assert();
}

#[test]
fn single_chain_search_passes_filters() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/tokens/1/search")
        .match_body(Matcher::Json(json!({
            "search": "ETH",
            "config": { "limit": 5 },
            "filters": { "minimumTotalValuePooledUsd": 10000.0 }
        })))
        .with_status(200)
        .with_body(r#"{"data":{"tokens":[],"filters":{}}}"#)
        .create();

    let params = TokenSearchParams::new("ETH")
        .with(TokenListParams::default().limit(5).min_pooled_usd(10_000.0));
    gateway(&server)
        .tokens()
        .search_single_chain(ChainId::ETHEREUM, &params)
        .unwrap();

    mock.assert();
}

#[test]
fn blank_search_never_reaches_the_server() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", Matcher::Regex("^/tokens.*".into()))
        .expect(0)
        .create();
    let gateway = gateway(&server);

    let multi = gateway.tokens().search_multi_chain(&TokenSearchParams::new(""));
    assert!(matches!(multi, Err(GatewayError::ApiError(_))));
    let single = gateway
        .tokens()
        .search_single_chain(ChainId::BASE, &TokenSearchParams::new("   "));
    assert!(matches!(single, Err(GatewayError::ApiError(_))));

    mock.assert();
}

#[test]
fn token_list_failure_carries_server_message() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/tokens")
        .with_status(400)
        .with_body(r#"{"statusCode":400,"error":{"code":"VALIDATION_ERROR","message":"Invalid limit"}}"#)
        .create();

    let err = gateway(&server)
        .tokens()
        .list_multi_chain(&TokenListParams::default().limit(0))
        .unwrap_err();

    assert_eq!(err.message(), "Invalid limit");
}
