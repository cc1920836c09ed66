use hydric_gateway::{
    ChainId, GatewayConfig, GatewayError, HydricGateway, OrderField, SearchPoolsInput,
    SortDirection, TokenRef, Tokens,
};
use mockito::Matcher;
use serde_json::json;

fn gateway(server: &mockito::Server) -> HydricGateway {
    HydricGateway::new(&GatewayConfig::with_key("test-key", server.url())).unwrap()
}

#[test]
fn empty_result_is_unwrapped_from_envelope() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/pools/search")
        .match_header("authorization", "Bearer test-key")
        .match_header("content-type", Matcher::Regex("application/json".into()))
        .match_body(Matcher::Json(json!({
            "tokensA": [{ "chainId": 1, "address": Tokens::ETH }],
            "config": {
                "limit": 10,
                "orderBy": { "field": "tvl", "direction": "desc", "timeframe": "24h" }
            },
            "filters": { "minimumTotalValueLockedUsd": 0.0 }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":{"pools":[]}}"#)
        .create();

    let result = gateway(&server)
        .search_pools(&SearchPoolsInput::new(vec![Tokens::eth()]))
        .unwrap();

    assert!(result.pools.is_empty());
    assert_eq!(result.next_cursor, None);
    assert_eq!(serde_json::to_value(&result).unwrap(), json!({ "pools": [] }));
    mock.assert();
}

#[test]
fn pair_search_sends_tokens_b_and_returns_pools() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/pools/search")
        .match_body(Matcher::PartialJson(json!({
            "tokensA": [{ "chainId": ChainId::BASE, "address": Tokens::WETH_BASE }],
            "tokensB": [{ "chainId": ChainId::BASE, "address": Tokens::USDC_BASE }],
            "config": { "limit": 5, "orderBy": { "field": "yield" } }
        })))
        .with_status(200)
        .with_body(
            json!({
                "data": {
                    "pools": [{ "address": "0xpool", "protocol": { "name": "Aerodrome" } }],
                    "nextCursor": "abc"
                }
            })
            .to_string(),
        )
        .create();

    let input = SearchPoolsInput::new(vec![Tokens::weth_base()])
        .tokens_b(vec![Tokens::usdc_base()])
        .order_by(OrderField::Yield, SortDirection::Desc)
        .limit(5);
    let result = gateway(&server).search_pools(&input).unwrap();

    assert_eq!(result.pools.len(), 1);
    assert_eq!(result.pools[0]["protocol"]["name"], "Aerodrome");
    assert_eq!(result.next_cursor.as_deref(), Some("abc"));
    mock.assert();
}

#[test]
fn server_error_message_is_surfaced() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/pools/search")
        .with_status(400)
        .with_body(r#"{"statusCode":400,"error":{"code":"INVALID","message":"bad token"}}"#)
        .create();

    let input = SearchPoolsInput::new(vec![TokenRef::new(1, "0xnope")]);
    let err = gateway(&server).search_pools(&input).unwrap_err();

    match err {
        GatewayError::ApiError(message) => assert_eq!(message, "bad token"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unparseable_error_body_falls_back_to_raw_text() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/pools/search")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create();

    let err = gateway(&server)
        .search_pools(&SearchPoolsInput::new(vec![Tokens::eth()]))
        .unwrap_err();

    assert_eq!(err.message(), "<html>Bad Gateway</html>");
    assert!(matches!(err, GatewayError::ApiError(_)));
}

#[test]
fn unusable_request_never_reaches_the_server() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/pools/search").expect(0).create();
    let gateway = gateway(&server);

    let empty = gateway.search_pools(&SearchPoolsInput::new(vec![]));
    assert!(matches!(empty, Err(GatewayError::ApiError(_))));

    let zero_limit = gateway.search_pools(&SearchPoolsInput::new(vec![Tokens::eth()]).limit(0));
    assert!(matches!(zero_limit, Err(GatewayError::ApiError(_))));

    for min_tvl in [-1.0, f64::NAN, f64::INFINITY] {
        let bad_tvl =
            gateway.search_pools(&SearchPoolsInput::new(vec![Tokens::eth()]).min_tvl_usd(min_tvl));
        assert!(matches!(bad_tvl, Err(GatewayError::ApiError(_))));
    }

    mock.assert();
}

#[test]
fn pages_follow_the_cursor_until_exhausted() {
    let mut server = mockito::Server::new();
    // More specific mock first so the cursor request lands on it.
    let second = server
        .mock("POST", "/pools/search")
        .match_body(Matcher::PartialJson(json!({ "config": { "cursor": "page-2" } })))
        .with_status(200)
        .with_body(r#"{"data":{"pools":[{"address":"0xc"}]}}"#)
        .expect(1)
        .create();
    let first = server
        .mock("POST", "/pools/search")
        .with_status(200)
        .with_body(r#"{"data":{"pools":[{"address":"0xa"},{"address":"0xb"}],"nextCursor":"page-2"}}"#)
        .expect(1)
        .create();

    let pages = gateway(&server)
        .search_pool_pages(&SearchPoolsInput::new(vec![Tokens::eth()]), 3)
        .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].pools.len(), 2);
    assert_eq!(pages[1].pools.len(), 1);
    assert_eq!(pages[1].next_cursor, None);
    first.assert();
    second.assert();
}

#[test]
fn pages_stop_at_the_page_cap() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/pools/search")
        .with_status(200)
        .with_body(r#"{"data":{"pools":[],"nextCursor":"forever"}}"#)
        .expect(2)
        .create();

    let pages = gateway(&server)
        .search_pool_pages(&SearchPoolsInput::new(vec![Tokens::eth()]), 2)
        .unwrap();

    assert_eq!(pages.len(), 2);
    mock.assert();
}

#[test]
fn empty_next_cursor_ends_the_walk() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/pools/search")
        .with_status(200)
        .with_body(r#"{"data":{"pools":[{"address":"0xa"}],"nextCursor":""}}"#)
        .expect(1)
        .create();

    let pages = gateway(&server)
        .search_pool_pages(&SearchPoolsInput::new(vec![Tokens::eth()]), 3)
        .unwrap();

    assert_eq!(pages.len(), 1);
    mock.assert();
}

#[test]
fn missing_api_key_is_rejected_before_any_call() {
    let config = GatewayConfig::default();
    assert!(matches!(
        HydricGateway::new(&config),
        Err(GatewayError::ConfigError(_))
    ));
}

#[test]
fn transport_failure_is_an_api_error() {
    // Nothing listens on port 1.
    let gateway =
        HydricGateway::new(&GatewayConfig::with_key("test-key", "http://127.0.0.1:1")).unwrap();
    let err = gateway
        .search_pools(&SearchPoolsInput::new(vec![Tokens::eth()]))
        .unwrap_err();
    assert!(matches!(err, GatewayError::ApiError(_)));
    assert!(!err.message().is_empty());
}
