use std::sync::Arc;
use std::time::Duration;

use autoglass_vehicle_data::{
    AgpClient, ClientConfig, DoorCount, LookupCache, ResolutionResult, VehicleDataError,
    VehicleResolver,
};
use mockito::{Matcher, Server, ServerGuard};

const VIN: &str = "1N6AD0EV5KN700000";

fn resolver_for(server: &ServerGuard) -> VehicleResolver {
    let config = ClientConfig::new(&server.url())
        .unwrap()
        .with_timeout(Duration::from_secs(5));
    VehicleResolver::from_client(Arc::new(AgpClient::new(config)))
}

#[tokio::test]
async fn test_full_vin_lookup_over_http() {
    let mut server = Server::new_async().await;

    let decode = server
        .mock("GET", "/agp/v1/vin")
        .match_query(Matcher::UrlEncoded("vin".into(), VIN.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"vin": "1N6AD0EV5KN700000", "year": "2019", "make": "Nissan",
                "model": "Frontier", "body_type": "Crew Cab Pickup", "vehicle_type": "TRUCK"}"#,
        )
        .create_async()
        .await;

    let body_types = server
        .mock("GET", "/agp/v1/model-lookup")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("model".into(), "Frontier Pickup".into()),
            Matcher::Regex("body_style_id".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"body_types": [
                {"body_style_id": 11, "abbrev": "2D PK", "desc": "King Cab Pickup"},
                {"body_style_id": 12, "abbrev": "4D PK", "desc": "Crew Cab Pickup"}
            ]}"#,
        )
        .create_async()
        .await;

    let models = server
        .mock("GET", "/agp/v1/model-lookup")
        .match_query(Matcher::Exact("year=2019&make=Nissan".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"models": ["Frontier Pickup", "Altima", "Titan"]}"#)
        .expect(1)
        .create_async()
        .await;

    let resolver = resolver_for(&server);
    let lookup = resolver.lookup_vin(VIN).await.unwrap();

    assert_eq!(
        lookup.resolution,
        ResolutionResult {
            resolved_model: Some("Frontier Pickup".to_string()),
            models: vec![
                "Frontier Pickup".to_string(),
                "Altima".to_string(),
                "Titan".to_string()
            ],
            match_found: true,
        }
    );
    assert_eq!(lookup.door_count, Some(DoorCount::Four));
    assert_eq!(lookup.body_style_id, Some(12));

    decode.assert_async().await;
    models.assert_async().await;
    body_types.assert_async().await;
}

#[tokio::test]
async fn test_catalog_outage_falls_back_to_raw_model() {
    let mut server = Server::new_async().await;

    let _models = server
        .mock("GET", "/agp/v1/model-lookup")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let resolver = resolver_for(&server);
    let result = resolver
        .resolve_vin_model(Some("2019"), Some("Nissan"), Some("Frontier"))
        .await;

    assert_eq!(result, ResolutionResult::fallback(Some("Frontier")));
}

#[tokio::test]
async fn test_cached_resolver_hits_catalog_once() {
    let mut server = Server::new_async().await;

    let models = server
        .mock("GET", "/agp/v1/model-lookup")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"models": ["Camry", "Corolla Cross", "Tacoma"]}"#)
        .expect(1)
        .create_async()
        .await;

    let cache = Arc::new(LookupCache::new());
    let resolver = resolver_for(&server).with_cache(cache.clone());

    let camry = resolver
        .resolve_vin_model(Some("2021"), Some("Toyota"), Some("CAMRY"))
        .await;
    let corolla = resolver
        .resolve_vin_model(Some("2021"), Some("Toyota"), Some("Corolla"))
        .await;

    assert_eq!(camry.resolved_model.as_deref(), Some("Camry"));
    assert_eq!(corolla.resolved_model.as_deref(), Some("Corolla Cross"));
    assert!(!cache.is_empty());
    models.assert_async().await;
}

#[tokio::test]
async fn test_decode_outage_is_reported() {
    let mut server = Server::new_async().await;

    let _decode = server
        .mock("GET", "/agp/v1/vin")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let resolver = resolver_for(&server);
    let error = resolver.lookup_vin(VIN).await.unwrap_err();

    assert!(matches!(
        error,
        VehicleDataError::UpstreamStatus { status: 404, .. }
    ));
}
