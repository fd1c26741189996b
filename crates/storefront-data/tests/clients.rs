mod support;

use std::sync::Arc;
use storefront_commerce::checkout::{
    CaptureOutcome, CaptureSession, CaptureState, Coordinates, GeocodeOutcome, ReverseGeocoder,
    FALLBACK_POSITION,
};
use storefront_commerce::{Money, ProductId};
use storefront_data::{
    CatalogClient, FetchClient, FetchError, FixedLocator, NominatimGeocoder, DEFAULT_USER_AGENT,
};

const PRODUCTS: &str = r#"[
  {"id":1,"title":"Fjallraven - Foldsack No. 1 Backpack","price":109.95,"description":"Your perfect pack","category":"men's clothing","image":"https://fakestoreapi.com/img/1.jpg","rating":{"rate":3.9,"count":120}},
  {"id":2,"title":"Mens Casual Premium Slim Fit T-Shirts","price":22.3,"description":"Slim-fitting style","category":"men's clothing","image":"https://fakestoreapi.com/img/2.jpg","rating":{"rate":4.1,"count":259}}
]"#;

const BANGKOK: &str = r#"{"place_id":1,"display_name":"Democracy Monument, Ratchadamnoen Klang Road, Bangkok, 10200, Thailand","address":{"city":"Bangkok"}}"#;

fn client() -> FetchClient {
    FetchClient::new(DEFAULT_USER_AGENT).unwrap()
}

#[tokio::test]
async fn catalog_fetches_products() {
    let mut server = support::serve(200, PRODUCTS).await;
    let catalog = CatalogClient::new(client(), format!("{}/products", server.base_url));

    let products = catalog.fetch_products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId::new(1));
    assert_eq!(products[1].price, Money::new(2230));

    let request = server.requests.recv().await.unwrap();
    assert_eq!(request, "GET /products HTTP/1.1");
}

#[tokio::test]
async fn catalog_status_error_becomes_failed_state() {
    let server = support::serve(500, r#"{"message":"boom"}"#).await;
    let catalog = CatalogClient::new(client(), format!("{}/products", server.base_url));

    let err = catalog.fetch_products().await.unwrap_err();
    assert!(matches!(err, FetchError::Http { status: 500, .. }));

    let state = catalog.load().await;
    assert_eq!(state.error(), Some("Failed to fetch products"));
    assert!(state.products().is_empty());
}

#[tokio::test]
async fn catalog_garbage_body_is_a_decode_error() {
    let server = support::serve(200, "<html>maintenance</html>").await;
    let catalog = CatalogClient::new(client(), server.base_url.clone());

    let err = catalog.fetch_products().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn catalog_transport_error_is_reported() {
    let catalog = CatalogClient::new(client(), support::dead_url().await);

    let state = catalog.load().await;
    assert!(state.error().is_some());
    assert!(!state.is_loading());
}

#[tokio::test]
async fn geocoder_sends_nominatim_query() {
    let mut server = support::serve(200, BANGKOK).await;
    let geocoder = NominatimGeocoder::new(client(), server.base_url.clone());

    let outcome = geocoder.reverse(FALLBACK_POSITION).await;
    assert_eq!(
        outcome,
        GeocodeOutcome::Found(
            "Democracy Monument, Ratchadamnoen Klang Road, Bangkok, 10200, Thailand".to_string()
        )
    );

    let request = server.requests.recv().await.unwrap();
    assert!(request.starts_with("GET /reverse?"));
    assert!(request.contains("format=json"));
    assert!(request.contains("lat=13.7563"));
    assert!(request.contains("lon=100.5018"));
    assert!(request.contains("zoom=18"));
    assert!(request.contains("addressdetails=1"));
}

#[tokio::test]
async fn geocoder_without_display_name_is_not_found() {
    let server = support::serve(200, r#"{"error":"Unable to geocode"}"#).await;
    let geocoder = NominatimGeocoder::new(client(), server.base_url.clone());

    let outcome = geocoder.reverse(Coordinates::new(0.0, -160.0)).await;
    assert_eq!(outcome, GeocodeOutcome::NotFound);
}

#[tokio::test]
async fn geocoder_failures_are_values() {
    let server = support::serve(503, "{}").await;
    let geocoder = NominatimGeocoder::new(client(), server.base_url.clone());
    assert!(matches!(
        geocoder.reverse(FALLBACK_POSITION).await,
        GeocodeOutcome::Failed(_)
    ));

    let geocoder = NominatimGeocoder::new(client(), support::dead_url().await);
    assert!(matches!(
        geocoder.reverse(FALLBACK_POSITION).await,
        GeocodeOutcome::Failed(_)
    ));
}

#[tokio::test]
async fn capture_flow_over_http() {
    let server = support::serve(200, BANGKOK).await;
    let geocoder = NominatimGeocoder::new(client(), server.base_url.clone());
    let (mut session, outcome) = CaptureSession::new(
        Arc::new(FixedLocator::new(Some(FALLBACK_POSITION))),
        Arc::new(geocoder),
        FALLBACK_POSITION,
    );

    session.mount().await;
    assert_eq!(session.state(), CaptureState::Editable);
    assert!(session.snapshot().address().starts_with("Democracy Monument"));

    session.set_phone("+66 81 234 5678").unwrap();
    session.confirm().unwrap();

    let CaptureOutcome::Confirmed(address) = outcome.await.unwrap() else {
        panic!("expected a confirmed address");
    };
    assert_eq!(address.phone, "+66 81 234 5678");
    assert_eq!(address.coordinates(), FALLBACK_POSITION);
}

#[tokio::test]
async fn capture_flow_survives_dead_geocoder() {
    let geocoder = NominatimGeocoder::new(client(), support::dead_url().await);
    let (mut session, outcome) = CaptureSession::new(
        Arc::new(FixedLocator::new(Some(FALLBACK_POSITION))),
        Arc::new(geocoder),
        FALLBACK_POSITION,
    );

    session.mount().await;
    assert_eq!(session.state(), CaptureState::Editable);
    assert!(session.snapshot().address().is_empty());

    session.set_address("12 Manual Lane").unwrap();
    session.set_phone("0812345678").unwrap();
    session.confirm().unwrap();
    assert!(matches!(outcome.await.unwrap(), CaptureOutcome::Confirmed(_)));
}
