use actix_web::test::{self, TestRequest};
use actix_web::App;
use inbazz::seed;
use serde_json::{json, Value};

mod support;

#[actix_web::test]
async fn brand_dashboard_shows_stats_and_recent_campaigns() {
    let app = test::init_service(App::new().configure(support::app())).await;
    let response = test::call_service(&app, support::select_role("brand").to_request()).await;
    let cookie = support::session_cookie(&response);

    let request = TestRequest::get()
        .uri("/brand/dashboard")
        .cookie(cookie)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["stats"]["total_campaigns"], 6);
    assert_eq!(body["stats"]["proposals_received"], 5);
    assert_eq!(body["stats"]["approvals"], 18);
    assert_eq!(body["cards"][0]["title"], "Total de Campanhas");

    let ids: Vec<&str> = body["recent_campaigns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|campaign| campaign["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![
            seed::CAMPAIGN_SUMMER_LAUNCH.to_string(),
            seed::CAMPAIGN_FITNESS_CHALLENGE.to_string(),
            seed::CAMPAIGN_NATURAL_SKINCARE.to_string(),
        ]
    );
}

#[actix_web::test]
async fn creator_dashboard_shows_active_campaigns() {
    let app = test::init_service(App::new().configure(support::app())).await;
    let response = test::call_service(&app, support::select_role("creator").to_request()).await;
    let cookie = support::session_cookie(&response);

    let request = TestRequest::get()
        .uri("/creator/dashboard")
        .cookie(cookie)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["stats"]["available_campaigns"], 3);
    assert_eq!(body["stats"]["proposals_received"], 3);
    assert_eq!(body["active_campaigns"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn profile_settings_echo_with_notification() {
    let app = test::init_service(App::new().configure(support::app())).await;
    let response = test::call_service(&app, support::select_role("creator").to_request()).await;
    let cookie = support::session_cookie(&response);

    let request = TestRequest::get()
        .uri("/creator/profile")
        .cookie(cookie.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["profile"]["name"], "João Silva");
    assert!(body.get("notification").is_none());

    let mut profile = body["profile"].clone();
    profile["name"] = json!("João S.");
    let request = TestRequest::put()
        .uri("/creator/profile/settings")
        .cookie(cookie.clone())
        .set_json(profile)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["profile"]["name"], "João S.");
    assert_eq!(body["notification"]["title"], "Perfil salvo!");

    let request = TestRequest::get()
        .uri("/creator/profile/settings")
        .cookie(cookie)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["profile"]["name"], "João Silva");
}
