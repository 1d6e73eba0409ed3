use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::App;
use serde_json::Value;

mod support;

#[actix_web::test]
async fn root_without_role_shows_role_options() {
    let app = test::init_service(App::new().configure(support::app())).await;

    let response = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = test::read_body_json(response).await;
    let roles: Vec<&str> = body["options"]
        .as_array()
        .unwrap()
        .iter()
        .map(|option| option["role"].as_str().unwrap())
        .collect();
    assert_eq!(roles, vec!["brand", "creator"]);
}

#[actix_web::test]
async fn selecting_a_role_lands_on_its_dashboard() {
    let app = test::init_service(App::new().configure(support::app())).await;

    for (role, dashboard) in [("brand", "/brand/dashboard"), ("creator", "/creator/dashboard")] {
        let response = test::call_service(&app, support::select_role(role).to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = support::session_cookie(&response);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["role"], role);
        assert_eq!(body["redirect_to"], dashboard);

        let request = TestRequest::get().uri("/").cookie(cookie).to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(support::location(&response).as_deref(), Some(dashboard));
    }
}

#[actix_web::test]
async fn guarded_pages_without_role_redirect_to_root() {
    let app = test::init_service(App::new().configure(support::app())).await;

    for path in ["/brand/dashboard", "/brand/campaigns/new", "/creator/proposals"] {
        let response = test::call_service(&app, TestRequest::get().uri(path).to_request()).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", path);
        assert_eq!(support::location(&response).as_deref(), Some("/"));

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error_code"], "E3031000");
        assert_eq!(body["redirect_to"], "/");
    }
}

#[actix_web::test]
async fn pages_of_the_other_role_redirect_to_own_dashboard() {
    let app = test::init_service(App::new().configure(support::app())).await;

    let response = test::call_service(&app, support::select_role("creator").to_request()).await;
    let creator = support::session_cookie(&response);
    let response = test::call_service(&app, support::select_role("brand").to_request()).await;
    let brand = support::session_cookie(&response);

    let request = TestRequest::get()
        .uri("/brand/campaigns")
        .cookie(creator)
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        support::location(&response).as_deref(),
        Some("/creator/dashboard")
    );

    let request = TestRequest::get()
        .uri("/creator/campaigns")
        .cookie(brand)
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        support::location(&response).as_deref(),
        Some("/brand/dashboard")
    );
}

#[actix_web::test]
async fn clearing_the_role_returns_to_the_selector() {
    let app = test::init_service(App::new().configure(support::app())).await;

    let response = test::call_service(&app, support::select_role("brand").to_request()).await;
    let cookie = support::session_cookie(&response);

    let request = TestRequest::post()
        .uri("/session/role")
        .cookie(cookie.clone())
        .set_json(serde_json::json!({ "role": null }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["role"], Value::Null);
    assert_eq!(body["redirect_to"], "/");

    let request = TestRequest::get()
        .uri("/brand/dashboard")
        .cookie(cookie)
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(support::location(&response).as_deref(), Some("/"));
}

#[actix_web::test]
async fn navigate_resolves_client_paths() {
    let app = test::init_service(App::new().configure(support::app())).await;

    let response = test::call_service(&app, support::select_role("creator").to_request()).await;
    let cookie = support::session_cookie(&response);

    let request = TestRequest::get()
        .uri("/navigate?path=/creator/campaigns/CPN-1/apply")
        .cookie(cookie.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["outcome"], "render");
    assert_eq!(body["route"]["page"], "send-proposal");

    let request = TestRequest::get()
        .uri("/navigate?path=/brand/collabs")
        .cookie(cookie.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["outcome"], "redirect");
    assert_eq!(body["redirect_to"], "/creator/dashboard");

    let request = TestRequest::get()
        .uri("/navigate?path=/nowhere")
        .cookie(cookie)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["outcome"], "not-found");
}

#[actix_web::test]
async fn unknown_server_paths_are_not_found() {
    let app = test::init_service(App::new().configure(support::app())).await;

    let response =
        test::call_service(&app, TestRequest::get().uri("/admin").to_request()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error_code"], "E4041000");
}

#[actix_web::test]
async fn guard_redirects_before_parsing_paths_queries_or_bodies() {
    let app = test::init_service(App::new().configure(support::app())).await;

    for path in [
        "/brand/campaigns/999",
        "/brand/proposals?status=x",
        "/creator/campaigns/1/apply",
    ] {
        let response = test::call_service(&app, TestRequest::get().uri(path).to_request()).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", path);
        assert_eq!(support::location(&response).as_deref(), Some("/"), "{}", path);
    }

    let request = TestRequest::patch()
        .uri("/brand/campaigns/new")
        .set_payload("not json")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(support::location(&response).as_deref(), Some("/"));
}

#[actix_web::test]
async fn other_role_is_redirected_before_parsing_paths_queries_or_bodies() {
    let app = test::init_service(App::new().configure(support::app())).await;

    let response = test::call_service(&app, support::select_role("creator").to_request()).await;
    let creator = support::session_cookie(&response);
    let response = test::call_service(&app, support::select_role("brand").to_request()).await;
    let brand = support::session_cookie(&response);

    let requests = vec![
        TestRequest::get().uri("/brand/campaigns/abc"),
        TestRequest::get().uri("/brand/proposals?status=x"),
        TestRequest::post().uri("/brand/proposals/bad/accept"),
        TestRequest::post().uri("/brand/campaigns/abc/proposals/bad/approve"),
    ];
    for request in requests {
        let response = test::call_service(&app, request.cookie(creator.clone()).to_request()).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            support::location(&response).as_deref(),
            Some("/creator/dashboard")
        );
    }

    let request = TestRequest::post()
        .uri("/creator/campaigns/1/apply")
        .cookie(brand)
        .set_payload("not json")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        support::location(&response).as_deref(),
        Some("/brand/dashboard")
    );
}

#[actix_web::test]
async fn navigate_and_pages_agree_on_malformed_ids() {
    let app = test::init_service(App::new().configure(support::app())).await;

    let request = TestRequest::get()
        .uri("/navigate?path=/brand/campaigns/999")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["outcome"], "redirect");
    assert_eq!(body["redirect_to"], "/");

    let response = test::call_service(
        &app,
        TestRequest::get().uri("/brand/campaigns/999").to_request(),
    )
    .await;
    assert_eq!(support::location(&response).as_deref(), Some("/"));
}
