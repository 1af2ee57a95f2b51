mod common;

use axum::{http::StatusCode, Router};
use tower::ServiceExt;

use common::{get, json_body, post_form};
use crm_console::AppState;

async fn app_or_skip() -> Option<(Router, AppState)> {
    let pool = common::isolated_pool().await?;
    let state = AppState::new(pool);
    Some((crm_console::app(state.clone()), state))
}

async fn seed_manager(state: &AppState) -> i64 {
    state
        .user_service
        .insert(crm_console::models::user::UserDraft {
            last_name: "Ivanov".into(),
            first_name: "Petr".into(),
            patronymic: None,
            email: "p@x.com".into(),
            phone: None,
            role: "manager".into(),
        })
        .await
        .unwrap()
        .id
}

const ACME: &[(&str, &str)] = &[
    ("company_name", "Acme"),
    ("inn", "7707083893"),
    ("phone", "+7 495 123-45-67"),
    ("email", "office@acme.example"),
    ("address", "Moscow"),
    ("status", "Lead"),
];

const IVANOV: &[(&str, &str)] = &[
    ("last_name", "Ivanov"),
    ("first_name", "Petr"),
    ("email", "p@x.com"),
];

#[tokio::test]
async fn user_lifecycle_over_http() {
    let Some((app, state)) = app_or_skip().await else {
        return;
    };

    let resp = app
        .clone()
        .oneshot(post_form("/Users/Create", IVANOV))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/Users");

    let resp = app
        .clone()
        .oneshot(post_form(
            "/Users/Create",
            &[("last_name", "Petrov"), ("first_name", "Ivan"), ("email", "p@x.com")],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(resp).await;
    assert_eq!(body["errors"][0]["field"], "email");
    assert_eq!(body["form"]["last_name"], "Petrov");

    let resp = app.clone().oneshot(get("/Users")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    let items = body["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["last_name"], "Ivanov");
    let id = items[0]["id"].as_i64().expect("id");

    let resp = app
        .clone()
        .oneshot(get(&format!("/Users/Edit/{}", id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["form"]["id"], id.to_string());
    assert_eq!(body["form"]["email"], "p@x.com");

    let id_text = id.to_string();
    let resp = app
        .clone()
        .oneshot(post_form(
            &format!("/Users/Edit/{}", id),
            &[
                ("id", id_text.as_str()),
                ("last_name", "Ivanov"),
                ("first_name", "Pyotr"),
                ("email", "p@x.com"),
                ("role", "admin"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let saved = state.user_service.get_by_id(id).await.unwrap().expect("user");
    assert_eq!(saved.first_name, "Pyotr");
    assert_eq!(saved.role, "admin");

    let resp = app
        .clone()
        .oneshot(get(&format!("/Users/Delete/{}", id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    for _ in 0..2 {
        let resp = app
            .clone()
            .oneshot(post_form(&format!("/Users/Delete/{}", id), &[]))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()["location"], "/Users");
    }
    assert_eq!(state.user_service.get_by_id(id).await.unwrap(), None);
}

#[tokio::test]
async fn missing_records_are_not_found() {
    let Some((app, _)) = app_or_skip().await else {
        return;
    };

    for uri in ["/Users/Edit/9999", "/Clients/Delete/9999", "/Deals/Edit/9999"] {
        let resp = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let resp = app
        .clone()
        .oneshot(post_form(
            "/Users/Edit/9999",
            &[
                ("id", "9999"),
                ("last_name", "Ghost"),
                ("first_name", "User"),
                ("email", "ghost@x.com"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn short_inn_writes_nothing_and_offers_managers() {
    let Some((app, state)) = app_or_skip().await else {
        return;
    };
    seed_manager(&state).await;

    let resp = app
        .clone()
        .oneshot(post_form(
            "/Clients/Create",
            &[
                ("company_name", "Acme"),
                ("inn", "123"),
                ("phone", "+7 495 123-45-67"),
                ("email", "office@acme.example"),
                ("address", "Moscow"),
                ("status", "Lead"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(resp).await;
    assert_eq!(body["errors"][0]["field"], "inn");
    assert_eq!(body["form"]["inn"], "123");
    assert_eq!(body["users"][0]["last_name"], "Ivanov");
    assert_eq!(body["users"][0]["label"], "Ivanov Petr");
    assert!(state.client_service.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn deal_flow_updates_dashboard() {
    let Some((app, state)) = app_or_skip().await else {
        return;
    };

    let resp = app.clone().oneshot(get("/")).await.unwrap();
    let body = json_body(resp).await;
    assert_eq!(body["deals_count"], 0);
    assert_eq!(body["total_amount"], "0");

    let resp = app
        .clone()
        .oneshot(post_form(
            "/Clients/Create",
            &[
                ("company_name", "Acme"),
                ("inn", "7707083893"),
                ("phone", "+7 495 123-45-67"),
                ("email", "office@acme.example"),
                ("address", "Moscow"),
                ("status", "Lead"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let client_id = state.client_service.list_all().await.unwrap()[0].id.to_string();

    let resp = app.clone().oneshot(get("/Deals/Create")).await.unwrap();
    let body = json_body(resp).await;
    assert_eq!(body["clients"][0]["company_name"], "Acme");
    assert_eq!(body["form"]["stage"], "Negotiation");

    let resp = app
        .clone()
        .oneshot(post_form(
            "/Deals/Create",
            &[
                ("deal_name", "Annual licence"),
                ("client_id", client_id.as_str()),
                ("amount", "1000.50"),
                ("deadline_date", "2026-12-31"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/Deals");

    let resp = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["clients_count"], 1);
    assert_eq!(body["deals_count"], 1);
    assert_eq!(body["total_amount"], "1000.50");

    let resp = app
        .clone()
        .oneshot(post_form(
            &format!("/Clients/Delete/{}", client_id),
            &[],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = json_body(resp).await;
    assert_eq!(body["item"]["company_name"], "Acme");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn deal_for_missing_client_is_a_form_error() {
    let Some((app, _)) = app_or_skip().await else {
        return;
    };

    let resp = app
        .clone()
        .oneshot(post_form(
            "/Deals/Create",
            &[("deal_name", "Ghost deal"), ("client_id", "424242")],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(resp).await;
    assert_eq!(body["errors"][0]["field"], "");
    assert_eq!(body["form"]["deal_name"], "Ghost deal");
    assert!(body["clients"].as_array().expect("clients").is_empty());
}

#[tokio::test]
async fn client_edit_over_http() {
    let Some((app, state)) = app_or_skip().await else {
        return;
    };
    let manager_id = seed_manager(&state).await.to_string();

    let resp = app
        .clone()
        .oneshot(post_form("/Clients/Create", ACME))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let client = state.client_service.list_all().await.unwrap().remove(0);
    let id = client.id.to_string();
    let uri = format!("/Clients/Edit/{}", id);

    let resp = app
        .clone()
        .oneshot(post_form(
            &uri,
            &[
                ("id", id.as_str()),
                ("company_name", "Acme Holding"),
                ("inn", "12345678901"),
                ("phone", "+7 495 123-45-67"),
                ("email", "office@acme.example"),
                ("address", "Moscow"),
                ("status", "Active"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(resp).await;
    assert_eq!(body["errors"][0]["field"], "inn");
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["form"]["company_name"], "Acme Holding");
    assert_eq!(body["users"][0]["label"], "Ivanov Petr");

    let resp = app
        .clone()
        .oneshot(post_form(
            &uri,
            &[
                ("id", id.as_str()),
                ("company_name", "Acme Holding"),
                ("inn", "770708389312"),
                ("phone", "+7 495 123-45-67"),
                ("email", "office@acme.example"),
                ("address", "Moscow"),
                ("status", "Active"),
                ("responsible_user_id", manager_id.as_str()),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/Clients");

    let saved = state
        .client_service
        .get_by_id(client.id)
        .await
        .unwrap()
        .expect("client");
    assert_eq!(saved.company_name, "Acme Holding");
    assert_eq!(saved.inn, "770708389312");
    assert_eq!(saved.status, "Active");
    assert_eq!(saved.responsible_user_id.map(|id| id.to_string()), Some(manager_id));
    assert_eq!(saved.created_date, client.created_date);
}

#[tokio::test]
async fn deal_edit_over_http() {
    let Some((app, state)) = app_or_skip().await else {
        return;
    };
    seed_manager(&state).await;

    app.clone()
        .oneshot(post_form("/Clients/Create", ACME))
        .await
        .unwrap();
    let client_id = state.client_service.list_all().await.unwrap()[0].id.to_string();

    let resp = app
        .clone()
        .oneshot(post_form(
            "/Deals/Create",
            &[
                ("deal_name", "Annual licence"),
                ("client_id", client_id.as_str()),
                ("amount", "1000.50"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let deal = state.deal_service.list_all().await.unwrap().remove(0);
    let id = deal.id.to_string();
    let uri = format!("/Deals/Edit/{}", id);

    for amount in ["1000.555", "12345678901234567"] {
        let resp = app
            .clone()
            .oneshot(post_form(
                &uri,
                &[
                    ("id", id.as_str()),
                    ("deal_name", "Annual licence"),
                    ("client_id", client_id.as_str()),
                    ("amount", amount),
                ],
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{amount}");
        let body = json_body(resp).await;
        assert_eq!(body["errors"][0]["field"], "amount");
        assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["form"]["amount"], amount);
        assert_eq!(body["clients"][0]["company_name"], "Acme");
        assert_eq!(body["users"][0]["label"], "Ivanov Petr");
    }

    let resp = app
        .clone()
        .oneshot(post_form(
            &uri,
            &[
                ("id", id.as_str()),
                ("deal_name", "Annual licence"),
                ("client_id", client_id.as_str()),
                ("amount", "2500.75"),
                ("stage", "Won"),
                ("deadline_date", "2027-03-01"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/Deals");

    let saved = state.deal_service.get_by_id(deal.id).await.unwrap().expect("deal");
    assert_eq!(saved.amount.to_string(), "2500.75");
    assert_eq!(saved.stage, "Won");
    assert_eq!(saved.created_date, deal.created_date);

    let body = json_body(app.clone().oneshot(get("/")).await.unwrap()).await;
    assert_eq!(body["total_amount"], "2500.75");
}
