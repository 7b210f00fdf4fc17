use actix_web::test::TestRequest;
use actix_web::{http::StatusCode, App};
use serde_json::{json, Value};
use test_context::test_context;
use test_log::test;

use license_dictionary_test_context::{call::CallService, LicenseDictContext};

async fn caller(ctx: &LicenseDictContext) -> Result<impl CallService, anyhow::Error> {
    Ok(actix_web::test::init_service(
        App::new().configure(|svc| super::configure(svc, ctx.db.clone())),
    )
    .await)
}

fn mit() -> Value {
    json!({
        "name": "MIT",
        "url": "https://opensource.org/licenses/MIT",
        "textUrl": "https://opensource.org/licenses/MIT.txt",
        "nameAliases": ["MIT License"],
        "urlAliases": ["https://mit-license.org"],
        "spdxName": "MIT",
        "spdxAbbreviation": "MIT"
    })
}

#[test_context(LicenseDictContext)]
#[test(actix_web::test)]
async fn lookup_by_name(ctx: &LicenseDictContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let request = TestRequest::post()
        .uri("/api/v1/licenses")
        .set_json(mit())
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(StatusCode::CREATED, response.status());

    let request = TestRequest::get()
        .uri("/api/v1/licenses?name=MIT")
        .to_request();
    let response: Value = app.call_and_read_body_json(request).await;

    let results = response.as_array().expect("a list of licenses");
    assert_eq!(1, results.len());
    assert_eq!(json!("MIT"), results[0]["name"]);
    assert_eq!(json!(["MIT License"]), results[0]["nameAliases"]);
    // the limited shape carries no SPDX metadata
    assert_eq!(Value::Null, results[0]["spdxName"]);

    Ok(())
}

#[test_context(LicenseDictContext)]
#[test(actix_web::test)]
async fn conflicting_query_parameters(ctx: &LicenseDictContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let encoded_url = url_escape::encode_component("https://x");

    // more than one singular filter, regardless of whether matches exist
    let request = TestRequest::get()
        .uri(&format!("/api/v1/licenses?name=MIT&url={encoded_url}"))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let request = TestRequest::get()
        .uri("/api/v1/licenses?nameAlias=Expat&urlAlias=x")
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    // searchTerm mixed with a singular filter
    let request = TestRequest::get()
        .uri("/api/v1/licenses?name=MIT&searchTerm=mit")
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    Ok(())
}

#[test_context(LicenseDictContext)]
#[test(actix_web::test)]
async fn lookup_misses_are_not_found(ctx: &LicenseDictContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let request = TestRequest::get()
        .uri("/api/v1/licenses?name=GPL")
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let body: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(json!("No license was found for name GPL"), body["message"]);

    let request = TestRequest::get()
        .uri("/api/v1/licenses?nameAlias=Expat")
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let body: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(
        json!("Could not find license for nameAlias Expat"),
        body["message"]
    );

    Ok(())
}

#[test_context(LicenseDictContext)]
#[test(actix_web::test)]
async fn get_by_id_round_trip(ctx: &LicenseDictContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let request = TestRequest::post()
        .uri("/api/v1/licenses")
        .set_json(mit())
        .to_request();
    let created: Value = app.call_and_read_body_json(request).await;
    let id = created["id"].as_i64().expect("an assigned id");

    let request = TestRequest::get()
        .uri(&format!("/api/v1/licenses/{id}"))
        .to_request();
    let fetched: Value = app.call_and_read_body_json(request).await;

    assert_eq!(created, fetched);
    assert_eq!(json!("MIT"), fetched["spdxName"]);

    let request = TestRequest::get()
        .uri("/api/v1/licenses/4711")
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let body: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(json!("No license found for id 4711"), body["message"]);

    Ok(())
}

#[test_context(LicenseDictContext)]
#[test(actix_web::test)]
async fn duplicate_insert_is_rejected(ctx: &LicenseDictContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let request = TestRequest::post()
        .uri("/api/v1/licenses")
        .set_json(mit())
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(StatusCode::CREATED, response.status());

    let request = TestRequest::post()
        .uri("/api/v1/licenses")
        .set_json(mit())
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body: Value = actix_web::test::read_body_json(response).await;
    let errors = body.as_array().expect("a list of conflicts");
    // name, url, one name alias, one url alias
    assert_eq!(4, errors.len());
    assert!(errors.iter().all(|error| {
        error["message"]
            .as_str()
            .is_some_and(|message| message.contains("Conflicting license id"))
    }));

    // no record was created
    let request = TestRequest::get().uri("/api/v1/licenses").to_request();
    let all: Value = app.call_and_read_body_json(request).await;
    assert_eq!(1, all.as_array().expect("a list of licenses").len());

    Ok(())
}

#[test_context(LicenseDictContext)]
#[test(actix_web::test)]
async fn update_overwrites_all_fields(ctx: &LicenseDictContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let request = TestRequest::post()
        .uri("/api/v1/licenses")
        .set_json(mit())
        .to_request();
    let created: Value = app.call_and_read_body_json(request).await;
    let id = created["id"].as_i64().expect("an assigned id");

    let replacement = json!({
        "name": "MIT (new)",
        "url": "https://mit.example.com",
        "nameAliases": ["X11"]
    });

    let request = TestRequest::put()
        .uri(&format!("/api/v1/licenses/{id}"))
        .set_json(&replacement)
        .to_request();
    let updated: Value = app.call_and_read_body_json(request).await;
    assert_eq!(json!("MIT (new)"), updated["name"]);
    assert_eq!(json!(["X11"]), updated["nameAliases"]);

    // absent fields were cleared
    let request = TestRequest::get()
        .uri(&format!("/api/v1/licenses/{id}"))
        .to_request();
    let fetched: Value = app.call_and_read_body_json(request).await;
    assert_eq!(Value::Null, fetched["spdxName"]);
    assert_eq!(Value::Null, fetched["textUrl"]);
    assert_eq!(json!([]), fetched["urlAliases"]);

    let request = TestRequest::put()
        .uri("/api/v1/licenses/4711")
        .set_json(&replacement)
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());

    Ok(())
}

#[test_context(LicenseDictContext)]
#[test(actix_web::test)]
async fn delete_twice(ctx: &LicenseDictContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let request = TestRequest::post()
        .uri("/api/v1/licenses")
        .set_json(mit())
        .to_request();
    let created: Value = app.call_and_read_body_json(request).await;
    let id = created["id"].as_i64().expect("an assigned id");

    let request = TestRequest::delete()
        .uri(&format!("/api/v1/licenses/{id}"))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(StatusCode::NO_CONTENT, response.status());

    let request = TestRequest::delete()
        .uri(&format!("/api/v1/licenses/{id}"))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());

    Ok(())
}

#[test_context(LicenseDictContext)]
#[test(actix_web::test)]
async fn list_and_search(ctx: &LicenseDictContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    // empty store lists as an empty collection
    let request = TestRequest::get().uri("/api/v1/licenses").to_request();
    let all: Value = app.call_and_read_body_json(request).await;
    assert_eq!(json!([]), all);

    let request = TestRequest::post()
        .uri("/api/v1/licenses")
        .set_json(mit())
        .to_request();
    app.call_service(request).await;

    let request = TestRequest::get()
        .uri("/api/v1/licenses?searchTerm=mit")
        .to_request();
    let found: Value = app.call_and_read_body_json(request).await;
    assert_eq!(1, found.as_array().expect("a list of licenses").len());

    let request = TestRequest::get()
        .uri("/api/v1/licenses?searchTerm=zzz")
        .to_request();
    let found: Value = app.call_and_read_body_json(request).await;
    assert_eq!(json!([]), found);

    Ok(())
}
