use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::Directory;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.post(self.url(path)).json(&body).send().await?)
    }

    async fn get_json(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let resp = self.client.get(self.url(path)).send().await?;
        let status = resp.status();
        Ok((status, resp.json().await?))
    }

    async fn create_company(&self, name: &str) -> anyhow::Result<String> {
        let resp = self.post("/companies", json!({"companyName": name})).await?;
        assert_eq!(resp.status(), HttpStatusCode::CREATED);
        let body: Value = resp.json().await?;
        Ok(body["id"].as_str().unwrap_or_default().to_string())
    }

    async fn create_employee(&self, name: &str, gender: &str, company_id: Option<&str>) -> anyhow::Result<reqwest::Response> {
        let mut body = json!({"name": name, "age": 18, "gender": gender, "salary": 20000});
        if let Some(c) = company_id {
            body["companyId"] = json!(c);
        }
        self.post("/employees", body).await
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = server::startup::app(Directory::in_memory());
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(TestApp { base_url: format!("http://{}", addr), client: reqwest::Client::new() })
}

#[tokio::test]
async fn health_and_metrics_are_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.get_json("/health").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    app.create_company("Acme").await?;
    let metrics = app.client.get(app.url("/metrics")).send().await?.text().await?;
    assert!(metrics.contains("directory_operations_total"));

    let (status, doc) = app.get_json("/api-docs/openapi.json").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert!(doc["paths"]["/companies/{id}/employees"].is_object());
    Ok(())
}

#[tokio::test]
async fn company_crud_roundtrip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let resp = app.post("/companies", json!({"companyName": "Acme"})).await?;
    assert_eq!(resp.status(), HttpStatusCode::CREATED);
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let created: Value = resp.json().await?;
    let id = created["id"].as_str().unwrap_or_default().to_string();
    assert_eq!(location, format!("/companies/{}", id));

    let (status, fetched) = app.get_json(&location).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(fetched["companyName"], "Acme");
    assert_eq!(fetched["employeesNumber"], 0);

    let resp = app
        .client
        .put(app.url(&location))
        .json(&json!({"companyName": "Acme Corp"}))
        .send()
        .await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);
    let replaced: Value = resp.json().await?;
    assert_eq!(replaced["id"], id.as_str());
    assert_eq!(replaced["companyName"], "Acme Corp");

    let resp = app.client.delete(app.url(&location)).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::NO_CONTENT);
    let resp = app.client.delete(app.url(&location)).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::NOT_FOUND);
    let (status, body) = app.get_json(&location).await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1003);
    Ok(())
}

#[tokio::test]
async fn company_pagination_is_one_based() -> anyhow::Result<()> {
    let app = start_server().await?;
    for name in ["C1", "C2", "C3", "C4"] {
        app.create_company(name).await?;
    }
    let names = |v: &Value| -> Vec<String> {
        v.as_array()
            .map(|a| a.iter().filter_map(|c| c["companyName"].as_str().map(String::from)).collect())
            .unwrap_or_default()
    };

    let (_, page2) = app.get_json("/companies?page=2&pageSize=2").await?;
    assert_eq!(names(&page2), vec!["C3", "C4"]);
    let (_, page1) = app.get_json("/companies?page=1&pageSize=2").await?;
    assert_eq!(names(&page1), vec!["C1", "C2"]);
    let (_, all) = app.get_json("/companies").await?;
    assert_eq!(names(&all).len(), 4);
    let (_, beyond) = app.get_json("/companies?page=9&pageSize=2").await?;
    assert_eq!(names(&beyond).len(), 0);

    let (status, body) = app.get_json("/companies?pageSize=2").await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn employee_gender_filter_and_validation() -> anyhow::Result<()> {
    let app = start_server().await?;
    app.create_employee("Ann", "Female", None).await?;
    app.create_employee("Bob", "Male", None).await?;
    app.create_employee("Cat", "female", None).await?;

    let (status, body) = app.get_json("/employees?gender=FEMALE").await?;
    assert_eq!(status, HttpStatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .map(|a| a.iter().filter_map(|e| e["name"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["Ann", "Cat"]);

    let (_, paged) = app.get_json("/employees?gender=female&page=2&pageSize=1").await?;
    assert_eq!(paged[0]["name"], "Cat");

    let resp = app
        .post("/employees", json!({"name": "", "age": 18, "gender": "Male", "salary": 1}))
        .await?;
    assert_eq!(resp.status(), HttpStatusCode::BAD_REQUEST);
    let resp = app
        .post("/employees", json!({"name": "Old", "age": 200, "gender": "Male", "salary": 1}))
        .await?;
    assert_eq!(resp.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn employee_with_unknown_company_is_rejected_and_not_stored() -> anyhow::Result<()> {
    let app = start_server().await?;
    let resp = app.create_employee("Sam", "Male", Some("no-such-company")).await?;
    assert_eq!(resp.status(), HttpStatusCode::NOT_FOUND);
    let body: Value = resp.json().await?;
    assert_eq!(body["code"], 1004);
    assert_eq!(body["error"], "Company Not Found");

    let (_, all) = app.get_json("/employees").await?;
    assert_eq!(all, json!([]));
    Ok(())
}

#[tokio::test]
async fn deleting_company_leaves_employee_behind() -> anyhow::Result<()> {
    let app = start_server().await?;
    let acme = app.create_company("Acme").await?;
    let resp = app.create_employee("Sam", "Male", Some(&acme)).await?;
    assert_eq!(resp.status(), HttpStatusCode::CREATED);
    let sam: Value = resp.json().await?;
    let sam_id = sam["id"].as_str().unwrap_or_default().to_string();

    let (_, company) = app.get_json(&format!("/companies/{}", acme)).await?;
    assert_eq!(company["employeesNumber"], 1);
    assert_eq!(company["employees"][0]["name"], "Sam");

    let resp = app.client.delete(app.url(&format!("/companies/{}", acme))).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::NO_CONTENT);

    let (status, _) = app.get_json(&format!("/companies/{}/employees", acme)).await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    let (status, still_there) = app.get_json(&format!("/employees/{}", sam_id)).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(still_there["companyId"], acme.as_str());
    Ok(())
}
