//! Store adapter for the remote sheet web app.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use taskboard_core::Task;
use tracing::debug;

use super::envelope::{parse_ack, parse_task_list};
use super::{Mutation, StoreError, TaskStore};

pub struct HttpStore {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpStore {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait(?Send)]
impl TaskStore for HttpStore {
    async fn fetch_all(&self) -> Result<Vec<Task>, StoreError> {
        let body = self
            .client
            .get(&self.endpoint)
            .query(&[("action", "list")])
            .send()
            .await?
            .text()
            .await?;
        parse_task_list(&body)
    }

    async fn submit(&self, mutation: Mutation) -> Result<Option<Task>, StoreError> {
        let fallback = mutation.fallback_error();
        debug!(?mutation, "posting mutation");
        // Posted as text/plain: the sheet backend cannot answer a CORS
        // preflight, so it must only ever see a simple request.
        let body = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(serde_json::to_string(&mutation)?)
            .send()
            .await?
            .text()
            .await?;
        parse_ack(&body, fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use taskboard_core::Category;
    use wiremock::matchers::{body_json, header, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fix_ceiling() -> Task {
        Task {
            id: "t1".to_string(),
            title: "Fix ceiling".to_string(),
            owner: "Sam".to_string(),
            category: Category::Drawings,
            added: "2024-01-01".to_string(),
            notes: String::new(),
            done: false,
            completed: String::new(),
        }
    }

    #[tokio::test]
    async fn fetch_all_issues_the_list_action() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("action", "list"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"ok":true,"data":[{"id":"t1","title":"Fix ceiling","category":"drawings","added":"2024-01-01"}]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let store = HttpStore::new(server.uri());
        let tasks = store.fetch_all().await.unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Fix ceiling");
        assert_eq!(tasks[0].category, Category::Drawings);
    }

    #[tokio::test]
    async fn submit_posts_the_tagged_add_body_as_plain_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("content-type", "text/plain;charset=utf-8"))
            .and(body_json(json!({
                "action": "add",
                "task": {
                    "id": "t1",
                    "title": "Fix ceiling",
                    "owner": "Sam",
                    "category": "drawings",
                    "added": "2024-01-01",
                    "notes": "",
                    "done": false,
                    "completed": ""
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true,"data":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let store = HttpStore::new(server.uri());
        let ack = store
            .submit(Mutation::Add {
                task: fix_ceiling(),
            })
            .await
            .unwrap();

        assert!(ack.is_none());
    }

    #[tokio::test]
    async fn submit_posts_toggle_with_only_the_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({"action": "toggle", "id": "t1"})))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let store = HttpStore::new(server.uri());
        let ack = store
            .submit(Mutation::Toggle {
                id: "t1".to_string(),
            })
            .await
            .unwrap();

        assert!(ack.is_none());
    }

    #[tokio::test]
    async fn application_failures_carry_the_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"ok":false,"error":"sheet locked"}"#),
            )
            .mount(&server)
            .await;

        let store = HttpStore::new(server.uri());
        let err = store
            .submit(Mutation::Delete {
                id: "t1".to_string(),
            })
            .await
            .unwrap_err();

        match err {
            StoreError::Application(message) => assert_eq!(message, "sheet locked"),
            other => panic!("expected an application error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn a_non_json_body_is_a_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>"))
            .mount(&server)
            .await;

        let store = HttpStore::new(server.uri());
        let err = store.fetch_all().await.unwrap_err();

        assert!(matches!(err, StoreError::Protocol(_)));
    }

    #[tokio::test]
    async fn an_unreachable_endpoint_is_a_transport_error() {
        let server = MockServer::start().await;
        let dead_uri = server.uri();
        drop(server);

        let store = HttpStore::new(dead_uri);
        let err = store.fetch_all().await.unwrap_err();

        assert!(matches!(err, StoreError::Transport(_)));
    }
}
