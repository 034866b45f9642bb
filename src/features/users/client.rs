//! Client for the `/users` endpoints. One method per endpoint, one HTTP call
//! per method; authorization is enforced by the backend.

use crate::{
    api::{self, ApiConfig, AppError, Transport},
    features::users::types::{CreateUserCommand, ListParams, UpdateUserCommand, UserDto},
};
use reqwest::{Method, Request, Response, Url};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::json;
use tower::{BoxError, Service};

const USERS_PATH: &str = "users";

#[derive(Clone, Debug)]
pub struct UserService<S = Transport> {
    config: ApiConfig,
    service: S,
}

impl UserService<Transport> {
    /// Builds a service on top of the production pipeline.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the HTTP client cannot be constructed.
    pub fn from_config(config: ApiConfig) -> Result<Self, AppError> {
        let service = api::transport(&config)?;
        Ok(Self::new(config, service))
    }
}

impl<S> UserService<S>
where
    S: Service<Request, Response = Response> + Clone,
    S::Error: Into<BoxError>,
{
    pub fn new(config: ApiConfig, service: S) -> Self {
        Self { config, service }
    }

    /// `GET /users?skip=&limit=`
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if the request fails or the response does not decode.
    pub async fn list_users(&self, params: ListParams) -> Result<Vec<UserDto>, AppError> {
        let mut url = self.users_url(None)?;
        url.query_pairs_mut()
            .append_pair("skip", &params.skip.to_string())
            .append_pair("limit", &params.limit.to_string());

        self.send::<(), _>(Method::GET, url, None).await
    }

    /// `GET /users/{id}`
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if the request fails or the response does not decode.
    pub async fn get_user(&self, id: i64) -> Result<UserDto, AppError> {
        let url = self.users_url(Some(&id.to_string()))?;
        self.send::<(), _>(Method::GET, url, None).await
    }

    /// `POST /users`
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if the request fails or the response does not decode.
    pub async fn create_user(&self, command: &CreateUserCommand) -> Result<UserDto, AppError> {
        let url = self.users_url(None)?;
        self.send(Method::POST, url, Some(command)).await
    }

    /// `PATCH /users/{id}`
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if the request fails or the response does not decode.
    pub async fn update_user(
        &self,
        id: i64,
        command: &UpdateUserCommand,
    ) -> Result<UserDto, AppError> {
        let url = self.users_url(Some(&id.to_string()))?;
        self.send(Method::PATCH, url, Some(command)).await
    }

    /// `POST /users/{id}/deactivate` with an empty JSON object.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if the request fails or the response does not decode.
    pub async fn deactivate_user(&self, id: i64) -> Result<UserDto, AppError> {
        let url = self.users_url(Some(&format!("{id}/deactivate")))?;
        self.send(Method::POST, url, Some(&json!({}))).await
    }

    fn users_url(&self, suffix: Option<&str>) -> Result<Url, AppError> {
        match suffix {
            Some(suffix) => self.config.endpoint(&format!("{USERS_PATH}/{suffix}")),
            None => self.config.endpoint(USERS_PATH),
        }
    }

    async fn send<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = api::json_request(method, url, body)?;
        api::send_json(self.service.clone(), request).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::convert::Infallible;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug)]
    struct Seen {
        method: Method,
        url: Url,
        content_type: Option<String>,
        body: Option<Value>,
    }

    /// Transport double that records requests and answers with a fixed response.
    #[derive(Clone)]
    struct Recorder {
        seen: Arc<Mutex<Vec<Seen>>>,
        status: u16,
        body: String,
    }

    impl Recorder {
        fn answering(status: u16, body: Value) -> Self {
            Self {
                seen: Arc::default(),
                status,
                body: body.to_string(),
            }
        }

        fn only(&self) -> Seen {
            let seen = self.seen.lock().unwrap();
            assert_eq!(seen.len(), 1, "expected exactly one request");
            seen[0].clone()
        }
    }

    impl Service<Request> for Recorder {
        type Response = Response;
        type Error = Infallible;
        type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

        fn poll_ready(
            &mut self,
            _cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<Result<(), Self::Error>> {
            std::task::Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: Request) -> Self::Future {
            self.seen.lock().unwrap().push(Seen {
                method: req.method().clone(),
                url: req.url().clone(),
                content_type: req
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string),
                body: req
                    .body()
                    .and_then(reqwest::Body::as_bytes)
                    .map(|bytes| serde_json::from_slice(bytes).unwrap()),
            });
            let response = http::Response::builder()
                .status(self.status)
                .body(self.body.clone())
                .unwrap();
            Box::pin(async move { Ok(Response::from(response)) })
        }
    }

    fn user_json(id: i64) -> Value {
        json!({
            "id": id,
            "email": "ada@example.com",
            "username": "ada",
            "full_name": "Ada Lovelace",
            "is_active": true,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        })
    }

    fn service(recorder: &Recorder) -> UserService<Recorder> {
        let config = ApiConfig::new("http://api.test/api").unwrap();
        UserService::new(config, recorder.clone())
    }

    #[tokio::test]
    async fn list_users_sends_skip_and_limit() {
        let recorder = Recorder::answering(200, json!([user_json(1), user_json(2)]));
        let users = service(&recorder)
            .list_users(ListParams::new(0, 100))
            .await
            .unwrap();

        assert_eq!(users.len(), 2);
        let seen = recorder.only();
        assert_eq!(seen.method, Method::GET);
        assert_eq!(seen.url.path(), "/api/users");
        assert_eq!(seen.url.query(), Some("skip=0&limit=100"));
        assert!(seen.body.is_none());
    }

    #[tokio::test]
    async fn list_users_uses_default_params() {
        let recorder = Recorder::answering(200, json!([]));
        let users = service(&recorder)
            .list_users(ListParams::default())
            .await
            .unwrap();

        assert!(users.is_empty());
        assert_eq!(recorder.only().url.query(), Some("skip=0&limit=100"));
    }

    #[tokio::test]
    async fn get_user_hits_id_path() {
        let recorder = Recorder::answering(200, user_json(7));
        let user = service(&recorder).get_user(7).await.unwrap();

        assert_eq!(user.id, 7);
        let seen = recorder.only();
        assert_eq!(seen.method, Method::GET);
        assert_eq!(seen.url.as_str(), "http://api.test/api/users/7");
    }

    #[tokio::test]
    async fn create_user_posts_the_three_fields() {
        let recorder = Recorder::answering(201, user_json(9));
        let command = CreateUserCommand {
            email: "ada@example.com".to_string(),
            username: "ada".to_string(),
            full_name: "Ada Lovelace".to_string(),
        };
        let user = service(&recorder).create_user(&command).await.unwrap();

        assert_eq!(user.id, 9);
        let seen = recorder.only();
        assert_eq!(seen.method, Method::POST);
        assert_eq!(seen.url.path(), "/api/users");
        assert_eq!(seen.content_type.as_deref(), Some("application/json"));
        assert_eq!(
            seen.body,
            Some(json!({
                "email": "ada@example.com",
                "username": "ada",
                "full_name": "Ada Lovelace"
            }))
        );
    }

    #[tokio::test]
    async fn update_user_patches_only_full_name() {
        let recorder = Recorder::answering(200, user_json(3));
        let command = UpdateUserCommand {
            full_name: Some("Ada King".to_string()),
        };
        service(&recorder).update_user(3, &command).await.unwrap();

        let seen = recorder.only();
        assert_eq!(seen.method, Method::PATCH);
        assert_eq!(seen.url.path(), "/api/users/3");
        assert_eq!(seen.body, Some(json!({"full_name": "Ada King"})));
    }

    #[tokio::test]
    async fn update_user_with_nothing_sends_empty_object() {
        let recorder = Recorder::answering(200, user_json(3));
        service(&recorder)
            .update_user(3, &UpdateUserCommand::default())
            .await
            .unwrap();

        assert_eq!(recorder.only().body, Some(json!({})));
    }

    #[tokio::test]
    async fn deactivate_user_posts_empty_object() {
        let mut deactivated = user_json(5);
        deactivated["is_active"] = json!(false);
        let recorder = Recorder::answering(200, deactivated);
        let user = service(&recorder).deactivate_user(5).await.unwrap();

        assert!(!user.is_active);
        let seen = recorder.only();
        assert_eq!(seen.method, Method::POST);
        assert_eq!(seen.url.path(), "/api/users/5/deactivate");
        assert_eq!(seen.body, Some(json!({})));
    }

    #[tokio::test]
    async fn not_found_surfaces_api_error() {
        let recorder = Recorder::answering(
            404,
            json!({"error": "not_found", "message": "User 12 not found"}),
        );
        let err = service(&recorder).get_user(12).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Request failed (404): User 12 not found");
    }
}
