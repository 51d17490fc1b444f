use cityguide::application::routes::app_router;
use cityguide::application::state::{AppState, AppStateConfig};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::AbortHandle;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CHAT_PATH: &str = "/api/v1/chat/completions";
pub const SEARCH_PATH: &str = "/w/rest.php/v1/search/page";

pub struct TestApp {
    pub address: String,
    pub guides_dir: TempDir,
    pub mock_server: MockServer,
    server_handle: AbortHandle,
}

impl TestApp {
    pub fn guide_url(&self) -> String {
        format!("{}/", self.address)
    }

    pub fn guide_path(&self, key: &str) -> std::path::PathBuf {
        self.guides_dir.path().join(format!("{key}.json"))
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

pub async fn spawn_app() -> TestApp {
    let mock_server = MockServer::start().await;
    let guides_dir = tempfile::tempdir().expect("failed to create guides dir");

    let state = AppState::from_config(AppStateConfig {
        guides_dir: guides_dir.path().to_path_buf(),
        openrouter_url: format!("{}{CHAT_PATH}", mock_server.uri()),
        openrouter_api_key: String::new(),
        openrouter_model: "test-model".to_string(),
        image_search_url: format!("{}{SEARCH_PATH}", mock_server.uri()),
    });

    let app = app_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");

    let local_addr = listener.local_addr().expect("Failed to get local address");
    let address = format!("http://{}", local_addr);

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    })
    .abort_handle();

    TestApp {
        address,
        guides_dir,
        mock_server,
        server_handle,
    }
}

/// Mock a chat-completions reply whose assistant message carries `json_content`.
pub fn chat_response(json_content: &str) -> ResponseTemplate {
    let body = serde_json::json!({
        "id": "gen-test",
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": json_content
            },
            "finish_reason": "stop"
        }]
    });
    ResponseTemplate::new(200).set_body_json(body)
}

/// Mock a Wikipedia page-search reply with a single thumbnail-bearing result.
pub fn search_response(thumbnail_url: &str) -> ResponseTemplate {
    let body = serde_json::json!({
        "pages": [{
            "id": 1,
            "title": "Result",
            "thumbnail": { "url": thumbnail_url, "width": 60, "height": 40 }
        }]
    });
    ResponseTemplate::new(200).set_body_json(body)
}

/// Mock a search reply with no results at all.
pub fn empty_search_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "pages": [] }))
}

/// Mount a catch-all search mock so image lookups always find a thumbnail.
pub async fn mount_default_search(app: &TestApp) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(search_response(
            "//upload.wikimedia.org/thumb/60px-result.jpg",
        ))
        .mount(&app.mock_server)
        .await;
}
