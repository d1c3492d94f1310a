use serde_json::{json, Value};
use url::form_urlencoded;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use unifi_legacy::Controller;

/// Form body the client sends to `/login` for the test credentials.
#[allow(dead_code)]
pub const LOGIN_FORM: &str = "login=login&username=test-user&password=test-password";

/// Session cookie the mock controller hands out at login.
#[allow(dead_code)]
pub const SESSION_COOKIE: &str = "unifises=test-cookie";

/// Mounts the login endpoint: accepts the test credentials and answers with
/// the session cookie and an empty body, like the legacy controller does.
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string(LOGIN_FORM))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("{SESSION_COOKIE}; path=/").as_str()),
        )
        .mount(server)
        .await;
}

/// Builds a logged-in controller against the mock server (v2 paths).
#[allow(dead_code)]
pub async fn setup_test_controller(server_url: &str) -> Controller {
    Controller::builder()
        .controller_url(server_url)
        .username("test-user")
        .password("test-password")
        .build()
        .await
        .unwrap()
}

/// Builds a logged-in controller using v3-style site paths.
#[allow(dead_code)]
pub async fn setup_test_controller_v3(server_url: &str, site: &str) -> Controller {
    Controller::builder()
        .controller_url(server_url)
        .username("test-user")
        .password("test-password")
        .version("v3")
        .site(site)
        .build()
        .await
        .unwrap()
}

/// Form-encodes a JSON payload exactly the way the client sends it: the
/// serialized object under the single `json` key.
#[allow(dead_code)]
pub fn json_form(value: &Value) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("json", &serde_json::to_string(value).unwrap())
        .finish()
}

/// Wraps `data` in a success envelope.
#[allow(dead_code)]
pub fn ok_body(data: Value) -> Value {
    json!({ "meta": { "rc": "ok" }, "data": data })
}

/// Builds a failure envelope carrying `msg`.
#[allow(dead_code)]
pub fn err_body(msg: &str) -> Value {
    json!({ "meta": { "rc": "error", "msg": msg } })
}
