use actix_web::{App, HttpServer};
use signup_form::core::controller::SERVER_ERROR_MESSAGE;
use signup_form::domain::ports::SignupGateway;
use signup_form::server::configure;
use signup_form::{FormController, FormFile, HttpSignupGateway, SignupError, SignupPayload, SubmitOutcome};

/// Starts the real endpoint on an ephemeral port and returns its signup URL.
fn spawn_server() -> (String, actix_web::dev::ServerHandle) {
    let server = HttpServer::new(|| App::new().configure(configure))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (format!("http://{}/api/signup", addr), handle)
}

#[actix_web::test]
async fn test_identity_payload_is_rejected_by_the_endpoint() {
    let (url, handle) = spawn_server();
    let gateway = HttpSignupGateway::new(url);

    let payload = SignupPayload {
        fullname: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        username: "ada_l".to_string(),
    };

    match gateway.submit(&payload).await {
        Err(SignupError::Rejected { status, errors }) => {
            assert_eq!(status, 400);
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, vec!["password", "terms"]);
        }
        other => panic!("expected rejection, got {:?}", other),
    }

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_controller_against_live_endpoint() {
    let (url, handle) = spawn_server();
    let mut controller = FormController::new(HttpSignupGateway::new(url));

    let form = FormFile::from_toml_str(
        r#"
fullname = "Ada Lovelace"
email = "ada@example.com"
username = "ada_l"
password = "Abcdef1!"
confirm = "Abcdef1!"
terms = true
"#,
    )
    .unwrap();
    for event in form.events() {
        controller.apply(event);
    }

    // the client only sends identity fields, which the endpoint does not accept alone
    assert_eq!(controller.submit().await, SubmitOutcome::Failed);
    assert_eq!(
        controller.state().status.as_ref().map(|s| s.text.as_str()),
        Some(SERVER_ERROR_MESSAGE)
    );
    assert!(!controller.state().submit.disabled);

    handle.stop(true).await;
}
