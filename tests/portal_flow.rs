use anyhow::Result;
use medinsta::{
    api::{ApiClient, ApiConfig},
    cli::actions::{auth::LoginArgs, execute_with, portal::BookArgs, Action, Portal},
    features::{
        auth::{
            client::LOGIN_FAILED_MESSAGE,
            storage::{DurableStorage, FileStorage, TOKEN_KEY, USER_KEY},
        },
        dashboard,
        doctors::{Problem, Specialization},
    },
    routes::Route,
};
use secrecy::SecretString;
use serde_json::json;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn session_file() -> PathBuf {
    std::env::temp_dir()
        .join(format!("medinsta-it-{}", uuid::Uuid::new_v4()))
        .join("session.json")
}

fn cleanup(file: &Path) {
    if let Some(dir) = file.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

fn portal(server: &MockServer, file: &Path) -> Result<Portal> {
    let config = ApiConfig::new(&format!("{}/api/", server.uri()), 5)?;
    Ok(Portal::new(
        ApiClient::new(&config)?,
        Arc::new(FileStorage::new(file)),
    ))
}

fn login(email: &str, from: Option<&str>) -> Action {
    Action::Login(LoginArgs {
        email: email.to_string(),
        password: SecretString::from("s3cret"),
        from: from.map(str::to_string),
    })
}

async fn mount_login(server: &MockServer, role: &str) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "ana@clinic.tld", "password": "s3cret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "user": {"_id": "u-1", "username": "ana", "role": role, "phone": "555"}
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_returns_to_the_guarded_page_and_survives_restart() -> Result<()> {
    let server = MockServer::start().await;
    mount_login(&server, "patient").await;
    let file = session_file();

    let first = portal(&server, &file)?;
    let out = execute_with(&first, login("ana@clinic.tld", Some("/profile"))).await?;
    assert_eq!(out, "Signed in as ana (patient)\nOpened /profile\n");

    let storage = FileStorage::new(file.clone());
    assert_eq!(storage.get_item(TOKEN_KEY)?.as_deref(), Some("tok-1"));
    assert!(storage.get_item(USER_KEY)?.is_some());

    let restarted = portal(&server, &file)?;
    let session = restarted.mount(Route::PatientDashboard)?;
    assert_eq!(session.user.username, "ana");
    assert_eq!(session.token.as_str(), "tok-1");

    let out = execute_with(&restarted, Action::Logout).await?;
    assert_eq!(out, "Signed out\nOpened /\n");
    assert_eq!(storage.get_item(TOKEN_KEY)?, None);

    cleanup(&file);
    Ok(())
}

#[tokio::test]
async fn admin_lands_on_admin_dashboard() -> Result<()> {
    let server = MockServer::start().await;
    mount_login(&server, "admin").await;
    let file = session_file();

    let out = execute_with(&portal(&server, &file)?, login("ana@clinic.tld", None)).await?;
    assert_eq!(out, "Signed in as ana (admin)\nOpened /admin-dashboard\n");

    cleanup(&file);
    Ok(())
}

#[tokio::test]
async fn rejected_login_shows_backend_message_and_stores_nothing() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let file = session_file();
    let ctx = portal(&server, &file)?;

    let err = execute_with(&ctx, login("ana@clinic.tld", None))
        .await
        .err()
        .map(|err| err.to_string());
    assert_eq!(err.as_deref(), Some("Invalid credentials"));

    let err = execute_with(&ctx, login("ana@clinic.tld", None))
        .await
        .err()
        .map(|err| err.to_string());
    assert_eq!(err.as_deref(), Some(LOGIN_FAILED_MESSAGE));

    assert!(!ctx.sessions().is_authenticated());
    assert!(!file.exists());
    Ok(())
}

#[tokio::test]
async fn guarded_views_never_call_the_backend_when_signed_out() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = portal(&server, &session_file())?;
    for action in [Action::Appointments, Action::Reports, Action::Notifications] {
        let err = execute_with(&ctx, action).await.err().map(|e| e.to_string());
        let Some(err) = err else {
            panic!("guarded view rendered without a session");
        };
        assert!(err.starts_with("sign in first"), "{err}");
    }
    Ok(())
}

#[tokio::test]
async fn doctors_by_specialization_keep_the_label_in_one_segment() -> Result<()> {
    let server = MockServer::start().await;
    mount_login(&server, "patient").await;
    Mock::given(method("GET"))
        .and(path(
            "/api/auth/doctors/specialization/Psychiatrist%20%2F%20Psychologist",
        ))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "d-1", "username": "dr-mind", "specialization": "Psychiatrist / Psychologist", "experience": 9}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let file = session_file();
    let ctx = portal(&server, &file)?;
    execute_with(&ctx, login("ana@clinic.tld", None)).await?;

    let out = execute_with(
        &ctx,
        Action::Doctors {
            specialization: Some(Specialization::PsychiatristPsychologist),
        },
    )
    .await?;
    assert!(out.starts_with("d-1"), "{out}");
    assert!(out.trim_end().ends_with("9y"), "{out}");

    cleanup(&file);
    Ok(())
}

#[tokio::test]
async fn notifications_send_the_bearer_token() -> Result<()> {
    let server = MockServer::start().await;
    mount_login(&server, "doctor").await;
    Mock::given(method("GET"))
        .and(path("/api/auth/notifications"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notifications": [
                {"_id": "n-1", "message": "Appointment approved", "read": false},
                {"_id": "n-2", "message": "Welcome", "read": true}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = session_file();
    let ctx = portal(&server, &file)?;
    execute_with(&ctx, login("ana@clinic.tld", None)).await?;

    let out = execute_with(&ctx, Action::Notifications).await?;
    assert_eq!(out, "1 unread\n* Appointment approved\n  Welcome\n");

    cleanup(&file);
    Ok(())
}

#[tokio::test]
async fn booking_sends_the_recommended_specialization() -> Result<()> {
    let server = MockServer::start().await;
    mount_login(&server, "patient").await;
    Mock::given(method("POST"))
        .and(path("/api/appointments/request"))
        .and(header("authorization", "Bearer tok-1"))
        .and(body_json(json!({
            "doctorId": "d-7",
            "reason": "Heart Problems",
            "specialization": "Cardiologist",
            "scheduledTime": "2026-03-14T09:30"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let file = session_file();
    let ctx = portal(&server, &file)?;
    execute_with(&ctx, login("ana@clinic.tld", None)).await?;

    let out = execute_with(
        &ctx,
        Action::Book(BookArgs {
            doctor_id: "d-7".to_string(),
            problem: Problem::HeartProblems,
            specialization: None,
            scheduled_time: "2026-03-14T09:30".to_string(),
        }),
    )
    .await?;
    assert_eq!(out, "Appointment requested successfully!\n");

    cleanup(&file);
    Ok(())
}

#[tokio::test]
async fn dashboard_reports_failed_panels_without_dropping_the_rest() -> Result<()> {
    let server = MockServer::start().await;
    mount_login(&server, "patient").await;
    Mock::given(method("GET"))
        .and(path("/api/auth/doctors"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "d-1", "username": "dr-a", "specialization": "Cardiologist"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/appointments/mine"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/reports/my-reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "r-1", "title": "Blood panel"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/notifications"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})))
        .mount(&server)
        .await;

    let file = session_file();
    let ctx = portal(&server, &file)?;
    execute_with(&ctx, login("ana@clinic.tld", None)).await?;
    let session = ctx.mount(Route::PatientDashboard)?;

    let data = dashboard::load(ctx.api(), &session, None).await;
    assert_eq!(data.doctors.len(), 1);
    assert_eq!(data.reports.len(), 1);
    assert!(data.appointments.is_empty());
    assert_eq!(
        data.errors,
        vec![
            "appointments: Request failed".to_string(),
            "notifications: Token expired".to_string(),
        ]
    );
    // Read failures leave the session alone.
    assert!(ctx.sessions().is_authenticated());

    cleanup(&file);
    Ok(())
}

#[tokio::test]
async fn availability_lists_published_slots() -> Result<()> {
    let server = MockServer::start().await;
    mount_login(&server, "patient").await;
    Mock::given(method("GET"))
        .and(path("/api/auth/doctors/availability/d-7"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "availability": [
                {"day": "Monday", "startTime": "09:00", "endTime": "12:00"},
                {"day": "Thursday", "startTime": "14:00"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = session_file();
    let ctx = portal(&server, &file)?;
    execute_with(&ctx, login("ana@clinic.tld", None)).await?;

    let out = execute_with(
        &ctx,
        Action::Availability {
            doctor_id: " d-7 ".to_string(),
        },
    )
    .await?;
    assert_eq!(out, "Monday     09:00 - 12:00\nThursday   14:00 - ?\n");

    cleanup(&file);
    Ok(())
}
