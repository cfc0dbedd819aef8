use once_cell::sync::Lazy;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use std::path::PathBuf;
use uuid::Uuid;

use cricket_leaderboard_backend::config::settings::{get_config, DatabaseSettings};
use cricket_leaderboard_backend::run;
use cricket_leaderboard_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub uploads_dir: PathBuf,
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    let connection_pool = configure_db(&configuration.database).await;

    let uploads_dir = std::env::temp_dir().join(format!("cricket-uploads-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&uploads_dir).expect("Failed to create uploads dir");

    let server = run(listener, connection_pool.clone(), uploads_dir.clone())
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
        uploads_dir,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// Register a player over the API and return its id.
pub async fn create_player(app_address: &str, name: &str) -> Uuid {
    let client = Client::new();
    let response = client
        .post(format!("{}/players", app_address))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to execute create player request.");
    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    Uuid::parse_str(body["id"].as_str().expect("No id in response")).expect("Invalid player id")
}

/// Create a match over the API and return its id.
pub async fn create_match(app_address: &str, body: serde_json::Value) -> Uuid {
    let client = Client::new();
    let response = client
        .post(format!("{}/matches", app_address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute create match request.");
    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    Uuid::parse_str(body["id"].as_str().expect("No id in response")).expect("Invalid match id")
}
