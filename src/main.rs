use std::sync::Arc;

use account_service_backend::config::{
    CorsConfig, RateLimitConfig, ServerConfig, StorageBackend, StorageConfig,
};
use account_service_backend::db::Database;
use account_service_backend::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserStore,
};
use account_service_backend::routes::configure_all_routes;
use account_service_backend::services::auth::PasswordHasher;
use account_service_backend::state::AppState;
use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 계정 서비스 시작중...");

    let storage = StorageConfig::backend();
    let store = initialize_store(storage).await?;

    let hasher = PasswordHasher::from_config();
    info!("🔐 bcrypt cost: {}", hasher.cost());

    let state = web::Data::new(AppState::new(store, hasher, storage));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(state).await
}

async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Rate Limiting 설정이 올바르지 않습니다 (0 값은 허용되지 않음)",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    info!("🌍 CORS 허용 Origin: {:?}", allowed_origins);

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);

        App::new()
            .app_data(state.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));

    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    info!("Current profile: {}", profile);
}

/// 설정된 저장소를 준비합니다.
///
/// MongoDB는 연결 확인과 유니크 인덱스 생성까지 마친 뒤 반환합니다.
async fn initialize_store(storage: StorageBackend) -> std::io::Result<Arc<dyn UserStore>> {
    match storage {
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                std::io::Error::other(format!("데이터베이스 연결 실패: {}", e))
            })?;

            let repository = MongoUserRepository::new(&database);
            repository.create_indexes().await.map_err(|e| {
                error!("인덱스 생성 실패: {}", e);
                std::io::Error::other(format!("인덱스 생성 실패: {}", e))
            })?;

            info!("✅ users 컬렉션 인덱스 준비 완료");
            Ok(Arc::new(repository))
        }
        StorageBackend::Memory => {
            warn!("⚠️ 인메모리 저장소 사용 중 - 재시작 시 모든 데이터가 사라집니다");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
