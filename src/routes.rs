use crate::{
    api::{attendance, employee, health, json_error_handler},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;

type Limiter = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-route limiter state. Build once and hand clones to every worker:
/// clones share the same quota.
#[derive(Clone)]
pub struct RateLimits {
    register: Limiter,
    attendance: Limiter,
}

impl RateLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            register: build_limiter(config.rate_register_per_min),
            attendance: build_limiter(config.rate_attendance_per_min),
        }
    }
}

// Helper to build a per-route limiter
fn build_limiter(requests_per_min: u32) -> Limiter {
    let requests_per_min = requests_per_min.max(1);
    GovernorConfigBuilder::default()
        .per_millisecond((60_000 / requests_per_min as u64).max(1))
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .unwrap_or_else(GovernorConfig::default)
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limits: &RateLimits) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(config.max_body_bytes)
            .error_handler(json_error_handler),
    );

    cfg.service(
        web::resource("/register")
            .wrap(Governor::new(&limits.register))
            .route(web::post().to(employee::register)),
    )
    .service(
        web::resource("/attendance")
            .wrap(Governor::new(&limits.attendance))
            .route(web::post().to(attendance::check_attendance)),
    )
    .service(web::resource("/health").route(web::get().to(health::health)));
}
