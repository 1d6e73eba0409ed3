use actix_web::web::{self, Data, FormConfig, JsonConfig, PathConfig, QueryConfig, ServiceConfig};
use actix_web::{App, HttpServer, ResponseError};
use mongodb::{bson, Client};
use tracing::info;
use tracing_actix_web::TracingLogger;

pub mod campaign;
pub mod config;
pub mod connection;
pub mod creator;
pub mod dashboard;
pub mod database;
pub mod error;
pub mod format;
pub mod navigation;
pub mod notification;
pub mod profile;
pub mod proposal;
pub mod seed;
pub mod session;
pub mod typedid;

use config::Config;
use database::{Database, MemoryDatabase, MongoDatabase};
use error::Error;
use session::SessionStore;

/// Registers every route along with the shared state it needs. `/new`
/// routes are registered before `/{campaign_id}` so they are matched first.
pub fn configure(
    db: Data<Box<dyn Database>>,
    sessions: Data<SessionStore>,
) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        cfg.app_data(JsonConfig::default().error_handler(|err, _req| {
            // format json errors with custom format
            Error::InvalidJson(err).into()
        }))
        .app_data(PathConfig::default().error_handler(|err, _req| {
            // format path errors with custom format
            Error::InvalidPath(err).into()
        }))
        .app_data(FormConfig::default().error_handler(|err, _req| {
            // format form errors with custom format
            Error::InvalidForm(err).into()
        }))
        .app_data(QueryConfig::default().error_handler(|err, _req| {
            // format query errors with custom format
            Error::InvalidQuery(err).into()
        }))
        .app_data(db)
        .app_data(sessions)
        .service(navigation::endpoints::get_onboarding)
        .service(navigation::endpoints::navigate)
        .service(session::endpoints::get_session)
        .service(session::endpoints::select_role)
        .service(session::endpoints::end_session)
        .service(connection::endpoints::get_connection_check)
        .service(dashboard::endpoints::get_brand_dashboard)
        .service(dashboard::endpoints::get_creator_dashboard)
        .service(campaign::endpoints::get_brand_campaigns)
        .service(campaign::endpoints::get_wizard)
        .service(campaign::endpoints::update_wizard)
        .service(campaign::endpoints::advance_wizard)
        .service(campaign::endpoints::retreat_wizard)
        .service(campaign::endpoints::submit_wizard)
        .service(campaign::endpoints::discard_wizard)
        .service(campaign::endpoints::get_campaign_management)
        .service(campaign::endpoints::review_campaign_applicant)
        .service(campaign::endpoints::delete_campaign)
        .service(campaign::endpoints::get_creator_campaigns)
        .service(creator::endpoints::get_candidates)
        .service(creator::endpoints::review_candidate)
        .service(proposal::endpoints::get_brand_proposals)
        .service(proposal::endpoints::respond_to_brand_proposal)
        .service(proposal::endpoints::get_collabs)
        .service(proposal::endpoints::review_collab)
        .service(proposal::endpoints::get_creator_proposals)
        .service(proposal::endpoints::respond_as_creator)
        .service(proposal::endpoints::get_apply_form)
        .service(proposal::endpoints::submit_proposal)
        .service(profile::endpoints::get_brand_profile)
        .service(profile::endpoints::get_brand_settings)
        .service(profile::endpoints::save_brand_settings)
        .service(profile::endpoints::get_creator_profile)
        .service(profile::endpoints::get_creator_settings)
        .service(profile::endpoints::save_creator_settings)
        .default_service(web::to(|| async { Error::PathNotFound.error_response() }));
    }
}

/// Connects to mongodb when a uri is configured, otherwise serves the
/// fixtures from memory.
pub async fn open_database(config: &Config) -> Result<Box<dyn Database>, Error> {
    let uri = match &config.mongodb_uri {
        Some(uri) => uri,
        None => {
            info!("no mongodb uri configured, serving fixtures from memory");
            let db = MemoryDatabase::with_fixtures(config.connection_text.clone());
            return Ok(Box::new(db));
        }
    };

    info!("connecting to db: {}", uri);
    let db = Client::with_uri_str(uri)
        .await?
        .database(&config.database_name);

    // ping the database to ensure connection is established
    db.run_command(bson::doc! { "ping": 1 }, None).await?;

    let db = MongoDatabase::new(db);
    if config.seed {
        seed::seed(&db).await?;
    }

    Ok(Box::new(db))
}

pub async fn run(config: Config) -> Result<(), Error> {
    let db = Data::new(open_database(&config).await?);
    let sessions = Data::new(SessionStore::with_ttl(config.session_ttl));

    info!("listening on {}", config.bind_address);
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(configure(db.clone(), sessions.clone()))
    })
    .bind(&config.bind_address)?
    .run()
    .await?;

    Ok(())
}
