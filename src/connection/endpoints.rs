use actix_web::get;
use actix_web::web::{Data, Json};

use super::{check_connection, ConnectionCheck};
use crate::database::Database;

/// Open to every role; failures are part of the body, never an error status.
#[get("/connection-check")]
#[tracing::instrument(skip(db))]
pub async fn get_connection_check(db: Data<Box<dyn Database>>) -> Json<ConnectionCheck> {
    Json(check_connection(&***db).await)
}
