use std::fmt::{Debug, Display};
use std::io::Error as IoError;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError, UrlencodedError};
use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use derivative::Derivative;
use mongodb::bson::ser::Error as BsonError;
use mongodb::error::Error as DatabaseError;
use serde::{Serialize, Serializer};

use crate::campaign::wizard::{DraftField, WizardStep};
use crate::creator::CreatorId;
use crate::proposal::ProposalId;
use crate::session::UserType;

#[derive(Debug, Serialize, Derivative)]
#[derivative(PartialEq)]
#[serde(untagged)]
pub enum Error {
    // 303
    RoleNotSelected,
    RoleMismatch {
        required: UserType,
        current: UserType,
    },

    // 400
    #[serde(serialize_with = "display")]
    InvalidJson(#[derivative(PartialEq = "ignore")] JsonPayloadError),
    #[serde(serialize_with = "display")]
    InvalidPath(#[derivative(PartialEq = "ignore")] PathError),
    #[serde(serialize_with = "display")]
    InvalidForm(#[derivative(PartialEq = "ignore")] UrlencodedError),
    #[serde(serialize_with = "display")]
    InvalidQuery(#[derivative(PartialEq = "ignore")] QueryPayloadError),

    // 404
    PathNotFound,
    CampaignNotFound {
        campaign_id: String,
        back_to: String,
    },
    CreatorNotFound {
        creator_id: CreatorId,
    },
    ProposalNotFound {
        proposal_id: ProposalId,
    },

    // 409
    WizardFieldNotOnStep {
        field: DraftField,
        step: WizardStep,
    },
    WizardAtFirstStep,
    WizardAtLastStep,
    WizardNotAtReview {
        step: WizardStep,
    },
    CommissionOutOfRange {
        commission_percentage: u8,
    },

    // 500
    ExistentialState(String),
    InvalidConfiguration {
        key: String,
        value: String,
    },
    #[serde(serialize_with = "display")]
    FailedDatabaseCall(#[derivative(PartialEq = "ignore")] DatabaseError),
    #[serde(serialize_with = "display")]
    FailedToSerializeToBson(#[derivative(PartialEq = "ignore")] BsonError),
    #[serde(serialize_with = "display")]
    IoError(#[derivative(PartialEq = "ignore")] IoError),
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::RoleNotSelected => "E3031000",
            Error::RoleMismatch { .. } => "E3031001",
            Error::InvalidJson(_) => "E4001000",
            Error::InvalidPath(_) => "E4001001",
            Error::InvalidForm(_) => "E4001002",
            Error::InvalidQuery(_) => "E4001003",
            Error::PathNotFound => "E4041000",
            Error::CampaignNotFound { .. } => "E4041001",
            Error::CreatorNotFound { .. } => "E4041002",
            Error::ProposalNotFound { .. } => "E4041003",
            Error::WizardFieldNotOnStep { .. } => "E4091000",
            Error::WizardAtFirstStep => "E4091001",
            Error::WizardAtLastStep => "E4091002",
            Error::WizardNotAtReview { .. } => "E4091003",
            Error::CommissionOutOfRange { .. } => "E4091004",
            Error::ExistentialState(_) => "E5001000",
            Error::InvalidConfiguration { .. } => "E5001001",
            Error::FailedDatabaseCall(_) => "E5001002",
            Error::FailedToSerializeToBson(_) => "E5001003",
            Error::IoError(_) => "E5001004",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Error::RoleNotSelected => "A role must be selected before visiting this page",
            Error::RoleMismatch { .. } => "The requested page belongs to the other role",
            Error::InvalidJson(_) => "The given json could not be parsed",
            Error::InvalidPath(_) => "The given path could not be parsed",
            Error::InvalidForm(_) => "The given form could not be parsed",
            Error::InvalidQuery(_) => "The given query could not be parsed",
            Error::PathNotFound => "The requested path was not found",
            Error::CampaignNotFound { .. } => "The requested campaign was not found",
            Error::CreatorNotFound { .. } => "The requested creator was not found",
            Error::ProposalNotFound { .. } => "The requested proposal was not found",
            Error::WizardFieldNotOnStep { .. } => {
                "The given field is not shown on the current wizard step"
            }
            Error::WizardAtFirstStep => "The wizard is already on its first step",
            Error::WizardAtLastStep => "The wizard is already on its last step",
            Error::WizardNotAtReview { .. } => {
                "The campaign can only be submitted from the review step"
            }
            Error::CommissionOutOfRange { .. } => {
                "The commission percentage must be between 1 and 100"
            }
            Error::ExistentialState(_) => "The server detected an invalid state",
            Error::InvalidConfiguration { .. } => "The server configuration could not be parsed",
            Error::FailedDatabaseCall(_) => {
                "An error occurred when communicating with the database"
            }
            Error::FailedToSerializeToBson(_) => {
                "An error occurred when serializing an object to bson"
            }
            Error::IoError(_) => "An error occurred during an I/O operation",
        }
    }

    /// Where the client should navigate instead, for errors that are
    /// redirects rather than failures.
    pub fn redirect_to(&self) -> Option<String> {
        match self {
            Error::RoleNotSelected => Some("/".to_string()),
            Error::RoleMismatch { current, .. } => Some(current.dashboard_path().to_string()),
            _ => None,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::RoleNotSelected => StatusCode::SEE_OTHER,
            Error::RoleMismatch { .. } => StatusCode::SEE_OTHER,
            Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Error::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Error::PathNotFound => StatusCode::NOT_FOUND,
            Error::CampaignNotFound { .. } => StatusCode::NOT_FOUND,
            Error::CreatorNotFound { .. } => StatusCode::NOT_FOUND,
            Error::ProposalNotFound { .. } => StatusCode::NOT_FOUND,
            Error::WizardFieldNotOnStep { .. } => StatusCode::CONFLICT,
            Error::WizardAtFirstStep => StatusCode::CONFLICT,
            Error::WizardAtLastStep => StatusCode::CONFLICT,
            Error::WizardNotAtReview { .. } => StatusCode::CONFLICT,
            Error::CommissionOutOfRange { .. } => StatusCode::CONFLICT,
            Error::ExistentialState(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::InvalidConfiguration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::FailedDatabaseCall(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::FailedToSerializeToBson(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct Dummy<'a> {
            error_code: &'static str,
            error_message: &'static str,
            error_meta: &'a Error,
            #[serde(skip_serializing_if = "Option::is_none")]
            redirect_to: Option<String>,
        }

        let redirect_to = self.redirect_to();
        let mut response = HttpResponse::build(self.status_code());
        if let Some(location) = &redirect_to {
            response.insert_header((header::LOCATION, location.as_str()));
        }

        response.json(&Dummy {
            error_code: self.error_code(),
            error_message: self.error_message(),
            error_meta: self,
            redirect_to,
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::FailedDatabaseCall(err) => Display::fmt(err, f),
            Error::FailedToSerializeToBson(err) => Display::fmt(err, f),
            Error::IoError(err) => Display::fmt(err, f),
            Error::ExistentialState(state) => write!(f, "{}: {}", self.error_message(), state),
            _ => f.write_str(self.error_message()),
        }
    }
}

impl From<DatabaseError> for Error {
    fn from(error: DatabaseError) -> Error {
        Error::FailedDatabaseCall(error)
    }
}

impl From<BsonError> for Error {
    fn from(error: BsonError) -> Error {
        Error::FailedToSerializeToBson(error)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::IoError(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidJson(err) => Some(err),
            Error::InvalidPath(err) => Some(err),
            Error::InvalidForm(err) => Some(err),
            Error::InvalidQuery(err) => Some(err),
            Error::FailedDatabaseCall(err) => Some(err),
            Error::FailedToSerializeToBson(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
