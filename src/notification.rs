use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Destructive,
}

/// A transient message shown to the user after an action. Actions never
/// change the stored records, so this is all they produce.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Notification {
        Notification {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Notification {
        Notification {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActionBody {
    pub notification: Notification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
}

impl ActionBody {
    pub fn notify(notification: Notification) -> ActionBody {
        ActionBody {
            notification,
            redirect_to: None,
        }
    }

    pub fn redirect(notification: Notification, redirect_to: impl Into<String>) -> ActionBody {
        ActionBody {
            notification,
            redirect_to: Some(redirect_to.into()),
        }
    }
}
