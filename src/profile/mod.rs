use serde::{Deserialize, Serialize};

use crate::notification::Notification;
use crate::session::UserType;

pub mod endpoints;
pub use endpoints::ProfileBody;

const DEFAULT_AVATAR: &str = "https://i.pravatar.cc/150?img=8";

/// Profile details for the signed-in role. There is no account storage, so
/// every role starts from the same defaults and edits are not kept.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub website: String,
    pub instagram: String,
    pub avatar: String,
}

impl Profile {
    pub fn default_for(role: UserType) -> Profile {
        let (name, bio) = match role {
            UserType::Brand => (
                "Minha Empresa",
                "Empresa líder em moda sustentável, conectando marcas e criadores.",
            ),
            UserType::Creator => (
                "João Silva",
                "Criador de conteúdo apaixonado por moda e lifestyle.",
            ),
        };

        Profile {
            name: name.to_string(),
            email: "contato@exemplo.com".to_string(),
            phone: "(11) 99999-9999".to_string(),
            location: "São Paulo, SP".to_string(),
            bio: bio.to_string(),
            website: "https://meusite.com".to_string(),
            instagram: "@meuinstagram".to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
        }
    }
}

pub fn saved_notification() -> Notification {
    Notification::new("Perfil salvo!", "Suas alterações foram salvas com sucesso.")
}
