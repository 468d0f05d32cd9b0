use std::sync::Arc;

use sea_orm::DatabaseConnection;

use emmaus_domain::catalog::Catalog;

use crate::infra::auth::HttpAuthProvider;
use crate::infra::db::{
    DbDioceseRepository, DbGroupRepository, DbManagerRepository, DbProgressRepository,
    DbRegionRepository, DbUserRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub catalog: Arc<Catalog>,
    pub auth: HttpAuthProvider,
}

impl AppState {
    pub fn new(db: DatabaseConnection, auth: HttpAuthProvider) -> Self {
        Self {
            db,
            catalog: Arc::new(Catalog::builtin()),
            auth,
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn diocese_repo(&self) -> DbDioceseRepository {
        DbDioceseRepository {
            db: self.db.clone(),
        }
    }

    pub fn region_repo(&self) -> DbRegionRepository {
        DbRegionRepository {
            db: self.db.clone(),
        }
    }

    pub fn group_repo(&self) -> DbGroupRepository {
        DbGroupRepository {
            db: self.db.clone(),
        }
    }

    pub fn manager_repo(&self) -> DbManagerRepository {
        DbManagerRepository {
            db: self.db.clone(),
        }
    }

    pub fn progress_repo(&self) -> DbProgressRepository {
        DbProgressRepository {
            db: self.db.clone(),
        }
    }

    pub fn auth_provider(&self) -> HttpAuthProvider {
        self.auth.clone()
    }
}
