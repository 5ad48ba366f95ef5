//! File-based implementation of UserRepository

use std::collections::BTreeSet;
use std::path::PathBuf;

use tanker_domain::repository::UserRepository;
use tanker_types::{Division, Error, User};

use super::json_file::read_json_array;

/// Operator accounts stored as a JSON array
pub struct FileUserRepository {
    path: PathBuf,
}

impl FileUserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl UserRepository for FileUserRepository {
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>, Error> {
        Ok(self.find_all()?.into_iter().find(|u| u.user_id == user_id))
    }

    fn find_all(&self) -> Result<Vec<User>, Error> {
        read_json_array(&self.path)
    }

    fn find_by_division(&self, division: Division) -> Result<Vec<User>, Error> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|u| u.division == division)
            .collect())
    }

    fn find_owners(
        &self,
        divisions: &BTreeSet<Division>,
        vehicle_nos: &BTreeSet<String>,
    ) -> Result<Vec<User>, Error> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|u| divisions.contains(&u.division))
            .filter(|u| !u.owned_vehicle_nos.is_disjoint(vehicle_nos))
            .collect())
    }
}
